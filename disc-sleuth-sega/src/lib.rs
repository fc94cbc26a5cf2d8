//! Sega console serial extractors.
//!
//! This crate provides serial-number heuristics for Sega consoles:
//!
//! - Sega CD / Mega-CD
//! - Saturn
//! - Dreamcast

pub mod dreamcast;
pub mod saturn;
pub mod sega_cd;

pub use dreamcast::{DreamcastSerialExtractor, detect_dc_game};
pub use saturn::{SaturnSerialExtractor, detect_sat_game};
pub use sega_cd::{SegaCdSerialExtractor, detect_scd_game};
