//! Nintendo console serial extractors.
//!
//! This crate provides serial-number heuristics for Nintendo consoles:
//!
//! - GameCube
//!
//! Wii images carry their serial as plain text and are handled by the
//! generic ASCII scanner rather than a dedicated extractor.

pub mod gamecube;

pub use gamecube::{GameCubeSerialExtractor, detect_gc_game};
