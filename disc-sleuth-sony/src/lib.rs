//! Sony console serial extractors.
//!
//! This crate provides serial-number heuristics for Sony consoles:
//!
//! - PlayStation (PS1/PSX)
//! - PlayStation Portable (PSP)

pub mod ps1;
pub mod psp;

pub use ps1::{Ps1SerialExtractor, detect_ps1_game};
pub use psp::{PspSerialExtractor, detect_psp_game};
