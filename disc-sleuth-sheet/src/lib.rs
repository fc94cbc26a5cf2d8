//! CUE and GDI sheet parsing.
//!
//! A "sheet" is a text file describing how one or more binary image files
//! are organized into tracks. This crate resolves, from a sheet's ordered
//! FILE/TRACK/INDEX declarations, which referenced file and byte range
//! holds the actual game data, which is the part a downstream matcher
//! hashes or fingerprints.
//!
//! Supports:
//! - CUE sheets (.cue)
//! - GDI sheets (.gdi, Dreamcast)

pub mod cue;
pub mod gdi;
pub mod token;

pub use cue::ResolvedCueTrack;
pub use token::next_token;

/// Longest token the sheet parsers accept; longer tokens are truncated.
pub const MAX_TOKEN_LEN: usize = 255;
