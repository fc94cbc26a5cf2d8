//! Disc-image identification entry points.
//!
//! Ties the per-platform serial extractors together behind a single
//! [`identify_game`] call: magic-number detection picks the extractor when
//! it can, otherwise every heuristic is tried in turn, ending with the
//! generic ASCII scanner.

pub mod ascii;
pub mod magic;

pub use ascii::{AsciiSerialExtractor, detect_serial_ascii_game};
pub use magic::detect_system;

use disc_sleuth_core::{IdentError, Platform, ReadSeek, SerialExtractor};
use disc_sleuth_nintendo::GameCubeSerialExtractor;
use disc_sleuth_sega::{DreamcastSerialExtractor, SaturnSerialExtractor, SegaCdSerialExtractor};
use disc_sleuth_sony::{Ps1SerialExtractor, PspSerialExtractor};

/// Every platform-specific extractor, in the order they are tried.
pub fn all_extractors() -> Vec<Box<dyn SerialExtractor>> {
    vec![
        Box::new(Ps1SerialExtractor),
        Box::new(PspSerialExtractor),
        Box::new(GameCubeSerialExtractor),
        Box::new(SegaCdSerialExtractor),
        Box::new(SaturnSerialExtractor),
        Box::new(DreamcastSerialExtractor),
    ]
}

/// The extractor registered for a platform, if any.
pub fn extractor_for_platform(platform: Platform) -> Option<Box<dyn SerialExtractor>> {
    all_extractors()
        .into_iter()
        .find(|e| e.platform() == platform)
}

/// Identify a disc image, returning the platform and its normalized serial.
///
/// Magic detection narrows the search to one extractor when a signature
/// matches. When it does not, or when that extractor comes up empty, every
/// platform heuristic runs in registration order, with the generic ASCII
/// scanner as the last resort.
pub fn identify_game(reader: &mut dyn ReadSeek) -> Result<Option<(Platform, String)>, IdentError> {
    if let Some(platform) = magic::detect_system(reader)? {
        if let Some(extractor) = extractor_for_platform(platform) {
            if let Some(id) = extractor.try_extract(reader)? {
                return Ok(Some((platform, id)));
            }
            log::debug!("{platform} magic matched but no serial was found");
        }
    }

    for extractor in all_extractors() {
        if let Some(id) = extractor.try_extract(reader)? {
            return Ok(Some((extractor.platform(), id)));
        }
    }

    let fallback = AsciiSerialExtractor;
    match fallback.try_extract(reader)? {
        Some(id) => Ok(Some((fallback.platform(), id))),
        None => Ok(None),
    }
}

#[cfg(test)]
#[path = "tests/identify_tests.rs"]
mod tests;
