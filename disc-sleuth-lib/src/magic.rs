//! Fixed-offset magic-number detection.

use std::io::SeekFrom;

use disc_sleuth_core::util::read_up_to;
use disc_sleuth_core::{IdentError, Platform, ReadSeek};

/// One fixed-offset signature.
struct MagicEntry {
    offset: u64,
    platform: Platform,
    magic: &'static [u8],
}

/// Declaration order matters: psp and ps1 share offset 0x008008, and the
/// first matching entry wins.
const MAGIC_NUMBERS: &[MagicEntry] = &[
    MagicEntry {
        offset: 0x008008,
        platform: Platform::Psp,
        magic: b"PSP GAME",
    },
    MagicEntry {
        offset: 0x008008,
        platform: Platform::Ps1,
        magic: b"PLAYSTATION",
    },
    MagicEntry {
        offset: 0x00001C,
        platform: Platform::GameCube,
        magic: &[0xC2, 0x33, 0x9F, 0x3D],
    },
    MagicEntry {
        offset: 0,
        platform: Platform::SegaCd,
        magic: b"SEGADISCSYSTEM",
    },
    MagicEntry {
        offset: 0,
        platform: Platform::Saturn,
        magic: b"SEGA SEGASATURN",
    },
    MagicEntry {
        offset: 0,
        platform: Platform::Dreamcast,
        magic: b"SEGA SEGAKATANA",
    },
];

/// Compare the stream against each known signature in table order.
///
/// A seek or short read disqualifies only that entry; the scan continues
/// with the next one.
pub fn detect_system(reader: &mut dyn ReadSeek) -> Result<Option<Platform>, IdentError> {
    let mut buf = [0u8; 16];
    for entry in MAGIC_NUMBERS {
        if reader.seek(SeekFrom::Start(entry.offset)).is_err() {
            continue;
        }
        let window = &mut buf[..entry.magic.len()];
        match read_up_to(reader, window) {
            Ok(n) if n == entry.magic.len() && &window[..] == entry.magic => {
                log::debug!("magic match at {:#x}: {}", entry.offset, entry.platform);
                return Ok(Some(entry.platform));
            }
            _ => {}
        }
    }
    Ok(None)
}

#[cfg(test)]
#[path = "tests/magic_tests.rs"]
mod tests;
