//! Generic ASCII serial scanner.
//!
//! Fallback for images with no dedicated extractor (Wii-style ISOs): scans
//! the head of the image for a short run of serial characters.

use std::io::SeekFrom;

use disc_sleuth_core::util::{field_to_ascii, read_up_to};
use disc_sleuth_core::{IdentError, Platform, ReadSeek, SerialExtractor};

/// Probe offsets 0..SCAN_LIMIT.
const SCAN_LIMIT: usize = 10_000;

/// Bytes examined at each probe offset.
const WINDOW_LEN: usize = 15;

/// Generic serial extractor used when no platform heuristic applies.
#[derive(Debug, Default)]
pub struct AsciiSerialExtractor;

impl SerialExtractor for AsciiSerialExtractor {
    fn platform(&self) -> Platform {
        Platform::Wii
    }

    fn try_extract(&self, reader: &mut dyn ReadSeek) -> Result<Option<String>, IdentError> {
        detect_serial_ascii_game(reader)
    }
}

fn is_serial_char(b: u8) -> bool {
    b == b'-' || b.is_ascii_digit() || b.is_ascii_uppercase()
}

/// Scan for a run of 4 to 8 serial characters (`A-Z`, `0-9`, `-`) ended by
/// a non-matching byte.
pub fn detect_serial_ascii_game(reader: &mut dyn ReadSeek) -> Result<Option<String>, IdentError> {
    reader.seek(SeekFrom::Start(0))?;

    let mut buf = vec![0u8; SCAN_LIMIT + WINDOW_LEN];
    let n = read_up_to(reader, &mut buf)?;
    let buf = &buf[..n];

    let mut pos = 0;
    while pos < SCAN_LIMIT && pos < buf.len() {
        let window = &buf[pos..(pos + WINDOW_LEN).min(buf.len())];

        // WBFS containers carry the literal "WBFS" at offset 0; skip it.
        if window.starts_with(b"WBFS") && window.get(4).copied().unwrap_or(0) == 0 {
            pos += 1;
            continue;
        }

        let run = window.iter().take_while(|&&b| is_serial_char(b)).count();
        if (4..=8).contains(&run) {
            let id = field_to_ascii(&window[..run]);
            log::debug!("ascii serial run at offset {pos}: {id}");
            return Ok(Some(id));
        }

        pos += 1;
    }

    Ok(None)
}

#[cfg(test)]
#[path = "tests/ascii_tests.rs"]
mod tests;
