//! Sega Dreamcast serial extraction.
//!
//! The IP.BIN header carries the product number at offset 0x40. The raw
//! field varies wildly across releases (missing hyphens, embedded spaces,
//! region suffixes fused to the body), so normalization branches on the
//! publisher prefix and splices the pieces back into redump shape.

use std::io::SeekFrom;

use disc_sleuth_core::util::{collapse_spaces, field_to_ascii, read_up_to, spaces_to, trim_field};
use disc_sleuth_core::{IdentError, Platform, ReadSeek, SerialExtractor};

/// Offset of the product-number field in the IP.BIN header.
const SERIAL_OFFSET: u64 = 0x0040;
const SERIAL_LEN: usize = 10;

/// Serial extractor for Dreamcast disc images.
#[derive(Debug, Default)]
pub struct DreamcastSerialExtractor;

impl SerialExtractor for DreamcastSerialExtractor {
    fn platform(&self) -> Platform {
        Platform::Dreamcast
    }

    fn try_extract(&self, reader: &mut dyn ReadSeek) -> Result<Option<String>, IdentError> {
        detect_dc_game(reader)
    }
}

/// Read the header product number and normalize it to a redump serial.
pub fn detect_dc_game(reader: &mut dyn ReadSeek) -> Result<Option<String>, IdentError> {
    reader.seek(SeekFrom::Start(SERIAL_OFFSET))?;
    let mut raw = [0u8; SERIAL_LEN];
    let n = read_up_to(reader, &mut raw)?;
    if n == 0 {
        return Ok(None);
    }

    // Trim, squeeze space runs, then turn the remaining inner spaces into
    // hyphens. The result is pure ASCII, so byte slicing below is safe.
    let s = spaces_to(&collapse_spaces(trim_field(&field_to_ascii(&raw[..n]))), '-');
    log::debug!("dc header field: {s}");

    let hyphens = s.matches('-').count();
    let len = s.len();

    if s.starts_with("T-") {
        if hyphens >= 2 {
            // Already carries a region suffix after its own hyphen.
            return Ok(Some(s));
        }
        if len <= 7 {
            return Ok(Some(s));
        }
        // Body and fused region suffix, e.g. T-36801N05.
        return Ok(Some(format!("{}-{}", &s[..7], &s[len - 2..])));
    }

    if s.starts_with('T') {
        // Missing hyphen after the T, e.g. T40205N 50.
        let pre = format!("T-{}", &s[1..]);
        let plen = pre.len();
        if pre.matches('-').count() >= 2 {
            if let Some(idx) = pre.rfind('-') {
                return Ok(Some(format!("{}-{}", &pre[..idx], &pre[plen - 2..])));
            }
            return Ok(None);
        }
        let adjusted = plen - 1;
        if adjusted <= 8 {
            return Ok(Some(pre));
        }
        return Ok(Some(format!("{}-{}", &pre[..7], &pre[plen - 3..])));
    }

    if s.starts_with("HDR-") {
        if hyphens >= 2 {
            if let Some(idx) = s.rfind('-') {
                return Ok(Some(format!("{}-{}", &s[..idx - 1], &s[len - 4..])));
            }
            return Ok(None);
        }
        return Ok(Some(s));
    }

    if s.starts_with("MK-") {
        if len <= 8 {
            return Ok(Some(s));
        }
        return Ok(Some(format!("{}-{}", &s[..8], &s[len - 2..])));
    }

    Ok(None)
}

#[cfg(test)]
#[path = "tests/dreamcast_tests.rs"]
mod tests;
