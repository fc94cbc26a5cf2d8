//! Sega CD / Mega-CD serial extraction.
//!
//! The disc header carries the product number at offset 0x183. The raw
//! field is normalized to the redump convention, which differs by
//! publisher prefix.

use std::io::SeekFrom;

use disc_sleuth_core::util::{field_to_ascii, read_up_to, strip_whitespace};
use disc_sleuth_core::{IdentError, Platform, ReadSeek, SerialExtractor};

/// Offset of the product-number field in the disc header.
const SERIAL_OFFSET: u64 = 0x0183;
const SERIAL_LEN: usize = 11;

/// Serial extractor for Sega CD disc images.
#[derive(Debug, Default)]
pub struct SegaCdSerialExtractor;

impl SerialExtractor for SegaCdSerialExtractor {
    fn platform(&self) -> Platform {
        Platform::SegaCd
    }

    fn try_extract(&self, reader: &mut dyn ReadSeek) -> Result<Option<String>, IdentError> {
        detect_scd_game(reader)
    }
}

/// Read the header product number and normalize it to a redump serial.
///
/// Third-party (`T-`) and first-party (`G-`) serials drop everything from
/// the last hyphen on. `MK-` serials keep the four-digit body, with a
/// `-50` suffix for PAL releases.
pub fn detect_scd_game(reader: &mut dyn ReadSeek) -> Result<Option<String>, IdentError> {
    reader.seek(SeekFrom::Start(SERIAL_OFFSET))?;
    let mut raw = [0u8; SERIAL_LEN];
    let n = read_up_to(reader, &mut raw)?;
    if n == 0 {
        return Ok(None);
    }

    let pre = strip_whitespace(&field_to_ascii(&raw[..n]));
    log::debug!("scd header field: {pre}");

    if pre.starts_with("T-") || pre.starts_with("G-") {
        if let Some(idx) = pre.rfind('-') {
            return Ok(Some(pre[..idx].to_string()));
        }
        return Ok(None);
    }

    if pre.starts_with("MK-") {
        let body = &pre[3..pre.len().min(7)];
        if pre.ends_with("50") {
            return Ok(Some(format!("{body}-50")));
        }
        return Ok(Some(body.to_string()));
    }

    Ok(None)
}

#[cfg(test)]
#[path = "tests/sega_cd_tests.rs"]
mod tests;
