//! Sega Saturn serial extraction.
//!
//! The header carries the product number at offset 0x20 and a region code
//! at 0x40; the redump serial shape depends on the region.

use std::io::SeekFrom;

use disc_sleuth_core::util::{field_to_ascii, read_up_to, trim_field};
use disc_sleuth_core::{IdentError, Platform, ReadSeek, SerialExtractor};

/// Offset of the product-number field in the disc header.
const SERIAL_OFFSET: u64 = 0x0020;
const SERIAL_LEN: usize = 9;

/// Offset of the region code byte.
const REGION_OFFSET: u64 = 0x0040;

/// Serial extractor for Saturn disc images.
#[derive(Debug, Default)]
pub struct SaturnSerialExtractor;

impl SerialExtractor for SaturnSerialExtractor {
    fn platform(&self) -> Platform {
        Platform::Saturn
    }

    fn try_extract(&self, reader: &mut dyn ReadSeek) -> Result<Option<String>, IdentError> {
        detect_sat_game(reader)
    }
}

/// Read the header product number and normalize it to a redump serial.
///
/// US releases drop the `MK-` prefix, PAL releases append `-50`, Japanese
/// releases keep the field verbatim. Other region codes are not mapped.
pub fn detect_sat_game(reader: &mut dyn ReadSeek) -> Result<Option<String>, IdentError> {
    reader.seek(SeekFrom::Start(SERIAL_OFFSET))?;
    let mut raw = [0u8; SERIAL_LEN];
    let n = read_up_to(reader, &mut raw)?;
    if n == 0 {
        return Ok(None);
    }

    reader.seek(SeekFrom::Start(REGION_OFFSET))?;
    let mut region = [0u8; 1];
    if read_up_to(reader, &mut region)? == 0 {
        return Ok(None);
    }

    let id = trim_field(&field_to_ascii(&raw[..n])).to_string();
    log::debug!("saturn header field: {id}, region {}", region[0] as char);

    match region[0] {
        b'U' => match id.strip_prefix("MK-") {
            Some(body) => Ok(Some(body.to_string())),
            None => Ok(Some(id)),
        },
        b'E' => Ok(Some(format!("{id}-50"))),
        b'J' => Ok(Some(id)),
        _ => Ok(None),
    }
}

#[cfg(test)]
#[path = "tests/saturn_tests.rs"]
mod tests;
