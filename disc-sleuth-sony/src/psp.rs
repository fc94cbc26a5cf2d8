//! PlayStation Portable serial extraction.
//!
//! PSP images carry the serial as plain text (`ULUS-10041` style) near the
//! start of the image, but not at a fixed offset. The heuristic scans the
//! first 100,000 byte offsets for a known region/publisher prefix and
//! returns the 10-byte id found there.

use std::io::SeekFrom;

use disc_sleuth_core::util::{field_to_ascii, read_up_to};
use disc_sleuth_core::{IdentError, Platform, ReadSeek, SerialExtractor};

/// Probe offsets 0..SCAN_LIMIT; a practical cap, not a timeout.
const SCAN_LIMIT: usize = 100_000;

/// Known 5-byte id prefixes: UMD releases (UL/UC by region) and PSN
/// downloads (NP by region and content type).
const ID_PREFIXES: &[&[u8; 5]] = &[
    b"ULES-", b"ULUS-", b"ULJS-",
    b"ULEM-", b"ULUM-", b"ULJM-",
    b"UCES-", b"UCUS-", b"UCJS-", b"UCAS-", b"UCKS-",
    b"ULKS-", b"ULAS-",
    b"NPEH-", b"NPUH-", b"NPJH-", b"NPHH-",
    b"NPEG-", b"NPUG-", b"NPJG-", b"NPHG-",
    b"NPEZ-", b"NPUZ-", b"NPJZ-",
];

/// Serial extractor for PSP disc images.
#[derive(Debug, Default)]
pub struct PspSerialExtractor;

impl SerialExtractor for PspSerialExtractor {
    fn platform(&self) -> Platform {
        Platform::Psp
    }

    fn try_extract(&self, reader: &mut dyn ReadSeek) -> Result<Option<String>, IdentError> {
        detect_psp_game(reader)
    }
}

/// Scan the head of the image for a known PSP serial prefix.
pub fn detect_psp_game(reader: &mut dyn ReadSeek) -> Result<Option<String>, IdentError> {
    reader.seek(SeekFrom::Start(0))?;

    // One bounded read, scanned in memory; the extra 10 bytes let a match
    // at the last probe offset still yield a full id.
    let mut buf = vec![0u8; SCAN_LIMIT + 10];
    let n = read_up_to(reader, &mut buf)?;
    let buf = &buf[..n];

    let mut pos = 0;
    while pos < SCAN_LIMIT && pos + 5 <= buf.len() {
        let window = &buf[pos..pos + 5];
        if ID_PREFIXES.iter().any(|p| window == *p) {
            let end = (pos + 10).min(buf.len());
            let id = field_to_ascii(&buf[pos..end]);
            log::debug!("psp serial prefix at offset {pos}: {id}");
            return Ok(Some(id));
        }
        pos += 1;
    }

    Ok(None)
}

#[cfg(test)]
#[path = "tests/psp_tests.rs"]
mod tests;
