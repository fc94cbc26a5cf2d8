//! Nintendo GameCube serial extraction.
//!
//! The disc header opens with the 4-character game code; the redump serial
//! is `DL-DOL-` plus that code plus a region suffix derived from the code's
//! fourth character.
//!
//! Known gaps: multi-disc releases need a `-0`/`-1` disc suffix taken from
//! context this extractor does not have, and the European sub-region
//! releases (P-UKV, P-AUS, X-UKV, X-EUU) do not match redump with a plain
//! `-EUR` suffix.

use std::io::SeekFrom;

use disc_sleuth_core::util::{field_to_ascii, read_up_to};
use disc_sleuth_core::{IdentError, Platform, ReadSeek, SerialExtractor};

const SERIAL_PREFIX: &str = "DL-DOL-";

/// Serial extractor for GameCube disc images.
#[derive(Debug, Default)]
pub struct GameCubeSerialExtractor;

impl SerialExtractor for GameCubeSerialExtractor {
    fn platform(&self) -> Platform {
        Platform::GameCube
    }

    fn try_extract(&self, reader: &mut dyn ReadSeek) -> Result<Option<String>, IdentError> {
        detect_gc_game(reader)
    }
}

/// Read the header game code and normalize it to a redump serial.
pub fn detect_gc_game(reader: &mut dyn ReadSeek) -> Result<Option<String>, IdentError> {
    reader.seek(SeekFrom::Start(0))?;
    let mut raw = [0u8; 4];
    if read_up_to(reader, &mut raw)? < 4 {
        return Ok(None);
    }

    let suffix = match raw[3] {
        b'E' => "-USA",
        b'J' => "-JPN",
        b'P' | b'X' => "-EUR",
        b'Y' => "-FAH",
        b'D' => "-NOE",
        b'S' => "-ESP",
        b'F' => "-FRA",
        b'I' => "-ITA",
        b'H' => "-HOL",
        _ => return Ok(None),
    };

    let code = field_to_ascii(&raw);
    log::debug!("gc game code: {code}");
    Ok(Some(format!("{SERIAL_PREFIX}{code}{suffix}")))
}

#[cfg(test)]
#[path = "tests/gamecube_tests.rs"]
mod tests;
