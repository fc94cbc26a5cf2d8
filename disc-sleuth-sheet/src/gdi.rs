//! GDI sheet parsing (Dreamcast).
//!
//! Far simpler than CUE: a leading track-count token, then one fixed
//! 6-field record per track:
//!
//! ```text
//! track_number offset mode sector_size filename disc_offset
//! ```
//!
//! A track is a data track unless `mode == 0 && sector_size == 2352`, the
//! audio-track signature. Track extents are not encoded in the sheet, so
//! selection goes by the referenced file's size.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use disc_sleuth_core::{IdentError, ReadSeek};

use crate::MAX_TOKEN_LEN;
use crate::token::next_token_str;

/// Read one mandatory record field; a missing field is a malformed sheet.
fn require_field(
    reader: &mut dyn Read,
    buf: &mut [u8],
    what: &str,
) -> Result<String, IdentError> {
    next_token_str(reader, buf)?
        .ok_or_else(|| IdentError::invalid_sheet(format!("truncated GDI record: missing {what}")))
}

/// Resolve the data track referenced by a GDI sheet.
///
/// Keeps the data track backed by the largest referenced file, or stops at
/// the first data track with `want_first`. A data-track file that cannot be
/// stat'ed is fatal; `Ok(None)` means the sheet holds no data track.
pub fn find_track(gdi_path: &Path, want_first: bool) -> Result<Option<PathBuf>, IdentError> {
    let gdi_dir = gdi_path.parent().map(Path::to_path_buf).unwrap_or_default();
    let mut reader = BufReader::new(File::open(gdi_path)?);
    let mut buf = [0u8; MAX_TOKEN_LEN];

    log::debug!("parsing GDI sheet '{}'", gdi_path.display());

    // Leading track count.
    next_token_str(&mut reader, &mut buf)?;

    let mut best: Option<PathBuf> = None;
    let mut largest: u64 = 0;

    while next_token_str(&mut reader, &mut buf)?.is_some() {
        // Loop condition consumed the track number.
        require_field(&mut reader, &mut buf, "offset")?;
        let mode: i64 = require_field(&mut reader, &mut buf, "mode")?
            .parse()
            .unwrap_or(0);
        let sector_size: i64 = require_field(&mut reader, &mut buf, "sector size")?
            .parse()
            .unwrap_or(0);
        let name = require_field(&mut reader, &mut buf, "file name")?;

        if !(mode == 0 && sector_size == 2352) {
            let path = gdi_dir.join(&name);
            let file_size = std::fs::metadata(&path)?.len();
            if file_size > largest {
                largest = file_size;
                best = Some(path);
                if want_first {
                    return Ok(best);
                }
            }
        }

        require_field(&mut reader, &mut buf, "disc offset")?;
    }

    Ok(best)
}

/// Consume one track record from the current stream position and return its
/// resolved file path. The leading track count is skipped only when the
/// stream is still at offset 0, so a caller holding the stream open can
/// iterate record-by-record.
pub fn next_file(reader: &mut dyn ReadSeek, gdi_path: &Path) -> std::io::Result<Option<PathBuf>> {
    let mut buf = [0u8; MAX_TOKEN_LEN];

    if reader.stream_position()? == 0 {
        next_token_str(reader, &mut buf)?; // track count
    }

    next_token_str(reader, &mut buf)?; // track number
    next_token_str(reader, &mut buf)?; // offset
    next_token_str(reader, &mut buf)?; // mode
    next_token_str(reader, &mut buf)?; // sector size

    let Some(name) = next_token_str(reader, &mut buf)? else {
        return Ok(None);
    };
    let gdi_dir = gdi_path.parent().map(Path::to_path_buf).unwrap_or_default();
    let path = gdi_dir.join(name);

    next_token_str(reader, &mut buf)?; // disc offset

    Ok(Some(path))
}

#[cfg(test)]
#[path = "tests/gdi_tests.rs"]
mod tests;
