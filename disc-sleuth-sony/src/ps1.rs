//! PlayStation serial extraction.
//!
//! Locates `SYSTEM.CNF;1` in the ISO 9660 root directory, reads its `BOOT=`
//! target, and normalizes the boot filename (e.g. `SLUS_012.34;1`) into a
//! redump-style serial (`SLUS-01234`). Both plain/raw layouts and
//! sub-channel-mixed (2448-byte frame) layouts are tried.

use std::io::SeekFrom;

use disc_sleuth_core::util::read_up_to;
use disc_sleuth_core::{IdentError, Platform, ReadSeek, SerialExtractor};

const MODE1_FRAME_SIZE: u64 = 2048;
const RAW_FRAME_SIZE: u64 = 2352;
const SUB_MIXED_FRAME_SIZE: u64 = 2448;

/// Offset of user data within a raw sector (12 sync + 4 header + 8 subheader).
const RAW_DATA_SKIP: u64 = 24;

/// Offset of the root directory record within the PVD, which sits in
/// sector 16.
const PVD_ROOT_RECORD_OFFSET: u64 = 156;

/// First bytes of the raw-sector sync pattern. An image whose size is a
/// multiple of 2048 and whose first bytes are not these is a mode-1 image.
const SYNC_HEAD: [u8; 4] = [0x00, 0xFF, 0xFF, 0xFF];

/// Serial extractor for PlayStation disc images.
#[derive(Debug, Default)]
pub struct Ps1SerialExtractor;

impl SerialExtractor for Ps1SerialExtractor {
    fn platform(&self) -> Platform {
        Platform::Ps1
    }

    fn try_extract(&self, reader: &mut dyn ReadSeek) -> Result<Option<String>, IdentError> {
        detect_ps1_game(reader)
    }
}

/// Extract a PS1 serial, trying the plain layout first and the
/// sub-channel-mixed layout second.
pub fn detect_ps1_game(reader: &mut dyn ReadSeek) -> Result<Option<String>, IdentError> {
    if let Some(id) = detect_with_layout(reader, false)? {
        return Ok(Some(id));
    }
    detect_with_layout(reader, true)
}

fn detect_with_layout(
    reader: &mut dyn ReadSeek,
    sub_channel_mixed: bool,
) -> Result<Option<String>, IdentError> {
    let image_size = reader.seek(SeekFrom::End(0))?;

    let mut is_mode1 = false;
    if !sub_channel_mixed && image_size % MODE1_FRAME_SIZE == 0 {
        reader.seek(SeekFrom::Start(0))?;
        let mut head = [0u8; 4];
        read_up_to(reader, &mut head)?;
        is_mode1 = head != SYNC_HEAD;
    }

    let (skip, frame_size) = if sub_channel_mixed {
        (RAW_DATA_SKIP, SUB_MIXED_FRAME_SIZE)
    } else if is_mode1 {
        (0, MODE1_FRAME_SIZE)
    } else {
        (RAW_DATA_SKIP, RAW_FRAME_SIZE)
    };

    // Root directory record inside the PVD at sector 16.
    reader.seek(SeekFrom::Start(PVD_ROOT_RECORD_OFFSET + skip + 16 * frame_size))?;
    let mut record = [0u8; 6];
    if read_up_to(reader, &mut record)? < 6 {
        return Ok(None);
    }
    let root_sector = lba_le24(&record[2..5]);

    // Walk up to two sectors of root directory records for SYSTEM.CNF;1.
    reader.seek(SeekFrom::Start(skip + root_sector * frame_size))?;
    let mut dir = [0u8; 2048 * 2];
    let n = read_up_to(reader, &mut dir)?;
    let dir = &dir[..n];

    let mut pos = 0usize;
    let cnf_sector = loop {
        if pos >= dir.len() {
            return Ok(None);
        }
        let record_len = dir[pos] as usize;
        if record_len == 0 {
            return Ok(None);
        }
        if pos + 45 <= dir.len() && dir[pos + 33..pos + 45].eq_ignore_ascii_case(b"SYSTEM.CNF;1") {
            break lba_le24(&dir[pos + 2..pos + 5]);
        }
        pos += record_len;
    };

    reader.seek(SeekFrom::Start(skip + cnf_sector * frame_size))?;
    let mut cnf = [0u8; 256];
    let n = read_up_to(reader, &mut cnf)?;

    Ok(parse_boot_line(&cnf[..n]))
}

/// Little-endian 24-bit sector number from a directory record's extent field.
fn lba_le24(bytes: &[u8]) -> u64 {
    u64::from(bytes[0]) | u64::from(bytes[1]) << 8 | u64::from(bytes[2]) << 16
}

/// Pull the boot filename out of SYSTEM.CNF text and normalize it.
///
/// `BOOT = cdrom:\SLUS_012.34;1` → `SLUS-01234`
fn parse_boot_line(cnf: &[u8]) -> Option<String> {
    let text = &cnf[..cnf.iter().position(|&b| b == 0).unwrap_or(cnf.len())];
    let start = text.windows(4).position(|w| w.eq_ignore_ascii_case(b"boot"))?;

    let line = &text[start..];
    let line = &line[..line.iter().position(|&b| b == b'\n').unwrap_or(line.len())];

    // The filename begins after the last path separator on the line.
    let mut name_start = 0;
    for (i, &b) in line.iter().enumerate() {
        if b == b'\\' || b == b':' {
            name_start = i + 1;
        }
    }
    normalize_boot_name(&line[name_start..])
}

/// `SLUS_012.34` → `SLUS-01234`: four-letter prefix, hyphen, then the
/// alphanumeric suffix with the embedded dot dropped.
fn normalize_boot_name(name: &[u8]) -> Option<String> {
    if name.len() < 4 {
        return None;
    }

    let mut id = String::with_capacity(11);
    for &b in &name[..4] {
        id.push(b.to_ascii_uppercase() as char);
    }
    id.push('-');

    let mut i = 4;
    if i < name.len() && !name[i].is_ascii_alphanumeric() {
        i += 1;
    }
    while i < name.len() && name[i].is_ascii_alphanumeric() {
        id.push(name[i] as char);
        i += 1;
        if i < name.len() && name[i] == b'.' {
            i += 1;
        }
    }

    Some(id)
}

#[cfg(test)]
#[path = "tests/ps1_tests.rs"]
mod tests;
