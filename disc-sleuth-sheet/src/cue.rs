//! CUE sheet parsing.
//!
//! A CUE sheet interleaves `FILE <name> <type>`, `TRACK <n> <mode>`, and
//! `INDEX <n> <mm:ss:ff>` declarations. The extent of a track is only known
//! once the *next* track or file begins, so data tracks are held as pending
//! candidates and finalized when a boundary event supplies the end position.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use disc_sleuth_core::IdentError;
use serde::{Deserialize, Serialize};

use crate::MAX_TOKEN_LEN;
use crate::token::next_token_str;

/// Bytes per raw CD frame used for INDEX timestamp arithmetic.
///
/// INDEX timestamps count 75 frames per second of raw 2352-byte sectors.
/// Mode-1 (2048) or sub-channel mixed (2448) images need the matching frame
/// size or every derived offset is wrong; raw mode is what CUE/BIN dumps
/// use in practice.
const RAW_FRAME_SIZE: u64 = 2352;
const FRAMES_PER_SECOND: u64 = 75;

/// The data track resolved from a CUE sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedCueTrack {
    /// Absolute byte offset of the track within its file.
    pub offset: u64,
    /// Track size in bytes.
    pub size: u64,
    /// The referenced image file, resolved against the sheet's directory.
    pub path: PathBuf,
}

/// A data track waiting for the boundary event that fixes its extent.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Candidate {
    offset: u64,
    track: u32,
    path: PathBuf,
}

/// Candidate bookkeeping for a single parse. Pure state, no I/O.
#[derive(Debug, Default)]
struct CandidateTracker {
    pending: Option<Candidate>,
    best: Option<ResolvedCueTrack>,
    largest: u64,
}

impl CandidateTracker {
    /// Arm a new pending candidate unless one is already pending. Repeated
    /// INDEX lines of the same track keep the earliest position.
    fn arm(&mut self, offset: u64, track: u32, path: &Path) {
        if self.pending.is_none() {
            self.pending = Some(Candidate {
                offset,
                track,
                path: path.to_path_buf(),
            });
        }
    }

    fn pending_track(&self) -> Option<u32> {
        self.pending.as_ref().map(|c| c.track)
    }

    /// Finalize the pending candidate against an end position.
    ///
    /// `end` is the byte position where the next track or file begins, or
    /// the owning file's total size. `None` (file size never resolved)
    /// discards the candidate without producing a result. Returns true when
    /// the candidate beat the best seen so far.
    fn boundary(&mut self, end: Option<u64>) -> bool {
        let Some(cand) = self.pending.take() else {
            return false;
        };
        let Some(end) = end else {
            return false;
        };
        if end <= cand.offset {
            return false;
        }
        let size = end - cand.offset;
        if size > self.largest {
            self.largest = size;
            self.best = Some(ResolvedCueTrack {
                offset: cand.offset,
                size,
                path: cand.path,
            });
            return true;
        }
        false
    }

    fn into_best(self) -> Option<ResolvedCueTrack> {
        self.best
    }
}

/// Parse `mm:ss:ff` into a frame count.
fn parse_msf(stamp: &str) -> Result<u64, IdentError> {
    let bad = || {
        log::warn!("error parsing time stamp '{stamp}'");
        IdentError::invalid_sheet(format!("bad INDEX timestamp '{stamp}'"))
    };
    let mut parts = stamp.splitn(3, ':');
    let (Some(m), Some(s), Some(f)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(bad());
    };
    let m: u64 = m.parse().map_err(|_| bad())?;
    let s: u64 = s.parse().map_err(|_| bad())?;
    let f: u64 = f.parse().map_err(|_| bad())?;
    Ok((m * 60 + s) * FRAMES_PER_SECOND + f)
}

/// Resolve the data track described by a CUE sheet.
///
/// With `want_first` the first finalized data track is returned as soon as
/// its extent is known; otherwise the largest data track across the whole
/// sheet wins. Referenced files that cannot be stat'ed degrade gracefully:
/// the boundary they would have provided produces no candidate and parsing
/// continues. Returns `Ok(None)` when no data track could be finalized.
pub fn find_track(
    cue_path: &Path,
    want_first: bool,
) -> Result<Option<ResolvedCueTrack>, IdentError> {
    let cue_dir = cue_path.parent().map(Path::to_path_buf).unwrap_or_default();
    let mut reader = BufReader::new(File::open(cue_path)?);
    let mut buf = [0u8; MAX_TOKEN_LEN];

    log::debug!("parsing CUE sheet '{}'", cue_path.display());

    let mut tracker = CandidateTracker::default();
    let mut last_index: Option<u64> = None;
    let mut last_file: Option<PathBuf> = None;
    let mut file_size: Option<u64> = None;
    let mut track: u32 = 0;
    let mut is_data = false;

    while let Some(tok) = next_token_str(&mut reader, &mut buf)? {
        if tok.eq_ignore_ascii_case("FILE") {
            // The previous file's total size is the implicit end of its
            // last track.
            if file_size.is_some() {
                last_index = file_size;
            }
            if tracker.boundary(last_index) && want_first {
                return Ok(tracker.into_best());
            }

            let Some(name) = next_token_str(&mut reader, &mut buf)? else {
                break;
            };
            let path = cue_dir.join(&name);
            file_size = std::fs::metadata(&path).ok().map(|m| m.len());
            if file_size.is_none() {
                log::warn!("cannot stat referenced file '{}'", path.display());
            }
            last_file = Some(path);

            // File type token (BINARY, MOTOROLA, ...) is irrelevant here.
            next_token_str(&mut reader, &mut buf)?;
        } else if tok.eq_ignore_ascii_case("TRACK") {
            next_token_str(&mut reader, &mut buf)?; // track number
            let mode = next_token_str(&mut reader, &mut buf)?;
            is_data = !mode.as_deref().unwrap_or("").eq_ignore_ascii_case("AUDIO");
            track += 1;
        } else if tok.eq_ignore_ascii_case("INDEX") {
            next_token_str(&mut reader, &mut buf)?; // index number
            let Some(stamp) = next_token_str(&mut reader, &mut buf)? else {
                break;
            };
            last_index = Some(parse_msf(&stamp)? * RAW_FRAME_SIZE);

            // A different track's INDEX fixes the end of the previous
            // candidate.
            if tracker.pending_track().is_some_and(|t| t != track)
                && tracker.boundary(last_index)
                && want_first
            {
                return Ok(tracker.into_best());
            }

            if !is_data {
                continue;
            }
            if let (Some(offset), Some(path)) = (last_index, last_file.as_deref()) {
                tracker.arm(offset, track, path);
            }
        }
    }

    // End of sheet: the last known file size closes the final candidate.
    if file_size.is_some() {
        last_index = file_size;
    }
    tracker.boundary(last_index);

    Ok(tracker.into_best())
}

/// Scan forward to the next `FILE` declaration and resolve its path against
/// the sheet's directory. Supports stepping through a sheet file-by-file
/// with the caller holding the stream open.
pub fn next_file(reader: &mut dyn Read, cue_path: &Path) -> std::io::Result<Option<PathBuf>> {
    let cue_dir = cue_path.parent().map(Path::to_path_buf).unwrap_or_default();
    let mut buf = [0u8; MAX_TOKEN_LEN];

    while let Some(tok) = next_token_str(reader, &mut buf)? {
        if tok.eq_ignore_ascii_case("FILE") {
            return Ok(next_token_str(reader, &mut buf)?.map(|name| cue_dir.join(name)));
        }
    }
    Ok(None)
}

#[cfg(test)]
#[path = "tests/cue_tests.rs"]
mod tests;
