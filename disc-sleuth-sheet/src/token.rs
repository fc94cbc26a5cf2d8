//! Whitespace/quote-aware tokenizer for sheet text.

use std::io::{ErrorKind, Read};

/// Pull the next token from `reader` into `buf`, returning its length.
///
/// Rules:
/// - leading whitespace (space, tab, CR, LF) is skipped;
/// - a double quote at token start enters quoted mode, where whitespace is
///   kept literally until the closing quote;
/// - outside quoted mode any whitespace ends the token, and any quote after
///   the first byte ends it too;
/// - filling `buf` truncates the token and returns it as-is;
/// - `Ok(0)` means end of stream. A trailing token not followed by
///   whitespace is dropped, matching the sheets this was written for, which
///   always end in a newline.
///
/// `Interrupted` and `WouldBlock` reads are retried transparently; any
/// other I/O error propagates.
pub fn next_token(reader: &mut dyn Read, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut len = 0usize;
    let mut in_string = false;
    let mut byte = [0u8; 1];

    loop {
        match reader.read(&mut byte) {
            Ok(0) => return Ok(0),
            Ok(_) => {}
            Err(e) if matches!(e.kind(), ErrorKind::Interrupted | ErrorKind::WouldBlock) => {
                continue;
            }
            Err(e) => return Err(e),
        }

        match byte[0] {
            b' ' | b'\t' | b'\r' | b'\n' => {
                if len == 0 {
                    continue;
                }
                if !in_string {
                    return Ok(len);
                }
            }
            b'"' => {
                if len == 0 {
                    in_string = true;
                    continue;
                }
                return Ok(len);
            }
            _ => {}
        }

        buf[len] = byte[0];
        len += 1;
        if len == buf.len() {
            return Ok(len);
        }
    }
}

/// Read the next token as UTF-8 text, reusing `buf` as scratch space.
///
/// Returns `None` at end of stream. Bytes outside UTF-8 are replaced, which
/// is fine for the ASCII grammar of CUE/GDI sheets.
pub(crate) fn next_token_str(
    reader: &mut dyn Read,
    buf: &mut [u8],
) -> std::io::Result<Option<String>> {
    let len = next_token(reader, buf)?;
    if len == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf[..len]).into_owned()))
}

#[cfg(test)]
#[path = "tests/token_tests.rs"]
mod tests;
