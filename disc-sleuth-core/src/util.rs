use std::io::{ErrorKind, Read};

/// Fill as much of `buf` as the stream can supply, returning the byte count.
///
/// Unlike `read_exact` a short read is not an error; the caller checks the
/// count against what its header layout needs. `Interrupted` reads are
/// retried transparently.
pub fn read_up_to(reader: &mut dyn Read, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut n = 0;
    while n < buf.len() {
        match reader.read(&mut buf[n..]) {
            Ok(0) => break,
            Ok(k) => n += k,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(n)
}

/// Interpret a header field as ASCII, replacing non-printable bytes.
///
/// Disc headers pad serial fields with spaces, 0x00, or 0xFF; map anything
/// outside printable ASCII to a space so the trim helpers below can deal
/// with it uniformly.
pub fn field_to_ascii(buf: &[u8]) -> String {
    buf.iter()
        .map(|&b| {
            if (0x20..0x7F).contains(&b) {
                b as char
            } else {
                ' '
            }
        })
        .collect()
}

/// Remove every whitespace character from a string.
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_ascii_whitespace()).collect()
}

/// Trim leading and trailing spaces and tabs, keeping inner whitespace.
pub fn trim_field(s: &str) -> &str {
    s.trim_matches([' ', '\t'])
}

/// Collapse runs of two or more spaces into a single space.
pub fn collapse_spaces(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_was_space = false;
    for c in s.chars() {
        if c == ' ' {
            if !last_was_space {
                out.push(c);
            }
            last_was_space = true;
        } else {
            out.push(c);
            last_was_space = false;
        }
    }
    out
}

/// Replace every whitespace character with the given character.
pub fn spaces_to(s: &str, t: char) -> String {
    s.chars()
        .map(|c| if c.is_ascii_whitespace() { t } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_up_to() {
        let mut cursor = std::io::Cursor::new(b"ABCDEF".to_vec());
        let mut buf = [0u8; 4];
        assert_eq!(read_up_to(&mut cursor, &mut buf).unwrap(), 4);
        assert_eq!(&buf, b"ABCD");
        // Short read at end of stream is not an error.
        assert_eq!(read_up_to(&mut cursor, &mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], b"EF");
        assert_eq!(read_up_to(&mut cursor, &mut buf).unwrap(), 0);
    }

    #[test]
    fn test_field_to_ascii() {
        assert_eq!(field_to_ascii(b"MK-81086\xFF"), "MK-81086 ");
        assert_eq!(field_to_ascii(b"\x00\x00AB"), "  AB");
    }

    #[test]
    fn test_strip_whitespace() {
        assert_eq!(strip_whitespace("T-113045 00"), "T-11304500");
        assert_eq!(strip_whitespace("  MK-4603  "), "MK-4603");
        assert_eq!(strip_whitespace(""), "");
    }

    #[test]
    fn test_trim_field() {
        assert_eq!(trim_field("  GS-9089  "), "GS-9089");
        assert_eq!(trim_field("\tT-8119N "), "T-8119N");
        assert_eq!(trim_field("A  B"), "A  B");
    }

    #[test]
    fn test_collapse_spaces() {
        assert_eq!(collapse_spaces("T   40205N"), "T 40205N");
        assert_eq!(collapse_spaces("A B"), "A B");
        assert_eq!(collapse_spaces("AB"), "AB");
    }

    #[test]
    fn test_spaces_to() {
        assert_eq!(spaces_to("T 40205N 50", '-'), "T-40205N-50");
        assert_eq!(spaces_to("MK-51038", '-'), "MK-51038");
    }
}
