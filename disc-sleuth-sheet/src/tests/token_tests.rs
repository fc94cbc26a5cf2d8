use super::*;
use std::io::Cursor;

fn collect_tokens(text: &str) -> Vec<String> {
    let mut cursor = Cursor::new(text.as_bytes().to_vec());
    let mut buf = [0u8; 64];
    let mut out = Vec::new();
    loop {
        let len = next_token(&mut cursor, &mut buf).unwrap();
        if len == 0 {
            break;
        }
        out.push(String::from_utf8_lossy(&buf[..len]).into_owned());
    }
    out
}

#[test]
fn test_whitespace_separated() {
    assert_eq!(
        collect_tokens("TRACK 01 MODE2/2352\n"),
        vec!["TRACK", "01", "MODE2/2352"]
    );
}

#[test]
fn test_leading_whitespace_skipped() {
    assert_eq!(
        collect_tokens("  \t\r\n  INDEX\t01 \n"),
        vec!["INDEX", "01"]
    );
}

#[test]
fn test_quoted_token_keeps_whitespace() {
    assert_eq!(
        collect_tokens("FILE \"Game (Disc 1).bin\" BINARY\n"),
        vec!["FILE", "Game (Disc 1).bin", "BINARY"]
    );
}

#[test]
fn test_quote_mid_token_ends_it() {
    // A quote after the first byte terminates the token.
    assert_eq!(collect_tokens("abc\"def\" \n"), vec!["abc", "def"]);
}

#[test]
fn test_truncation_at_buffer_capacity() {
    let mut cursor = Cursor::new(b"ABCDEFGH \n".to_vec());
    let mut buf = [0u8; 4];
    let len = next_token(&mut cursor, &mut buf).unwrap();
    assert_eq!(len, 4);
    assert_eq!(&buf[..len], b"ABCD");
}

#[test]
fn test_end_of_stream() {
    let mut cursor = Cursor::new(Vec::new());
    let mut buf = [0u8; 16];
    assert_eq!(next_token(&mut cursor, &mut buf).unwrap(), 0);
}

#[test]
fn test_trailing_token_without_newline_is_dropped() {
    // End of stream mid-token signals end of stream, like the original.
    assert_eq!(collect_tokens("FILE game.bin"), vec!["FILE"]);
}
