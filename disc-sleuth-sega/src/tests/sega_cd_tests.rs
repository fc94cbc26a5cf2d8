use super::*;
use std::io::Cursor;

/// Build a header image with `field` placed at the serial offset.
fn make_header(field: &[u8]) -> Vec<u8> {
    let mut data = vec![0u8; 0x200];
    data[0x183..0x183 + field.len()].copy_from_slice(field);
    data
}

#[test]
fn test_third_party_prefix() {
    let mut cursor = Cursor::new(make_header(b"T-113045-00"));
    assert_eq!(
        detect_scd_game(&mut cursor).unwrap(),
        Some("T-113045".to_string())
    );
}

#[test]
fn test_first_party_prefix() {
    // Inner padding spaces are stripped before the last hyphen is found.
    let mut cursor = Cursor::new(make_header(b"G-6033  -00"));
    assert_eq!(
        detect_scd_game(&mut cursor).unwrap(),
        Some("G-6033".to_string())
    );
}

#[test]
fn test_mk_prefix_us() {
    let mut cursor = Cursor::new(make_header(b"MK-4603 -00"));
    assert_eq!(
        detect_scd_game(&mut cursor).unwrap(),
        Some("4603".to_string())
    );
}

#[test]
fn test_mk_prefix_pal() {
    let mut cursor = Cursor::new(make_header(b"MK-4603 -50"));
    assert_eq!(
        detect_scd_game(&mut cursor).unwrap(),
        Some("4603-50".to_string())
    );
}

#[test]
fn test_unknown_prefix() {
    let mut cursor = Cursor::new(make_header(b"ABCDEFGHIJK"));
    assert_eq!(detect_scd_game(&mut cursor).unwrap(), None);
}

#[test]
fn test_image_too_short() {
    let mut cursor = Cursor::new(vec![0u8; 0x100]);
    assert_eq!(detect_scd_game(&mut cursor).unwrap(), None);
}

#[test]
fn test_extractor_trait() {
    let extractor = SegaCdSerialExtractor;
    assert_eq!(extractor.platform(), Platform::SegaCd);
    let mut cursor = Cursor::new(make_header(b"T-113045-00"));
    assert_eq!(
        extractor.try_extract(&mut cursor).unwrap(),
        Some("T-113045".to_string())
    );
}
