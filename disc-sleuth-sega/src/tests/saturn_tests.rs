use super::*;
use std::io::Cursor;

/// Build a header image with the product field at 0x20 and the region
/// code at 0x40.
fn make_header(field: &[u8], region: u8) -> Vec<u8> {
    let mut data = vec![0u8; 0x60];
    data[0x20..0x20 + field.len()].copy_from_slice(field);
    data[0x40] = region;
    data
}

#[test]
fn test_us_strips_mk_prefix() {
    let mut cursor = Cursor::new(make_header(b"MK-81086 ", b'U'));
    assert_eq!(
        detect_sat_game(&mut cursor).unwrap(),
        Some("81086".to_string())
    );
}

#[test]
fn test_us_non_mk_kept_verbatim() {
    let mut cursor = Cursor::new(make_header(b"T-8119H  ", b'U'));
    assert_eq!(
        detect_sat_game(&mut cursor).unwrap(),
        Some("T-8119H".to_string())
    );
}

#[test]
fn test_pal_appends_suffix() {
    let mut cursor = Cursor::new(make_header(b"MK-81086 ", b'E'));
    assert_eq!(
        detect_sat_game(&mut cursor).unwrap(),
        Some("MK-81086-50".to_string())
    );
}

#[test]
fn test_japan_verbatim() {
    let mut cursor = Cursor::new(make_header(b"GS-9089  ", b'J'));
    assert_eq!(
        detect_sat_game(&mut cursor).unwrap(),
        Some("GS-9089".to_string())
    );
}

#[test]
fn test_unmapped_region() {
    let mut cursor = Cursor::new(make_header(b"GS-9089  ", b'A'));
    assert_eq!(detect_sat_game(&mut cursor).unwrap(), None);
}

#[test]
fn test_image_without_region_byte() {
    let mut data = vec![0u8; 0x29];
    data[0x20..0x29].copy_from_slice(b"GS-9089  ");
    let mut cursor = Cursor::new(data);
    assert_eq!(detect_sat_game(&mut cursor).unwrap(), None);
}

#[test]
fn test_empty_image() {
    let mut cursor = Cursor::new(Vec::new());
    assert_eq!(detect_sat_game(&mut cursor).unwrap(), None);
}

#[test]
fn test_extractor_trait() {
    let extractor = SaturnSerialExtractor;
    assert_eq!(extractor.platform(), Platform::Saturn);
    let mut cursor = Cursor::new(make_header(b"MK-81086 ", b'U'));
    assert_eq!(
        extractor.try_extract(&mut cursor).unwrap(),
        Some("81086".to_string())
    );
}
