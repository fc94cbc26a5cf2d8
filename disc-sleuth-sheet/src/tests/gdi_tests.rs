use super::*;
use std::fs;
use tempfile::TempDir;

/// Write a GDI sheet and its referenced track files into a temp directory.
fn make_sheet(dir: &TempDir, gdi: &str, tracks: &[(&str, usize)]) -> PathBuf {
    for (name, size) in tracks {
        fs::write(dir.path().join(name), vec![0u8; *size]).unwrap();
    }
    let gdi_path = dir.path().join("game.gdi");
    fs::write(&gdi_path, gdi).unwrap();
    gdi_path
}

const THREE_TRACKS: &str = "3\n\
    1 0 4 2352 track01.bin 0\n\
    2 600 0 2352 track02.raw 0\n\
    3 6000 4 2352 track03.bin 0\n";

#[test]
fn test_largest_data_track_wins() {
    let dir = TempDir::new().unwrap();
    // track02.raw is the biggest file but is audio (mode 0, 2352).
    let gdi_path = make_sheet(
        &dir,
        THREE_TRACKS,
        &[
            ("track01.bin", 1000),
            ("track02.raw", 9999),
            ("track03.bin", 5000),
        ],
    );

    let track = find_track(&gdi_path, false).unwrap().unwrap();
    assert_eq!(track, dir.path().join("track03.bin"));
}

#[test]
fn test_want_first_stops_at_first_data_track() {
    let dir = TempDir::new().unwrap();
    let gdi_path = make_sheet(
        &dir,
        THREE_TRACKS,
        &[
            ("track01.bin", 1000),
            ("track02.raw", 9999),
            ("track03.bin", 5000),
        ],
    );

    let track = find_track(&gdi_path, true).unwrap().unwrap();
    assert_eq!(track, dir.path().join("track01.bin"));
}

#[test]
fn test_audio_signature_never_selected() {
    let dir = TempDir::new().unwrap();
    // Only audio tracks (mode 0, sector size 2352).
    let gdi = "2\n1 0 0 2352 track01.raw 0\n2 600 0 2352 track02.raw 0\n";
    let gdi_path = make_sheet(&dir, gdi, &[("track01.raw", 1000), ("track02.raw", 2000)]);

    assert!(find_track(&gdi_path, false).unwrap().is_none());
}

#[test]
fn test_mode_zero_with_other_sector_size_is_data() {
    let dir = TempDir::new().unwrap();
    // mode 0 alone is not the audio signature; 2048-byte sectors qualify.
    let gdi = "1\n1 0 0 2048 track01.bin 0\n";
    let gdi_path = make_sheet(&dir, gdi, &[("track01.bin", 4096)]);

    let track = find_track(&gdi_path, false).unwrap().unwrap();
    assert_eq!(track, dir.path().join("track01.bin"));
}

#[test]
fn test_truncated_record_is_fatal() {
    let dir = TempDir::new().unwrap();
    // Second record stops after the mode field.
    let gdi = "2\n1 0 4 2352 track01.bin 0\n2 600 0\n";
    let gdi_path = make_sheet(&dir, gdi, &[("track01.bin", 1000)]);

    assert!(matches!(
        find_track(&gdi_path, false),
        Err(IdentError::InvalidSheet(_))
    ));
}

#[test]
fn test_missing_data_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let gdi = "1\n1 0 4 2352 nothere.bin 0\n";
    let gdi_path = make_sheet(&dir, gdi, &[]);

    assert!(matches!(
        find_track(&gdi_path, false),
        Err(IdentError::Io(_))
    ));
}

#[test]
fn test_empty_sheet_finds_nothing() {
    let dir = TempDir::new().unwrap();
    let gdi_path = make_sheet(&dir, "0\n", &[]);

    assert!(find_track(&gdi_path, false).unwrap().is_none());
}

// -- next_file --

#[test]
fn test_next_file_iterates_records() {
    let dir = TempDir::new().unwrap();
    let gdi_path = make_sheet(&dir, THREE_TRACKS, &[]);
    let mut reader = std::fs::File::open(&gdi_path).unwrap();

    // The track count is skipped only on the first call (offset 0).
    assert_eq!(
        next_file(&mut reader, &gdi_path).unwrap(),
        Some(dir.path().join("track01.bin"))
    );
    assert_eq!(
        next_file(&mut reader, &gdi_path).unwrap(),
        Some(dir.path().join("track02.raw"))
    );
    assert_eq!(
        next_file(&mut reader, &gdi_path).unwrap(),
        Some(dir.path().join("track03.bin"))
    );
    assert_eq!(next_file(&mut reader, &gdi_path).unwrap(), None);
}
