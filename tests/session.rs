//! File-level session tests

use huffpress::{Error, Session};
use std::fs;
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, contents: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("failed to write test input");
    path
}

#[test]
fn test_file_round_trip() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let data = b"the session drives one compression and one decompression";
    let input = write_input(&dir, "input.txt", data);
    let packed = dir.path().join("input.huff");
    let restored = dir.path().join("restored.txt");

    let mut session = Session::new();
    session.compress_file(&input, &packed).expect("compress failed");

    let packed_len = fs::metadata(&packed).expect("packed file missing").len();
    assert!(packed_len < data.len() as u64);

    let count = session
        .decompress_file(&packed, &restored)
        .expect("decompress failed");
    assert_eq!(count, data.len() as u64);
    assert_eq!(fs::read(&restored).expect("restored file missing"), data);
}

#[test]
fn test_empty_file_round_trip() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let input = write_input(&dir, "empty.txt", b"");
    let packed = dir.path().join("empty.huff");
    let restored = dir.path().join("empty.out");

    let mut session = Session::new();
    session.compress_file(&input, &packed).expect("compress failed");
    assert_eq!(fs::metadata(&packed).expect("packed file missing").len(), 0);
    assert_eq!(session.pad_bits(), Some(0));

    session
        .decompress_file(&packed, &restored)
        .expect("decompress failed");
    assert_eq!(fs::metadata(&restored).expect("restored file missing").len(), 0);
}

#[test]
fn test_decompress_before_compress_fails() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let packed = write_input(&dir, "stray.huff", &[0xAB, 0xCD]);

    let session = Session::new();
    match session.decompress_file(&packed, dir.path().join("out.txt")) {
        Err(Error::MissingCodec) => {}
        other => panic!("expected MissingCodec, got {:?}", other),
    }
}

#[test]
fn test_second_compression_replaces_the_codec() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let first_data = b"aaab";
    let second_data = b"wxyz wxyz";
    let first = write_input(&dir, "first.txt", first_data);
    let second = write_input(&dir, "second.txt", second_data);
    let first_packed = dir.path().join("first.huff");
    let second_packed = dir.path().join("second.huff");

    let mut session = Session::new();
    session.compress_file(&first, &first_packed).expect("compress failed");
    session.compress_file(&second, &second_packed).expect("compress failed");

    // The session now holds the second tree; the second stream decodes,
    // the first can no longer come back.
    let restored = dir.path().join("second.out");
    session
        .decompress_file(&second_packed, &restored)
        .expect("decompress failed");
    assert_eq!(fs::read(&restored).expect("restored file missing"), second_data);

    let stale = dir.path().join("first.out");
    match session.decompress_file(&first_packed, &stale) {
        Ok(_) => {
            assert_ne!(fs::read(&stale).expect("output missing"), first_data);
        }
        Err(Error::Corrupted(_)) => {}
        Err(other) => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_missing_input_surfaces_io_error() {
    let dir = TempDir::new().expect("failed to create temp dir");

    let mut session = Session::new();
    match session.compress_file(dir.path().join("absent.txt"), dir.path().join("out.huff")) {
        Err(Error::Io(_)) => {}
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn test_failed_compression_commits_no_output() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let output = dir.path().join("never.huff");

    let mut session = Session::new();
    let result = session.compress_file(dir.path().join("absent.txt"), &output);
    assert!(result.is_err());
    assert!(!output.exists());
}
