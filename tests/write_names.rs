// tests/write_names.rs
//
// file::read_input / file::write_names without the rest of the pipeline.
//
use std::fs;

use classlist_names::file::{ensure_directory, read_input, write_names};
use classlist_names::names::NameSet;
use classlist_names::RunError;

fn set(names: &[&str]) -> NameSet {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn writes_sorted_lines_with_trailing_newline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("names.txt");

    write_names(&path, &set(&["Zoe Young", "Ann Lee", "Zoe Young"])).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "Ann Lee\nZoe Young\n");
}

#[test]
fn overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("names.txt");
    fs::write(&path, "stale\nlines\nhere\n").unwrap();

    write_names(&path, &set(&["Ann Lee"])).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "Ann Lee\n");
}

#[test]
fn non_ascii_names_round_trip_as_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("names.txt");

    write_names(&path, &set(&["José Núñez", "Łukasz Żak", "李 小龍"])).unwrap();
    let bytes = fs::read(&path).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert_eq!(text, "José Núñez\nŁukasz Żak\n李 小龍\n");
}

#[test]
fn empty_set_is_refused_and_nothing_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("names.txt");

    let err = write_names(&path, &NameSet::new()).unwrap_err();
    assert!(matches!(err, RunError::NoNames));
    assert!(!path.exists());
}

#[test]
fn parent_that_is_a_file_is_a_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    assert!(ensure_directory(&blocker).is_err());
    let err = write_names(&blocker.join("names.txt"), &set(&["Ann Lee"])).unwrap_err();
    assert!(matches!(err, RunError::Write { .. }));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn read_input_missing_is_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_input(&dir.path().join("nope.html")).unwrap_err();
    assert!(matches!(err, RunError::MissingInput { .. }));
}

#[test]
fn read_input_replaces_invalid_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.html");
    fs::write(&path, [b'a', 0xc3, b'b']).unwrap();

    assert_eq!(read_input(&path).unwrap(), "a\u{fffd}b");
}
