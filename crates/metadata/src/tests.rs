use super::*;
use filetime::FileTime;
use std::fs;

#[test]
fn modification_time_round_trips_through_apply() {
    let temp = tempfile::tempdir().expect("tempdir");
    let file = temp.path().join("stamped.txt");
    fs::write(&file, b"data").expect("write");

    let stamp = FileTime::from_unix_time(1_700_000_000, 123_456_789);
    apply_modification_time(&file, stamp).expect("set mtime");

    let metadata = fs::metadata(&file).expect("metadata");
    assert_eq!(modification_time(&metadata), stamp);
}

#[test]
fn apply_file_times_copies_source_timestamps() {
    let temp = tempfile::tempdir().expect("tempdir");
    let source = temp.path().join("source.txt");
    let destination = temp.path().join("destination.txt");
    fs::write(&source, b"data").expect("write source");
    fs::write(&destination, b"data").expect("write destination");

    let stamp = FileTime::from_unix_time(1_600_000_000, 0);
    filetime::set_file_times(&source, stamp, stamp).expect("stamp source");

    let source_metadata = fs::metadata(&source).expect("source metadata");
    apply_file_times(&destination, &source_metadata).expect("apply times");

    let destination_metadata = fs::metadata(&destination).expect("destination metadata");
    assert!(times_match(&source_metadata, &destination_metadata));
}

#[test]
fn times_match_detects_differing_stamps() {
    let temp = tempfile::tempdir().expect("tempdir");
    let a = temp.path().join("a.txt");
    let b = temp.path().join("b.txt");
    fs::write(&a, b"data").expect("write a");
    fs::write(&b, b"data").expect("write b");

    filetime::set_file_mtime(&a, FileTime::from_unix_time(1_000, 0)).expect("stamp a");
    filetime::set_file_mtime(&b, FileTime::from_unix_time(2_000, 0)).expect("stamp b");

    let meta_a = fs::metadata(&a).expect("metadata a");
    let meta_b = fs::metadata(&b).expect("metadata b");
    assert!(!times_match(&meta_a, &meta_b));
}

#[cfg(unix)]
#[test]
fn clear_readonly_restores_owner_write_bit() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempfile::tempdir().expect("tempdir");
    let file = temp.path().join("locked.txt");
    fs::write(&file, b"data").expect("write");
    fs::set_permissions(&file, fs::Permissions::from_mode(0o444)).expect("chmod");

    clear_readonly(&file).expect("clear read-only");

    let mode = fs::metadata(&file).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o200, 0o200, "owner write bit should be set");
    assert_eq!(mode & 0o044, 0o044, "other bits should be preserved");
}

#[cfg(unix)]
#[test]
fn clear_readonly_is_a_no_op_on_writable_entries() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempfile::tempdir().expect("tempdir");
    let dir = temp.path().join("writable");
    fs::create_dir(&dir).expect("create dir");
    fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).expect("chmod");

    clear_readonly(&dir).expect("clear read-only");

    let mode = fs::metadata(&dir).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o7777, 0o755);
}

#[test]
fn errors_name_the_offending_path() {
    let missing = std::path::Path::new("/nonexistent/metadata/test");
    let error = clear_readonly(missing).expect_err("missing path should fail");
    assert_eq!(error.path(), missing);
    assert_eq!(error.action(), "read permissions");
    assert!(!error.is_permission_denied());
}
