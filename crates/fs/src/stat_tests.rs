use super::*;
use std::{
    fs::{File, write},
    time::{Duration, UNIX_EPOCH},
};

#[test]
fn to_utc_handles_none_and_various_times() {
    let cases: &[(Option<SystemTime>, Option<i64>)] = &[
        (None, None),
        (Some(UNIX_EPOCH), Some(0)),
        (Some(UNIX_EPOCH + Duration::from_secs(42)), Some(42)),
        (UNIX_EPOCH.checked_sub(Duration::from_secs(1)), Some(-1)),
    ];

    for (input, expected) in cases {
        let got = to_utc(*input).map(|dt| dt.timestamp());
        assert_eq!(
            got, *expected,
            "to_utc({:?}) should be {:?}, got {:?}",
            input, expected, got
        );
    }
}

#[test]
fn fs_stat_reads_modification_time() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let file_path = tmp.path().join("file.txt");
    write(&file_path, b"hello").expect("write file");

    let mtime = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    File::options()
        .write(true)
        .open(&file_path)
        .expect("open file")
        .set_modified(mtime)
        .expect("set mtime");

    let times = FsStat.stat(&file_path).expect("stat file");

    assert_eq!(times.modified.map(|t| t.timestamp()), Some(1_700_000_000));
}

#[test]
fn fs_stat_fails_for_missing_file() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let missing = tmp.path().join("nope.txt");

    let err = FsStat.stat(&missing).expect_err("missing file should fail");
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}

#[test]
fn stat_accessor_is_usable_through_a_reference() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let file_path = tmp.path().join("f");
    write(&file_path, b"x").expect("write file");

    let accessor = FsStat;
    let by_ref: &dyn StatAccessor = &accessor;

    assert!(by_ref.stat(&file_path).is_ok());
}
