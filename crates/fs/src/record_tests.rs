use super::*;
use chrono::TimeZone;

fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

#[test]
fn new_record_has_identity_values() {
    let rec = DirectoryRecord::new(PathBuf::from("/data"));

    assert_eq!(rec.path, PathBuf::from("/data"));
    assert_eq!(rec.latest_created, None);
    assert_eq!(rec.latest_modified, None);
    assert_eq!(rec.file_count, 0);
    assert_eq!(rec.cumulative_file_count, 0);
}

#[test]
fn add_file_counts_and_keeps_latest_times() {
    let mut rec = DirectoryRecord::new(PathBuf::from("/data"));

    rec.add_file(FileTimes {
        created: Some(at(2024, 6, 15)),
        modified: Some(at(2024, 1, 1)),
    });
    rec.add_file(FileTimes {
        created: Some(at(2024, 1, 1)),
        modified: Some(at(2024, 3, 3)),
    });
    rec.add_file(FileTimes::default());

    assert_eq!(rec.file_count, 3);
    assert_eq!(rec.cumulative_file_count, 3);
    assert_eq!(rec.latest_created, Some(at(2024, 6, 15)));
    assert_eq!(rec.latest_modified, Some(at(2024, 3, 3)));
}

#[test]
fn add_file_without_times_leaves_timestamps_unset() {
    let mut rec = DirectoryRecord::new(PathBuf::from("/data"));
    rec.add_file(FileTimes::default());

    assert_eq!(rec.file_count, 1);
    assert_eq!(rec.latest_created, None);
    assert_eq!(rec.latest_modified, None);
}

#[test]
fn absorb_child_adds_cumulative_only() {
    let mut parent = DirectoryRecord::new(PathBuf::from("/data"));
    parent.add_file(FileTimes {
        created: Some(at(2023, 5, 5)),
        modified: None,
    });

    let mut child = DirectoryRecord::new(PathBuf::from("/data/sub"));
    child.file_count = 2;
    child.cumulative_file_count = 7;
    child.latest_created = Some(at(2022, 1, 1));
    child.latest_modified = Some(at(2024, 2, 2));

    parent.absorb_child(&child);

    assert_eq!(parent.file_count, 1);
    assert_eq!(parent.cumulative_file_count, 8);
    // Older child creation time does not win; unset modified time is filled in.
    assert_eq!(parent.latest_created, Some(at(2023, 5, 5)));
    assert_eq!(parent.latest_modified, Some(at(2024, 2, 2)));
}

#[test]
fn absorbing_identity_child_changes_nothing() {
    let mut parent = DirectoryRecord::new(PathBuf::from("/data"));
    parent.add_file(FileTimes {
        created: Some(at(2020, 1, 1)),
        modified: Some(at(2020, 1, 2)),
    });
    let before = parent.clone();

    parent.absorb_child(&DirectoryRecord::new(PathBuf::from("/data/locked")));

    assert_eq!(parent, before);
}

#[test]
fn summary_uses_root_cumulative_count() {
    let mut root = DirectoryRecord::new(PathBuf::from("/r"));
    root.cumulative_file_count = 5;
    let child = DirectoryRecord::new(PathBuf::from("/r/a"));

    let summary = ScanSummary::from_records(&[root, child]);
    assert_eq!(summary, ScanSummary { folders: 2, files: 5 });

    assert_eq!(ScanSummary::from_records(&[]), ScanSummary::default());
}
