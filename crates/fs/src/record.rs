use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::stat::FileTimes;

/// Aggregated timestamps and counts for one visited directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryRecord {
    /// Normalized absolute path of the directory
    pub path: PathBuf,
    /// Newest file creation time anywhere in the subtree
    pub latest_created: Option<DateTime<Utc>>,
    /// Newest file modification time anywhere in the subtree
    pub latest_modified: Option<DateTime<Utc>>,
    /// Files directly inside this directory
    pub file_count: u64,
    /// `file_count` plus every descendant's files
    pub cumulative_file_count: u64,
}

impl DirectoryRecord {
    /// Record with identity aggregates: no timestamps, zero counts.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            latest_created: None,
            latest_modified: None,
            file_count: 0,
            cumulative_file_count: 0,
        }
    }

    pub(crate) fn add_file(&mut self, times: FileTimes) {
        self.file_count += 1;
        self.cumulative_file_count += 1;
        self.raise(times.created, times.modified);
    }

    /// Fold a finalized child directory into this one.
    pub(crate) fn absorb_child(&mut self, child: &DirectoryRecord) {
        self.cumulative_file_count += child.cumulative_file_count;
        self.raise(child.latest_created, child.latest_modified);
    }

    // `None < Some(_)` for `Option`, so `max` keeps whichever is set and later.
    fn raise(&mut self, created: Option<DateTime<Utc>>, modified: Option<DateTime<Utc>>) {
        self.latest_created = self.latest_created.max(created);
        self.latest_modified = self.latest_modified.max(modified);
    }
}

/// Totals printed under the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    /// Number of directories visited, root included
    pub folders: usize,
    /// Cumulative file count of the root
    pub files: u64,
}

impl ScanSummary {
    /// Expects the root record first, as returned by `scan`.
    pub fn from_records(records: &[DirectoryRecord]) -> Self {
        Self {
            folders: records.len(),
            files: records
                .first()
                .map(|root| root.cumulative_file_count)
                .unwrap_or(0),
        }
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
