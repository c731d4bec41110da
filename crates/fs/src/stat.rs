use std::{fs, io, path::Path, time::SystemTime};

use chrono::{DateTime, Utc};

/// Creation and modification time of a single file.
///
/// Either field may be missing independently, e.g. filesystems without
/// birth time still report a modification time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileTimes {
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
}

/// Source of per-file timestamps used by the scanner.
pub trait StatAccessor {
    fn stat(&self, path: &Path) -> io::Result<FileTimes>;
}

impl<S: StatAccessor + ?Sized> StatAccessor for &S {
    fn stat(&self, path: &Path) -> io::Result<FileTimes> {
        (**self).stat(path)
    }
}

/// Reads timestamps from the host filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStat;

impl StatAccessor for FsStat {
    fn stat(&self, path: &Path) -> io::Result<FileTimes> {
        let metadata = fs::metadata(path)?;

        Ok(FileTimes {
            created: to_utc(metadata.created().ok()),
            modified: to_utc(metadata.modified().ok()),
        })
    }
}

fn to_utc(t: Option<SystemTime>) -> Option<DateTime<Utc>> {
    t.map(DateTime::<Utc>::from)
}

#[cfg(test)]
#[path = "stat_tests.rs"]
mod tests;
