use std::path::Path;

use chrono::{DateTime, Local, Utc};
use dirstamp_runtime::{DATE_FORMAT, MISSING_DATE, ROOT_LABEL};

use crate::record::DirectoryRecord;

/// Report label for `path` relative to the scanned `root`.
///
/// The root itself prints as the sentinel label, descendants as
/// `(root)/a/b` with `/` on every platform. Paths outside the root are
/// printed verbatim.
pub fn display_path(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rest) if rest.as_os_str().is_empty() => ROOT_LABEL.to_owned(),
        Ok(rest) => {
            let parts: Vec<_> = rest
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect();
            format!("{ROOT_LABEL}/{}", parts.join("/"))
        }
        Err(_) => path.display().to_string(),
    }
}

/// `YYYY-MM-DD` in local time, or `-` when unset.
pub fn format_date(ts: Option<DateTime<Utc>>) -> String {
    match ts {
        Some(t) => t.with_timezone(&Local).format(DATE_FORMAT).to_string(),
        None => MISSING_DATE.to_owned(),
    }
}

/// Files column: direct count followed by the cumulative count.
pub fn format_file_counts(record: &DirectoryRecord) -> String {
    format!("{} ({})", record.file_count, record.cumulative_file_count)
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
