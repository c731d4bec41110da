mod display;
mod error;
mod path;
mod record;
mod stat;
mod walker;

pub use display::{display_path, format_date, format_file_counts};
pub use error::TargetError;
pub use path::{normalize, resolve_target};
pub use record::{DirectoryRecord, ScanSummary};
pub use stat::{FileTimes, FsStat, StatAccessor};
pub use walker::{ScanContext, scan, scan_root};
