pub const PROGRAM_NAME: &str = "dirstamp";
pub const PROGRAM_LOG_LEVEL: &str = "DIRSTAMP_LOG_LEVEL";

/// Label printed in place of the scanned root directory.
pub const ROOT_LABEL: &str = "(root)";

/// Report date format, rendered in local time.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Shown in date columns when no file in the subtree has the timestamp.
pub const MISSING_DATE: &str = "-";
