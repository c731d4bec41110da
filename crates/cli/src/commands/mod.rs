pub mod scan;

use std::path::PathBuf;

use clap::{ArgAction, Args};
pub use scan::OutputOptions;

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Directory to analyze.
    ///
    /// Example:
    ///   dirstamp ~/projects
    ///   dirstamp --json . > report.ndjson
    pub path: Option<PathBuf>,

    /// Output formatting options
    #[command(flatten)]
    pub output: OutputOptions,

    /// Visit folders in filesystem order instead of sorting by name
    #[arg(long)]
    pub unsorted: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}
