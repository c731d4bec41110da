use std::{io, path::PathBuf};

use thiserror::Error;

/// Reasons a scan target is rejected before scanning starts.
#[derive(Debug, Error)]
pub enum TargetError {
    #[error("path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot access {}: {source}", path.display())]
    Inaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
