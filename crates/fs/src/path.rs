use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use log::debug;

use crate::error::TargetError;

/// Absolute, symlink-resolved form of `input` using host separators.
///
/// Falls back to joining the working directory with `input` (no symlink
/// resolution) when canonicalization fails.
pub fn normalize(input: &Path) -> PathBuf {
    let absolute = match fs::canonicalize(input) {
        Ok(p) => p,
        Err(e) => {
            debug!("[path] canonicalize({:?}) failed: {e}", input);
            absolutize(input)
        }
    };

    host_separators(strip_verbatim(absolute))
}

/// Check that `input` is an existing directory and return its normalized path.
pub fn resolve_target(input: &Path) -> Result<PathBuf, TargetError> {
    match fs::metadata(input) {
        Ok(meta) if meta.is_dir() => Ok(normalize(input)),
        Ok(_) => Err(TargetError::NotADirectory(input.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(TargetError::NotFound(input.to_path_buf()))
        }
        Err(source) => Err(TargetError::Inaccessible {
            path: input.to_path_buf(),
            source,
        }),
    }
}

fn absolutize(input: &Path) -> PathBuf {
    if input.is_absolute() {
        return input.to_path_buf();
    }

    match env::current_dir() {
        Ok(cwd) => cwd.join(input),
        Err(e) => {
            debug!("[path] current_dir failed: {e}");
            input.to_path_buf()
        }
    }
}

#[cfg(windows)]
fn strip_verbatim(path: PathBuf) -> PathBuf {
    // `canonicalize` yields `\\?\C:\...`; UNC verbatim paths are left alone.
    if let Some(s) = path.to_str()
        && let Some(rest) = s.strip_prefix(r"\\?\")
        && !rest.starts_with(r"UNC\")
    {
        return PathBuf::from(rest);
    }
    path
}

#[cfg(not(windows))]
fn strip_verbatim(path: PathBuf) -> PathBuf {
    path
}

#[cfg(windows)]
fn host_separators(path: PathBuf) -> PathBuf {
    match path.to_str() {
        Some(s) if s.contains('/') => PathBuf::from(s.replace('/', "\\")),
        _ => path,
    }
}

// `/` is the only separator on unix; a backslash is an ordinary name byte.
#[cfg(not(windows))]
fn host_separators(path: PathBuf) -> PathBuf {
    path
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
