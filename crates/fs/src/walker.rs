use std::{
    fs::{self, read_dir},
    path::{Path, PathBuf},
};

use log::{debug, info, trace, warn};

use crate::{
    path::normalize,
    record::DirectoryRecord,
    stat::{FileTimes, StatAccessor},
};

pub struct ScanContext<S> {
    pub stat: S,
    /// Visit entries in file-name order instead of raw OS order.
    pub sort_entries: bool,
}

impl<S: StatAccessor> ScanContext<S> {
    pub fn new(stat: S) -> Self {
        Self {
            stat,
            sort_entries: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Dir,
    /// Symlinks, devices, sockets, FIFOs
    Other,
}

#[derive(Debug)]
struct DirItem {
    path: PathBuf,
    kind: EntryKind,
}

/// Normalize `root` and scan it with default options.
pub fn scan_root<S: StatAccessor>(root: &Path, stat: S) -> Vec<DirectoryRecord> {
    let root = normalize(root);
    let ctx = ScanContext::new(stat);

    info!("[scan] scanning {}", root.display());
    let records = scan(&root, &ctx);
    info!("[scan] visited {} directories", records.len());

    records
}

/// Recursively aggregate `dir` and every directory below it.
///
/// Returns one record per directory with `dir`'s own record first; the rest
/// follow in discovery order. Each child subtree is fully scanned before its
/// record is folded into the parent. Failures to list a directory or stat a
/// file are logged and leave the affected aggregates at their identity values.
pub fn scan<S: StatAccessor>(dir: &Path, ctx: &ScanContext<S>) -> Vec<DirectoryRecord> {
    let mut record = DirectoryRecord::new(dir.to_path_buf());
    let mut descendants = Vec::new();

    for item in list_dir(dir, ctx.sort_entries) {
        match item.kind {
            EntryKind::File => record.add_file(file_times(&item.path, &ctx.stat)),
            EntryKind::Dir => {
                let subtree = scan(&item.path, ctx);
                if let Some(child) = subtree.first() {
                    record.absorb_child(child);
                }
                descendants.extend(subtree);
            }
            EntryKind::Other => trace!("[scan] skipping {:?}", item.path),
        }
    }

    let mut records = Vec::with_capacity(descendants.len() + 1);
    records.push(record);
    records.extend(descendants);
    records
}

fn file_times<S: StatAccessor>(path: &Path, stat: &S) -> FileTimes {
    match stat.stat(path) {
        Ok(times) => times,
        Err(e) => {
            debug!("[scan] stat({:?}) failed: {e}", path);
            FileTimes::default()
        }
    }
}

fn list_dir(dir: &Path, sort: bool) -> Vec<DirItem> {
    let rd = match read_dir(dir) {
        Ok(rd) => rd,
        Err(e) => {
            warn!("[scan] read_dir({:?}) failed: {e}", dir);
            return Vec::new();
        }
    };

    let mut items = Vec::new();

    for entry_res in rd {
        let entry = match entry_res {
            Ok(e) => e,
            Err(e) => {
                warn!("[scan] error reading entry in {:?}: {e}", dir);
                continue;
            }
        };

        match inspect_entry(&entry) {
            Ok(item) => items.push(item),
            Err(e) => warn!("[scan] file_type({:?}) failed: {e}", entry.path()),
        }
    }

    if sort {
        items.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    }

    items
}

fn inspect_entry(entry: &fs::DirEntry) -> std::io::Result<DirItem> {
    // `file_type` does not follow symlinks, so links never recurse.
    let file_type = entry.file_type()?;

    let kind = if file_type.is_dir() {
        EntryKind::Dir
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    };

    Ok(DirItem {
        path: entry.path(),
        kind,
    })
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
