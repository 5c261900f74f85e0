use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// A regular file found under the scanned root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry {
    pub path: PathBuf,
    /// Path relative to the root, as reported in summaries.
    pub name: String,
}

/// Regular files under `root` in sorted order, depth-first when `recursive`.
///
/// Entries that cannot be read are skipped. Only an unreadable root is an
/// error.
pub(crate) fn files(root: &Path, recursive: bool) -> Result<Vec<Entry>> {
    fs::read_dir(root).map_err(|source| Error::Io {
        path: root.to_path_buf(),
        source,
    })?;

    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    let walker = if recursive {
        walker
    } else {
        walker.max_depth(1)
    };

    let entries = walker
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let name = entry
                .path()
                .strip_prefix(root)
                .unwrap_or(entry.path())
                .to_string_lossy()
                .into_owned();
            Entry {
                path: entry.into_path(),
                name,
            }
        })
        .collect();
    Ok(entries)
}
