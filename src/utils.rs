/*!
 * Utility functions for CopyLS
 */

use std::collections::HashSet;
use std::io;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use walkdir::WalkDir;

/// Extension strings excluded from both the tree diagram and the content dump
pub static IGNORED_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "png", "jpg", "jpeg", "gif", "svg", "ico", "zip", "tar", "gz", "git", "gitignore", "mod",
        "vscode", "db", "sum",
    ])
});

/// Suffix after the last dot of an entry name.
///
/// A name without a dot maps to the whole name, so a file literally called
/// `db` matches the `db` entry of the ignore set, and a dotfile like
/// `.gitignore` matches `gitignore`.
pub fn extension_of(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => name,
    }
}

/// Whether an entry name is excluded by the fixed ignore set
pub fn is_ignored(name: &str) -> bool {
    IGNORED_EXTENSIONS.contains(extension_of(name))
}

/// Count the files the collector will process, for progress tracking.
///
/// Applies the same ignore rules as the traversal, including not descending
/// into ignored directories.
pub fn count_files(roots: &[PathBuf]) -> io::Result<u64> {
    let mut count = 0;

    for root in roots {
        let walker = WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .filter_entry(|e| !is_ignored(&e.file_name().to_string_lossy()));

        for entry in walker.filter_map(Result::ok) {
            if entry.file_type().is_file() {
                count += 1;
            }
        }
    }

    Ok(count)
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
