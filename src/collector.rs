/*!
 * Recursive directory collection
 *
 * The collector walks a root directory depth-first and builds two artifacts
 * in a single deterministic pass: an ASCII tree diagram of the directory
 * structure and a concatenated dump of every readable text file.
 */

use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use indicatif::ProgressBar;
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::error::{CopyLsError, Result};
use crate::events::{EventSink, ScanEvent, StderrSink};
use crate::utils::is_ignored;

/// Branch glyph for a non-last sibling
const BRANCH: &str = "├── ";
/// Branch glyph for the last sibling at its level
const BRANCH_LAST: &str = "└── ";
/// Prefix segment continuing a non-last ancestor's guide line
const GUIDE: &str = "│   ";
/// Prefix segment under a last ancestor
const BLANK: &str = "    ";

/// Separator appended after each file's content block
pub const BLOCK_SEPARATOR: &str = "------------------------------------------------";

/// Display label for a directory's structure line, trailing slash included.
///
/// A filesystem root like `/` has no file name, so its label falls back to
/// the path itself.
pub(crate) fn directory_label(dir: &Path) -> String {
    match dir.file_name() {
        Some(name) => format!("{}/", name.to_string_lossy()),
        None => {
            let raw = dir.display().to_string();
            if raw.ends_with(std::path::MAIN_SEPARATOR) {
                raw
            } else {
                format!("{raw}/")
            }
        }
    }
}

/// Counters accumulated over one or more traversals
#[derive(Debug, Clone, Default)]
pub struct CollectorStatistics {
    /// Number of directories entered
    pub dirs_scanned: usize,
    /// Number of files whose contents made it into the dump
    pub files_included: usize,
    /// Number of entries dropped by the ignore set
    pub entries_ignored: usize,
    /// Total characters of file content collected
    pub total_chars: usize,
}

/// The two artifacts produced by one traversal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeReport {
    /// Tree diagram, one line per surviving entry
    pub structure: String,
    /// Concatenated file contents, one block per readable file
    pub content: String,
}

/// Directory tree collector
pub struct Collector {
    /// Collector configuration
    config: Config,
    /// Progress bar, ticked once per file
    pub progress: Arc<ProgressBar>,
    /// Receiver for traversal diagnostics
    events: Arc<dyn EventSink>,
    /// Collector statistics
    statistics: Arc<Mutex<CollectorStatistics>>,
}

impl Collector {
    /// Create a new collector reporting diagnostics to stderr
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self {
            config,
            progress,
            events: Arc::new(StderrSink),
            statistics: Arc::new(Mutex::new(CollectorStatistics::default())),
        }
    }

    /// Replace the default event sink
    pub fn with_events(mut self, events: Arc<dyn EventSink>) -> Self {
        self.events = events;
        self
    }

    /// Get collector statistics
    pub fn get_statistics(&self) -> CollectorStatistics {
        self.statistics.lock().unwrap().clone()
    }

    /// Walk one root directory and build both artifacts.
    ///
    /// Per-entry failures degrade only that entry's contribution; the call
    /// as a whole fails only when the root itself cannot be listed.
    pub fn collect(&self, root: &Path) -> Result<TreeReport> {
        let abs_path = fs::canonicalize(root)
            .map_err(|e| CopyLsError::RootNotFound(format!("{}: {}", root.display(), e)))?;
        if !abs_path.is_dir() {
            return Err(CopyLsError::RootNotFound(format!(
                "{}: not a directory",
                root.display()
            )));
        }
        // Probe readability up front so that only the root turns a listing
        // failure into a hard error.
        fs::read_dir(&abs_path)
            .map_err(|e| CopyLsError::RootNotFound(format!("{}: {}", root.display(), e)))?;

        // The root has no siblings, so it always renders as a last entry.
        let mut acc = TreeReport::default();
        self.collect_directory(&abs_path, "", true, &mut acc);
        Ok(acc)
    }

    /// Append one directory level to the accumulator, then recurse
    fn collect_directory(&self, dir: &Path, prefix: &str, is_last: bool, acc: &mut TreeReport) {
        let label = directory_label(dir);
        let glyph = if is_last { BRANCH_LAST } else { BRANCH };
        acc.structure.push_str(&format!("{prefix}{glyph}{label}\n"));
        let child_prefix = format!("{prefix}{}", if is_last { BLANK } else { GUIDE });

        self.statistics.lock().unwrap().dirs_scanned += 1;

        let mut entries: Vec<DirEntry> = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            match entry {
                Ok(e) => entries.push(e),
                Err(e) => {
                    // A failure on the directory itself means the whole
                    // listing is unusable; a failure on a single entry only
                    // loses that entry.
                    if e.path() == Some(dir) {
                        self.events.emit(ScanEvent::ListingFailed {
                            path: dir.to_path_buf(),
                            reason: e.to_string(),
                        });
                        return;
                    }
                    self.events.emit(ScanEvent::StatFailed {
                        path: e.path().unwrap_or(dir).to_path_buf(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        if entries.is_empty() {
            self.events.emit(ScanEvent::EmptyDirectory {
                path: dir.to_path_buf(),
            });
            return;
        }

        // The ignore filter runs before sorting so that excluded entries
        // never occupy a last-sibling slot.
        let (kept, ignored): (Vec<_>, Vec<_>) = entries
            .into_iter()
            .partition(|e| !is_ignored(&e.file_name().to_string_lossy()));
        self.statistics.lock().unwrap().entries_ignored += ignored.len();

        // Directories sort ahead of files; each group is ordered by name so
        // the branch glyphs depend only on final position.
        let (mut dirs, mut files): (Vec<_>, Vec<_>) =
            kept.into_iter().partition(|e| e.file_type().is_dir());
        dirs.sort_by(|a, b| a.file_name().cmp(b.file_name()));
        files.sort_by(|a, b| a.file_name().cmp(b.file_name()));

        let total = dirs.len() + files.len();
        for (idx, entry) in dirs.into_iter().chain(files).enumerate() {
            let entry_last = idx + 1 == total;
            if entry.file_type().is_dir() {
                self.collect_directory(entry.path(), &child_prefix, entry_last, acc);
            } else {
                self.collect_file(&entry, &child_prefix, entry_last, acc);
            }
        }
    }

    /// Append one file's structure line and, when readable, its content block
    fn collect_file(&self, entry: &DirEntry, prefix: &str, is_last: bool, acc: &mut TreeReport) {
        self.progress.inc(1);

        let name = entry.file_name().to_string_lossy();
        let glyph = if is_last { BRANCH_LAST } else { BRANCH };
        acc.structure.push_str(&format!("{prefix}{glyph}{name}\n"));

        if self.config.structure_only {
            return;
        }

        // An unreadable file stays in the diagram but contributes no block.
        match fs::read_to_string(entry.path()) {
            Ok(text) => {
                {
                    let mut stats = self.statistics.lock().unwrap();
                    stats.files_included += 1;
                    stats.total_chars += text.chars().count();
                }
                acc.content
                    .push_str(&format!("Data from {name}:\n{text}\n\n{BLOCK_SEPARATOR}\n\n"));
            }
            Err(e) => self.events.emit(ScanEvent::ReadFailed {
                path: entry.path().to_path_buf(),
                reason: e.to_string(),
            }),
        }
    }
}
