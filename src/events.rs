/*!
 * Traversal diagnostics surfaced to the host
 *
 * The collector never aborts on a per-entry failure; it reports the failure
 * through an [`EventSink`] and continues with the remaining siblings. The
 * host decides how to present the events (the CLI prints them to stderr).
 */

use std::path::PathBuf;

/// A non-fatal signal emitted during one traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// A directory held no entries at all
    EmptyDirectory { path: PathBuf },
    /// A directory could not be enumerated; its subtree is skipped
    ListingFailed { path: PathBuf, reason: String },
    /// Metadata for one entry could not be read; that entry is skipped
    StatFailed { path: PathBuf, reason: String },
    /// A file could not be read as text; it stays in the diagram but
    /// contributes no content block
    ReadFailed { path: PathBuf, reason: String },
}

impl ScanEvent {
    /// Whether the event reports a failure rather than plain information
    pub fn is_warning(&self) -> bool {
        !matches!(self, Self::EmptyDirectory { .. })
    }
}

/// Receiver for traversal diagnostics
pub trait EventSink: Send + Sync {
    /// Handle one event
    fn emit(&self, event: ScanEvent);
}

/// Default sink used by the CLI: prints every event to stderr
pub struct StderrSink;

impl EventSink for StderrSink {
    fn emit(&self, event: ScanEvent) {
        match event {
            ScanEvent::EmptyDirectory { path } => {
                eprintln!("Note: directory {} is empty", path.display())
            }
            ScanEvent::ListingFailed { path, reason } => {
                eprintln!("Warning: could not list {}: {}", path.display(), reason)
            }
            ScanEvent::StatFailed { path, reason } => {
                eprintln!("Warning: could not stat {}: {}", path.display(), reason)
            }
            ScanEvent::ReadFailed { path, reason } => {
                eprintln!("Warning: could not read {}: {}", path.display(), reason)
            }
        }
    }
}
