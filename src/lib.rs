/*!
 * CopyLS - Copy a directory tree and its file contents to the clipboard
 *
 * This library walks one or more root directories, renders an ASCII tree
 * diagram next to a dump of every readable text file, and hands the
 * combined report to the system clipboard or to stdout.
 */

pub mod clipboard;
pub mod collector;
pub mod config;
pub mod error;
pub mod events;
pub mod report;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use collector::{Collector, CollectorStatistics, TreeReport};
pub use config::Config;
pub use error::{CopyLsError, Result};
pub use events::{EventSink, ScanEvent};
pub use report::{ReportFormat, Reporter, ScanReport};
pub use utils::{count_files, format_file_size};
pub use writer::ReportWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
