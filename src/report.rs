/*!
 * Reporting functionality for CopyLS
 *
 * Renders a post-run summary of the collection using the tabled library.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::utils::format_file_size;

/// Statistics for one collection run
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Where the payload went ("clipboard" or "stdout")
    pub destination: String,
    /// Time taken to collect and deliver
    pub duration: Duration,
    /// Number of root directories collected
    pub roots: usize,
    /// Number of directories entered
    pub dirs_scanned: usize,
    /// Number of files whose contents made it into the dump
    pub files_included: usize,
    /// Number of entries dropped by the ignore set
    pub entries_ignored: usize,
    /// Total characters of collected file content
    pub total_chars: usize,
    /// Size of the delivered payload in bytes
    pub payload_size: usize,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for collection results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate a report string based on collection statistics
    pub fn generate_report(&self, report: &ScanReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &ScanReport) {
        println!("\n{}", self.generate_report(report));
    }

    // Create the summary table using the tabled crate
    fn create_summary_table(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let rows = vec![
            SummaryRow {
                key: "📋 Destination".to_string(),
                value: report.destination.clone(),
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "📂 Roots".to_string(),
                value: report.roots.to_string(),
            },
            SummaryRow {
                key: "🗂️ Directories Scanned".to_string(),
                value: self.format_number(report.dirs_scanned),
            },
            SummaryRow {
                key: "📄 Files Included".to_string(),
                value: self.format_number(report.files_included),
            },
            SummaryRow {
                key: "🚫 Entries Ignored".to_string(),
                value: self.format_number(report.entries_ignored),
            },
            SummaryRow {
                key: "📝 Content Characters".to_string(),
                value: self.format_number(report.total_chars),
            },
            SummaryRow {
                key: "📦 Payload Size".to_string(),
                value: format_file_size(report.payload_size as u64),
            },
        ];

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Generate a console table report
    fn generate_console_report(&self, report: &ScanReport) -> String {
        format!("✅  COPY COMPLETE\n{}", self.create_summary_table(report))
    }
}
