/*!
 * Report assembly and delivery for CopyLS
 */

use std::io::{self, Write};

use crate::clipboard;
use crate::collector::TreeReport;
use crate::config::Config;
use crate::error::Result;

/// Assembles the final payload from per-root reports and delivers it
pub struct ReportWriter {
    /// Writer configuration
    config: Config,
}

impl ReportWriter {
    /// Create a new report writer
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Render the combined payload, one section per root in argument order
    pub fn render(&self, reports: &[TreeReport]) -> String {
        let mut payload = String::new();

        for report in reports {
            payload.push_str(&report.structure);
            if !self.config.structure_only && !report.content.is_empty() {
                payload.push('\n');
                payload.push_str(&report.content);
            }
        }

        payload
    }

    /// Deliver the payload to its destination and return its size in bytes
    pub fn write(&self, reports: &[TreeReport]) -> Result<usize> {
        let payload = self.render(reports);

        if self.config.print {
            io::stdout().write_all(payload.as_bytes())?;
        } else {
            clipboard::copy_to_clipboard(&payload)?;
        }

        Ok(payload.len())
    }
}
