/*!
 * Command-line interface for CopyLS
 */

use std::io;
use std::sync::Arc;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use copyls::collector::Collector;
use copyls::config::{Args, Config};
use copyls::error::Result;
use copyls::report::{ReportFormat, Reporter, ScanReport};
use copyls::utils::count_files;
use copyls::writer::ReportWriter;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Generate shell completions and exit if requested
    if let Some(shell) = args.generate {
        clap_complete::generate(shell, &mut Args::command(), "copyls", &mut io::stdout());
        return Ok(());
    }

    // Create and validate configuration
    let config = Config::from_args(args);
    config.validate()?;

    // Create progress bar
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%)")
            .unwrap(),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_prefix("📊 Collecting");

    // Count files for progress tracking
    match count_files(&config.roots) {
        Ok(count) => progress.set_length(count),
        Err(e) => progress.set_message(format!("⚠️ Warning: failed to count files: {}", e)),
    }

    // Create collector and writer
    let collector = Collector::new(config.clone(), Arc::new(progress.clone()));
    let writer = ReportWriter::new(config.clone());

    // Start timing both collection and delivery
    let start_time = Instant::now();

    // Collect each root in argument order
    let mut reports = Vec::with_capacity(config.roots.len());
    for root in &config.roots {
        progress.set_message(format!("📂 Collecting directory: {}", root.display()));
        reports.push(collector.collect(root)?);
    }

    // Deliver the combined payload
    let payload_size = writer.write(&reports)?;

    let total_duration = start_time.elapsed();

    // Clear the progress bar
    progress.finish_and_clear();

    // In print mode the payload owns stdout; skip the summary table.
    if config.print {
        return Ok(());
    }

    // Prepare and print the summary report
    let stats = collector.get_statistics();
    let scan_report = ScanReport {
        destination: "clipboard".to_string(),
        duration: total_duration,
        roots: config.roots.len(),
        dirs_scanned: stats.dirs_scanned,
        files_included: stats.files_included,
        entries_ignored: stats.entries_ignored,
        total_chars: stats.total_chars,
        payload_size,
    };

    let reporter = Reporter::new(ReportFormat::ConsoleTable);
    reporter.print_report(&scan_report);

    Ok(())
}
