// src/output/summary.rs

use crate::constants;
use crate::core_types::Report;
use log::debug;
use std::io::{self, Write};

/// Writes the end-of-run summary: the processed count, then the failed files
/// in the order they were encountered (only if there were any).
pub fn write_summary(writer: &mut dyn Write, report: &Report) -> io::Result<()> {
    debug!(
        "Writing summary for {} processed and {} failed files...",
        report.processed,
        report.failures.len()
    );
    writeln!(writer, "Processed {} files.", report.processed)?;

    if report.has_failures() {
        writeln!(writer, "{}", constants::FAILURES_HEADER)?;
        for failure in &report.failures {
            writeln!(writer, "- {}: {}", failure.path.display(), failure.reason)?;
        }
    }
    Ok(())
}
