//! Output formatting for command results

use crate::cli::OutputFormat;
use crate::error::Result;
use cloudops_core::Report;
use std::io::{self, Write};

/// Print a command result to stdout in the requested format
pub fn print_report<R: Report>(report: &R, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(report, format, &mut out)?;
    out.flush()?;
    Ok(())
}

pub fn write_report<R: Report>(
    report: &R,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    match format {
        OutputFormat::Text => report.write_text(out)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(report)?)?,
        OutputFormat::Yaml => write!(out, "{}", serde_yaml::to_string(report)?)?,
    }
    Ok(())
}
