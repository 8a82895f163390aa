//! Console reporting for probe outcomes.
//!
//! Stdout is the tool's whole interface: a reply prints exactly three lines,
//! a transport failure exactly one. Diagnostics go to stderr via `tracing`
//! and never mix into the report.

use std::io::{self, Write};

use anyhow::Result;

use crate::probe::ProbeOutcome;

/// Renders the report for one probe into `w`.
///
/// Reply:
/// ```text
/// Testing URL: <url>
/// Status Code: <int>
/// Response Body: <text>
/// ```
/// Failure: a single `Error: <description>` line.
pub fn write_report<W: Write>(mut w: W, url: &str, outcome: &ProbeOutcome) -> io::Result<()> {
    match outcome {
        ProbeOutcome::Reply { status, body } => {
            writeln!(w, "Testing URL: {url}")?;
            writeln!(w, "Status Code: {status}")?;
            writeln!(w, "Response Body: {body}")?;
        }
        ProbeOutcome::Failed { reason } => {
            writeln!(w, "Error: {reason}")?;
        }
    }
    Ok(())
}

/// Renders the report to stdout.
pub fn print_report(url: &str, outcome: &ProbeOutcome) -> io::Result<()> {
    write_report(io::stdout().lock(), url, outcome)
}

/// Prints the outcome as pretty JSON instead of the line report.
pub fn print_json(url: &str, outcome: &ProbeOutcome) -> Result<()> {
    let record = serde_json::json!({ "url": url, "outcome": outcome });
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
