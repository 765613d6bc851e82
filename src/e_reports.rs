use crate::e_types::DiagnosticSets;
use std::io::{self, Write};

pub const ERRORS_HEADER: &str = "=== ERRORS ===";
pub const WARNINGS_HEADER: &str = "=== WARNINGS ===";

/// Writes the two-section report.
///
/// Entries come out sorted and unique because the sets are ordered.
/// A blank line separates the error section from the warning header.
pub fn render_report<W: Write>(sets: &DiagnosticSets, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", ERRORS_HEADER)?;
    for line in &sets.errors {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", WARNINGS_HEADER)?;
    for line in &sets.warnings {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

/// Renders the report into a `String`.
///
/// # Example
/// ```
/// use cargo_ediag::{e_reports::report_string, DiagnosticSets};
///
/// let report = report_string(&DiagnosticSets::new());
/// assert_eq!(report, "=== ERRORS ===\n\n=== WARNINGS ===\n");
/// ```
pub fn report_string(sets: &DiagnosticSets) -> String {
    let mut buf = Vec::new();
    render_report(sets, &mut buf).expect("writing to a Vec");
    String::from_utf8_lossy(&buf).into_owned()
}
