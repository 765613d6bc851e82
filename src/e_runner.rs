use crate::e_cli::Cli;
use crate::e_parser::parse_line;
use crate::e_reports::render_report;
use crate::e_types::DiagnosticSets;
use crate::prelude::*;
use anyhow::{Context, Result};
use std::io::{BufRead, BufReader, Write};

/// Reads JSON lines until end of input and folds every qualifying
/// diagnostic into `sets`. Returns the number of lines read.
///
/// Lines that are blank, malformed, not valid UTF-8, or not an
/// error/warning are skipped. Only a failure of the reader itself is an error.
pub fn collect_into<R: BufRead>(mut reader: R, sets: &mut DiagnosticSets) -> io::Result<usize> {
    let mut read = 0;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        read += 1;
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                trace!("Skipping line {} with invalid UTF-8: {}", read, e);
                continue;
            }
        };
        if let Some(entry) = parse_line(line) {
            if !sets.insert(&entry) {
                log::trace!("Duplicate entry: {}", entry);
            }
        }
    }
    Ok(read)
}

/// Collects the diagnostics of a single stream.
///
/// # Example
/// ```
/// use cargo_ediag::e_runner::collect_diagnostics;
///
/// let input = "not json\n\n{\"reason\":\"compiler-message\",\"message\":{\"level\":\"error\",\"message\":\"boom\",\"spans\":[{\"file_name\":\"a.rs\",\"line_start\":1}]}}\n";
/// let sets = collect_diagnostics(input.as_bytes()).unwrap();
/// assert_eq!(sets.errors.len(), 1);
/// assert!(sets.warnings.is_empty());
/// ```
pub fn collect_diagnostics<R: BufRead>(reader: R) -> io::Result<DiagnosticSets> {
    let mut sets = DiagnosticSets::new();
    collect_into(reader, &mut sets)?;
    Ok(sets)
}

/// Reads every selected input in order. No inputs, or `-`, means stdin.
pub fn collect_inputs(inputs: &[PathBuf]) -> Result<DiagnosticSets> {
    let mut sets = DiagnosticSets::new();
    if inputs.is_empty() {
        collect_stdin(&mut sets)?;
    }
    for input in inputs {
        if input.as_os_str() == "-" {
            collect_stdin(&mut sets)?;
            continue;
        }
        let file = fs::File::open(input)
            .with_context(|| format!("Failed to open {}", input.display()))?;
        let read = collect_into(BufReader::new(file), &mut sets)
            .with_context(|| format!("Failed to read {}", input.display()))?;
        debug!("Read {} lines from {}", read, input.display());
    }
    Ok(sets)
}

fn collect_stdin(sets: &mut DiagnosticSets) -> Result<()> {
    let stdin = io::stdin();
    let read = collect_into(stdin.lock(), sets).context("Failed to read stdin")?;
    debug!("Read {} lines from stdin", read);
    Ok(())
}

/// Runs the whole filter: collect from the CLI's inputs, then print the report.
pub fn run(cli: &Cli) -> Result<()> {
    let sets = collect_inputs(&cli.inputs)?;
    debug!(
        "Collected {} errors and {} warnings",
        sets.errors.len(),
        sets.warnings.len()
    );

    let stdout = io::stdout();
    write_report(&sets, io::BufWriter::new(stdout.lock()))
}

/// Writes the report to `out`. A closed reader on the other end ends the
/// run quietly; any other write failure is an error.
pub fn write_report<W: Write>(sets: &DiagnosticSets, mut out: W) -> Result<()> {
    match render_report(sets, &mut out) {
        Ok(()) => Ok(()),
        // The reader went away (e.g. `| head`); nothing left to do.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("stdout closed early: {}", e);
            Ok(())
        }
        Err(e) => Err(e).context("Failed to write report"),
    }
}
