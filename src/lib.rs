#![doc = include_str!("../README.md")]

// Re-export std common modules
pub mod prelude {
    pub use std::error::Error;
    pub use std::fs;
    pub use std::io;
    pub use std::path::PathBuf;
    pub use log::{debug, trace};
}

pub mod e_types;
pub use e_types::{DiagnosticEntry, DiagnosticSets, Severity};
pub mod e_cli;
pub use e_cli::Cli;
pub mod e_parser;
pub use e_parser::{extract_entry, parse_line, parse_record};
pub mod e_reports;
pub use e_reports::render_report;
pub mod e_runner;
pub use e_runner::{collect_diagnostics, run};
