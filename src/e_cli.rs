use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Filter cargo's JSON diagnostics down to a sorted list of errors and warnings.",
    long_about = "Reads `cargo build --message-format=json` output (one JSON record per line) \
                  and prints every unique error and warning as `level|file:line|message`."
)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Print the version and exit.
    #[arg(long, short = 'v', help = "Print version and exit.")]
    pub version: bool,

    #[arg(
        value_name = "INPUT",
        help = "JSON-lines files to read instead of stdin. Use - for stdin."
    )]
    pub inputs: Vec<PathBuf>,
}

/// Print the program name and version.
pub fn print_version() {
    let version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown");
    println!("cargo-ediag {}", version);
}
