//! # cargo-ediag
//!
//! `cargo-ediag` boils cargo's JSON message stream down to two sorted,
//! de-duplicated sections: errors and warnings.
//!
//! ## Quick Start
//! ```sh
//! cargo build --message-format=json | cargo ediag
//! ```

use cargo_ediag::prelude::*;
use cargo_ediag::Cli;
use clap::Parser;

pub fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let mut args: Vec<String> = std::env::args().collect();

    // If the first argument after the binary name is "ediag", remove it.
    if args.len() > 1 && args[1] == "ediag" {
        args.remove(1);
    }
    let cli = Cli::parse_from(args);
    if cli.version {
        cargo_ediag::e_cli::print_version();
        return Ok(());
    }

    cargo_ediag::run(&cli)?;
    Ok(())
}
