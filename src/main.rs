//! CLI entry point for the seamless texture converter

use clap::Parser;
use log::debug;
use seamtile::io::cli::{Cli, FileProcessor};
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    seamtile::io::logging::init();
    let cli = Cli::parse();
    let processor = FileProcessor::new(cli);

    match processor.process() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            // Independent of the log filter
            let _ = writeln!(std::io::stderr(), "Error: {e}");
            debug!("Conversion failed: {e:?}");
            ExitCode::FAILURE
        }
    }
}
