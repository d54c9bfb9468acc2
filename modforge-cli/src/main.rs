//! modforge CLI tool

#![forbid(unsafe_code)]

use std::io;
use std::process::ExitCode;

use clap::Parser;
use console::style;
use modforge::observability;
use modforge_cli_lib::{Cli, Outcome};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = observability::init(&cli.observability()) {
        eprintln!("{} {e}", style("warning:").yellow().bold());
    }

    let mut stdout = io::stdout().lock();
    match cli.run(&mut stdout) {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::Failed) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{} {e:#}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
