// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use line_tally::{app, cli::Args};

fn main() -> ExitCode {
    let args = Args::parse();
    match app::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
