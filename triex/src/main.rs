// triex/src/main.rs
//! Triex entry point.
//!
//! Parses the command line, sets up logging and hands off to [`triex::run`].

use clap::Parser;
use log::LevelFilter;
use std::process::ExitCode;

use triex::cli::Cli;
use triex::logger;
use triex::ui::output_format::error_msg;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Some(LevelFilter::Off)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);

    match triex::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error_msg(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
