pub mod commands;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

use clap::Parser;
use commands::Cli;
use std::process::ExitCode;

pub fn run() -> ExitCode {
    let log_dir = config::log_dir();
    let _guard = utils::logging::init(log_dir.as_deref());

    match commands::execute(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
