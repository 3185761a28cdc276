use std::process::ExitCode;

use clap::Parser;
use srcsweep::{app, cli::IndentArgs, logging};
use srcsweep_domain::NormalizeConfig;

fn main() -> ExitCode {
    let _args = IndentArgs::parse();
    logging::init();

    match app::run_indent(&NormalizeConfig::default()) {
        Ok(outcome) => app::exit_code(&outcome),
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
