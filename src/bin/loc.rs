use std::process::ExitCode;

use clap::Parser;
use srcsweep::{app, cli::LocArgs, logging};
use srcsweep_domain::CountConfig;

fn main() -> ExitCode {
    let _args = LocArgs::parse();
    logging::init();

    match app::run_loc(&CountConfig::default()) {
        Ok(outcome) => app::exit_code(&outcome),
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
