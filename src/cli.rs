// src/cli.rs
//! Command line surfaces of the two tools.
//!
//! Both tools run on compiled-in settings; the parsers exist so that
//! `--help` and `--version` behave and stray arguments are rejected.

use clap::Parser;

use crate::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "indent",
    version = VERSION,
    about = "Replace tabs with four spaces in every .rs file of the project members",
    long_about = "Replace tabs with four spaces in every .rs file below the members \
                  nl/ ir/ ir2triple/ ir2wasm/ ir2x86/ ofile/ syntax/ wasm/ x86/. \
                  Files are rewritten in place; no backup is kept."
)]
pub struct IndentArgs {}

#[derive(Parser, Debug)]
#[command(
    name = "loc",
    version = VERSION,
    about = "Count non-blank lines of every .rs file below the current directory"
)]
pub struct LocArgs {}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn parsers_are_well_formed() {
        IndentArgs::command().debug_assert();
        LocArgs::command().debug_assert();
    }

    #[test]
    fn positional_arguments_are_rejected() {
        assert!(LocArgs::try_parse_from(["loc", "src"]).is_err());
        assert!(IndentArgs::try_parse_from(["indent", "--width", "2"]).is_err());
        assert!(IndentArgs::try_parse_from(["indent"]).is_ok());
    }
}
