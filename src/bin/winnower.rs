//! Winnower CLI binary.

use std::process;

use clap::Parser;
use winnower::cli::{args::WinnowerArgs, commands::execute_command};

fn main() {
    let args = WinnowerArgs::parse();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
