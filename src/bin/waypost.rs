//! Waypost CLI binary.

use clap::Parser;
use std::process;
use waypost::cli::{args::WaypostArgs, commands::execute_command};

fn main() {
    // Parse command line arguments using clap
    let args = WaypostArgs::parse();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
