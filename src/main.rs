use clap::Parser;
use flightlog_converter::cli::{args::Args, commands};
use flightlog_converter::cli::commands::shared::format_error;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    match commands::run(args) {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("{}", format_error(&error));
            process::exit(1);
        }
    }
}
