//! tabprof CLI - statistical profiling for delimited files.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};
use tabprof::ProfileError;

/// Exit code for input the engine rejected.
const EXIT_MALFORMED_INPUT: i32 = 2;
/// Exit code for every other failure.
const EXIT_FAILURE: i32 = 1;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose, cli.log_json) {
        eprintln!("Error: {}", e);
        std::process::exit(EXIT_FAILURE);
    }

    let result = match cli.command {
        Commands::Profile {
            file,
            output,
            pretty,
            options,
        } => commands::profile::run(file, output, pretty, options),

        Commands::Summary { file, options } => commands::summary::run(file, options, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(exit_code(e.as_ref()));
    }
}

fn exit_code(error: &(dyn std::error::Error + 'static)) -> i32 {
    match error.downcast_ref::<ProfileError>() {
        Some(e) if e.is_malformed_input() => EXIT_MALFORMED_INPUT,
        _ => EXIT_FAILURE,
    }
}
