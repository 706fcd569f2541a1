// ============================================================================
// mediamanifest-cli/src/main.rs
// ============================================================================
//
// MAIN ENTRY POINT: mediamanifest command-line application
//
// Parses arguments, initializes logging and dispatches to the subcommand.
// Any error is printed to stderr and the process exits with status 1.

use clap::Parser;
use mediamanifest_cli::logging::init_logging;
use mediamanifest_cli::{Cli, Commands, run_generate, run_info};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::Info(args) => run_info(args),
    };

    if let Err(e) = result {
        log::debug!("Command failed: {:?}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
