// ============================================================================
// mediamanifest-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger setup for the CLI
//
// The application logs through the standard `log` crate with `env_logger` as
// the backend. Output goes to stderr so `generate --stdout` stays pipeable.
// - RUST_LOG=info (default): one line per added track and written file
// - RUST_LOG=debug or --verbose: classification, URL resolution, probe calls

use log::LevelFilter;
use std::io::Write;

/// Initializes env_logger. `verbose` forces debug level regardless of RUST_LOG.
pub fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    builder.format(|buf, record| writeln!(buf, "{:<5} {}", record.level(), record.args()));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();

    log::debug!("Logger initialized (verbose: {})", verbose);
}
