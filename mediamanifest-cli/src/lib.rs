// mediamanifest-cli/src/lib.rs
//
// Library portion of the mediamanifest CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, GenerateArgs, InfoArgs};
pub use commands::generate::run_generate;
pub use commands::info::run_info;
