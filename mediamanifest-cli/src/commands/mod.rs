// mediamanifest-cli/src/commands/mod.rs
//
// Declares the modules containing the logic for each subcommand.

pub mod generate;
pub mod info;
