// mediamanifest-cli/src/error.rs
//
// The CLI has no error type of its own: every command returns CoreError, and
// failures that need more detail get a message prefix via `CliErrorContext`.

use mediamanifest_core::{CoreError, CoreResult};
use std::fmt;

pub type CliResult<T> = CoreResult<T>;

/// Prefixes a failure with what the command was doing at the time.
pub trait CliErrorContext<T> {
    fn cli_context(self, context: impl fmt::Display) -> CliResult<T>;

    /// Lazy variant for messages that need formatting.
    fn cli_with_context<C: fmt::Display>(self, context: impl FnOnce() -> C) -> CliResult<T>;
}

impl<T, E: Into<CoreError>> CliErrorContext<T> for Result<T, E> {
    fn cli_context(self, context: impl fmt::Display) -> CliResult<T> {
        self.cli_with_context(|| context)
    }

    fn cli_with_context<C: fmt::Display>(self, context: impl FnOnce() -> C) -> CliResult<T> {
        self.map_err(|e| CoreError::OperationFailed(format!("{}: {}", context(), e.into())))
    }
}
