// mediamanifest-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

use super::{MediaProbe, MediaProperties};
use crate::error::{CoreError, CoreResult};
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock implementation of MediaProbe.
///
/// Results are keyed by input string. Every call is recorded so tests can
/// assert whether (and in which order) probing happened.
#[derive(Default)]
pub struct MockMediaProbe {
    results: RefCell<HashMap<String, CoreResult<MediaProperties>>>,
    received_calls: RefCell<Vec<String>>,
}

impl MockMediaProbe {
    pub fn new() -> Self {
        Default::default()
    }

    /// Add an expected result for a specific input.
    pub fn expect(&self, input: &str, result: CoreResult<MediaProperties>) {
        self.results.borrow_mut().insert(input.to_string(), result);
    }

    pub fn calls(&self) -> Vec<String> {
        self.received_calls.borrow().clone()
    }
}

impl MediaProbe for MockMediaProbe {
    fn probe(&self, input: &str) -> CoreResult<MediaProperties> {
        self.received_calls.borrow_mut().push(input.to_string());
        match self.results.borrow_mut().remove(input) {
            Some(result) => result,
            None => Err(CoreError::ProbeUnavailable(
                input.to_string(),
                "MockMediaProbe: no expectation set".to_string(),
            )),
        }
    }
}
