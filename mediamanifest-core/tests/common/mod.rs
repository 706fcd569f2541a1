// mediamanifest-core/tests/common/mod.rs
//
// Shared helpers for integration tests.

#![allow(dead_code)]

use mediamanifest_core::{CoreError, CoreResult, MediaProbe, MediaProperties};
use std::cell::RefCell;

pub const BASE_URL: &str = "https://cdn.example.com/media";

/// Probe stub that returns the same properties for every input and records
/// every call.
pub struct StubProbe {
    properties: Option<MediaProperties>,
    calls: RefCell<Vec<String>>,
}

impl StubProbe {
    pub fn returning(height: u32, duration_secs: u64, bitrate_bps: u64) -> Self {
        Self {
            properties: Some(MediaProperties {
                height,
                duration_secs,
                bitrate_bps,
            }),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// A probe whose every call fails as if the tool printed nothing.
    pub fn empty() -> Self {
        Self {
            properties: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl MediaProbe for StubProbe {
    fn probe(&self, input: &str) -> CoreResult<MediaProperties> {
        self.calls.borrow_mut().push(input.to_string());
        self.properties.ok_or_else(|| {
            CoreError::ProbeEmptyOutput(input.to_string(), "stubbed empty output".to_string())
        })
    }
}
