//! Real platform implementation backed by the system clock.

use chrono::{DateTime, Utc};

use crate::pal::abstractions::Platform;

/// Real implementation of the platform abstraction, reading the system wall
/// clock through `chrono`.
#[derive(Clone, Debug)]
pub(crate) struct RealPlatform;

impl Platform for RealPlatform {
    #[cfg_attr(test, mutants::skip)] // Reads the ambient clock - output cannot be pinned in a test.
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
