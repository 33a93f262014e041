//! Platform abstraction trait definitions.

use std::fmt::Debug;

use chrono::{DateTime, Utc};

/// Provides the current wall-clock time.
///
/// This trait abstracts the underlying time source, allowing for both the real
/// implementation (reading the system clock) and fake implementations (for
/// testing with pinned instants).
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Gets the current wall-clock time, normalized to UTC.
    fn now_utc(&self) -> DateTime<Utc>;
}
