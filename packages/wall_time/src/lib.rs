#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Measures elapsed wall-clock time between a start and an end instant, with an
//! attached chronological log of free-text messages and opaque caller metadata.
//!
//! This package provides a [`Timestamp`] value object intended to be embedded in
//! host programs as a lightweight timing/instrumentation primitive: measure how
//! long an operation took and attach diagnostic notes to that measurement.
//!
//! The core functionality includes:
//! - [`Timestamp`] - Tracks a timed interval and exposes elapsed milliseconds
//! - [`Error`] - Validation failures reported to the caller as results
//!
//! All instants are normalized to UTC before storage and comparison. The
//! temporal-ordering invariant (`start <= end` whenever both are set) is
//! enforced by the setters; violating mutations fail without applying.
//!
//! # Measuring an operation
//!
//! ```
//! use wall_time::Timestamp;
//!
//! // Start is captured at creation.
//! let timestamp = Timestamp::new();
//!
//! // Simulate some work.
//! std::thread::sleep(std::time::Duration::from_millis(10));
//!
//! // No end is set, so elapsed time is measured against "now" on every read.
//! let elapsed_ms = timestamp.total_ms().unwrap();
//! assert!(elapsed_ms > 0.0);
//! ```
//!
//! # Marking completion
//!
//! ```
//! use chrono::Utc;
//! use wall_time::Timestamp;
//!
//! let mut timestamp = Timestamp::new();
//!
//! // Mark the operation as finished; elapsed time is now fixed.
//! timestamp.set_end(Utc::now())?;
//! let frozen = timestamp.total_ms();
//! assert_eq!(timestamp.total_ms(), frozen);
//!
//! // Clearing the end returns the object to its running state.
//! timestamp.clear_end();
//! # Ok::<(), wall_time::Error>(())
//! ```
//!
//! # Attaching messages
//!
//! The message log is keyed by the instant each message was recorded and is
//! safe to append to from multiple threads sharing one instance:
//!
//! ```
//! use wall_time::Timestamp;
//!
//! let timestamp = Timestamp::new();
//! timestamp.add_message("connected to upstream")?;
//! timestamp.add_message("handshake complete")?;
//!
//! // Snapshots are chronological and isolated from later appends.
//! for (instant, text) in timestamp.messages() {
//!     println!("{instant}: {text}");
//! }
//! # Ok::<(), wall_time::Error>(())
//! ```
//!
//! # Threading
//!
//! [`Timestamp`] is `Send + Sync`. Appending to and snapshotting the message
//! log go through `&self` and are internally synchronized. Mutating the
//! interval bounds requires `&mut self`, so concurrent writers of
//! `start`/`end` are ruled out at compile time rather than at runtime.

mod error;
mod pal;
mod timestamp;

pub use error::*;
pub use timestamp::*;

// A poisoned lock means a writer panicked mid-append; the log contents can no
// longer be trusted, so we stop instead of serving potentially corrupt data.
pub(crate) const ERR_POISONED_LOCK: &str = "encountered poisoned lock - continued execution \
    is not safe because the message log may no longer be internally consistent";
