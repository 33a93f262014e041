use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur when mutating a [`Timestamp`](crate::Timestamp).
///
/// All failures are synchronous and local to the offending call; no state is
/// partially applied and nothing is retried internally. The caller decides how
/// to react.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The requested start/end pair is in the wrong temporal order.
    ///
    /// Returned by both bound setters: setting a start later than the existing
    /// end, or an end earlier than the existing start. The previously valid
    /// bounds are preserved.
    #[error("start {start} is later than end {end}")]
    StartAfterEnd {
        /// The start instant of the rejected pair, normalized to UTC.
        start: DateTime<Utc>,

        /// The end instant of the rejected pair, normalized to UTC.
        end: DateTime<Utc>,
    },

    /// Empty message text was passed to the append operation.
    #[error("message text must not be empty")]
    EmptyMessage,

    /// A message is already recorded at this instant.
    ///
    /// Message log keys must be unique per entry. Two appends landing on the
    /// same nanosecond is a caller error; the log is left unchanged.
    #[error("a message is already recorded at {instant}")]
    DuplicateMessageInstant {
        /// The instant that already carries a message.
        instant: DateTime<Utc>,
    },
}

/// A specialized `Result` type for wall-time operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
