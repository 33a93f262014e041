use std::any::Any;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};

use crate::error::Result;
use crate::pal::{Platform, PlatformFacade};
use crate::{ERR_POISONED_LOCK, Error};

/// Measures the wall-clock time between a start and an end instant.
///
/// The start instant is captured when the value is created. Until an end
/// instant is set, the interval counts as running and [`total_ms`](Self::total_ms)
/// is re-evaluated against the current time on every read. Setting an end
/// freezes the elapsed value; clearing it resumes measurement.
///
/// All instants are normalized to UTC before storage and comparison, and the
/// bound setters enforce `start <= end` whenever both are set. A rejected
/// mutation leaves the previously valid bounds untouched.
///
/// A chronological log of free-text messages and an opaque metadata value can
/// be attached to the measurement for diagnostic purposes.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use wall_time::Timestamp;
///
/// let mut timestamp = Timestamp::new();
///
/// // Simulate the operation being measured.
/// std::thread::sleep(std::time::Duration::from_millis(10));
///
/// timestamp.set_end(Utc::now())?;
/// timestamp.add_message("operation finished")?;
///
/// let elapsed_ms = timestamp.total_ms().unwrap();
/// assert!(elapsed_ms > 0.0);
/// # Ok::<(), wall_time::Error>(())
/// ```
///
/// # Threading
///
/// The message log is internally synchronized: [`add_message`](Self::add_message)
/// and [`messages`](Self::messages) take `&self` and may be called concurrently
/// from threads sharing one instance (e.g. through an `Arc`). The bound
/// setters take `&mut self`, so racing writers of `start`/`end` are rejected
/// at compile time.
pub struct Timestamp {
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    messages: Mutex<BTreeMap<DateTime<Utc>, String>>,
    metadata: Option<Box<dyn Any + Send + Sync>>,
    platform: PlatformFacade,
}

impl Timestamp {
    /// Creates a new timestamp with `start` set to the current UTC instant.
    ///
    /// The end instant is absent (the interval is running), the message log is
    /// empty and no metadata is attached.
    ///
    /// # Examples
    ///
    /// ```
    /// use wall_time::Timestamp;
    ///
    /// let timestamp = Timestamp::new();
    ///
    /// assert!(timestamp.start().is_some());
    /// assert!(timestamp.end().is_none());
    /// assert!(timestamp.messages().is_empty());
    /// ```
    #[expect(
        clippy::new_without_default,
        reason = "construction captures the current instant, which a 'default timestamp' would obscure"
    )]
    #[must_use]
    pub fn new() -> Self {
        Self::with_platform(PlatformFacade::real())
    }

    /// Creates a new timestamp reading time from a specific platform.
    ///
    /// This is used by tests to inject a fake clock with pinned instants.
    pub(crate) fn with_platform(platform: PlatformFacade) -> Self {
        let start = platform.now_utc();

        Self {
            start: Some(start),
            end: None,
            messages: Mutex::new(BTreeMap::new()),
            metadata: None,
            platform,
        }
    }

    /// The instant at which the measured interval starts, if set.
    #[must_use]
    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.start
    }

    /// The instant at which the measured interval ends. Absent while the
    /// interval is running.
    #[must_use]
    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }

    /// Sets the start instant, converting it to UTC.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StartAfterEnd`] if an end instant is set and the new
    /// start would fall after it. The previous start is preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Duration, Utc};
    /// use wall_time::Timestamp;
    ///
    /// let mut timestamp = Timestamp::new();
    ///
    /// // Backdate the measurement by a quarter second.
    /// timestamp.set_start(Utc::now() - Duration::milliseconds(250))?;
    /// assert!(timestamp.total_ms().unwrap() >= 250.0);
    /// # Ok::<(), wall_time::Error>(())
    /// ```
    pub fn set_start<Tz: TimeZone>(&mut self, instant: DateTime<Tz>) -> Result<()> {
        self.apply_bounds(Some(instant.with_timezone(&Utc)), self.end)
    }

    /// Sets the end instant, converting it to UTC and freezing the elapsed
    /// value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StartAfterEnd`] if a start instant is set and the new
    /// end would fall before it. The object is not mutated.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Duration, Utc};
    /// use wall_time::Timestamp;
    ///
    /// let mut timestamp = Timestamp::new();
    /// let end = Utc::now();
    ///
    /// timestamp.set_end(end)?;
    ///
    /// // An earlier start that inverts the order is rejected.
    /// let result = timestamp.set_start(end + Duration::seconds(1));
    /// assert!(result.is_err());
    /// # Ok::<(), wall_time::Error>(())
    /// ```
    pub fn set_end<Tz: TimeZone>(&mut self, instant: DateTime<Tz>) -> Result<()> {
        self.apply_bounds(self.start, Some(instant.with_timezone(&Utc)))
    }

    /// Clears the end instant, returning the interval to its running state.
    ///
    /// Subsequent [`total_ms`](Self::total_ms) reads are measured against the
    /// current time again.
    pub fn clear_end(&mut self) {
        self.end = None;
    }

    /// Clears both the start and the end instant.
    ///
    /// This is the one way `start` can become absent: the measured interval is
    /// fully reset and [`total_ms`](Self::total_ms) returns `None` until a new
    /// start is set. The message log and metadata are untouched.
    pub fn reset(&mut self) {
        self.start = None;
        self.end = None;
    }

    /// The elapsed milliseconds between `start` and `end`, rounded to two
    /// decimal places.
    ///
    /// While the end instant is absent, the value is measured against the
    /// current instant and grows across reads. Returns `None` when no start is
    /// set (after [`reset`](Self::reset)) or if the interval width overflows
    /// the duration arithmetic, which cannot happen for realistic instants.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Duration, Utc};
    /// use wall_time::Timestamp;
    ///
    /// let mut timestamp = Timestamp::new();
    /// let start = Utc::now();
    ///
    /// timestamp.set_start(start)?;
    /// timestamp.set_end(start + Duration::milliseconds(1500))?;
    ///
    /// assert_eq!(timestamp.total_ms(), Some(1500.0));
    /// # Ok::<(), wall_time::Error>(())
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        reason = "microsecond counts of realistic intervals are far below the f64 exact-integer limit"
    )]
    #[must_use]
    pub fn total_ms(&self) -> Option<f64> {
        let start = self.start?;
        let end = self.end.unwrap_or_else(|| self.platform.now_utc());

        let micros = end.signed_duration_since(start).num_microseconds()?;

        // Hundredths of a millisecond, rounded, then scaled back to ms.
        Some((micros as f64 / 10.0).round() / 100.0)
    }

    /// Records a message in the log under the current UTC instant.
    ///
    /// Safe to call concurrently from multiple threads sharing this instance;
    /// appends are serialized by an internal lock.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyMessage`] if `text` is empty and
    /// [`Error::DuplicateMessageInstant`] if a message is already recorded at
    /// the current instant. In both cases the log is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use wall_time::Timestamp;
    ///
    /// let timestamp = Timestamp::new();
    ///
    /// timestamp.add_message("cache warmed")?;
    /// assert!(timestamp.add_message("").is_err());
    ///
    /// assert_eq!(timestamp.messages().len(), 1);
    /// # Ok::<(), wall_time::Error>(())
    /// ```
    pub fn add_message(&self, text: impl Into<String>) -> Result<()> {
        let text = text.into();

        if text.is_empty() {
            return Err(Error::EmptyMessage);
        }

        let instant = self.platform.now_utc();

        let mut messages = self.messages.lock().expect(ERR_POISONED_LOCK);

        match messages.entry(instant) {
            Entry::Vacant(entry) => {
                entry.insert(text);
                Ok(())
            }
            Entry::Occupied(_) => Err(Error::DuplicateMessageInstant { instant }),
        }
    }

    /// Returns a snapshot of the message log, ascending by instant.
    ///
    /// The snapshot is a copy: appends made after it is taken do not affect
    /// it, and modifying the returned sequence does not affect the log.
    /// Enumeration order is chronological by recorded instant regardless of
    /// insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wall_time::Timestamp;
    ///
    /// let timestamp = Timestamp::new();
    /// timestamp.add_message("first")?;
    ///
    /// let snapshot = timestamp.messages();
    /// timestamp.add_message("second")?;
    ///
    /// assert_eq!(snapshot.len(), 1);
    /// assert_eq!(timestamp.messages().len(), 2);
    /// # Ok::<(), wall_time::Error>(())
    /// ```
    #[must_use]
    pub fn messages(&self) -> Vec<(DateTime<Utc>, String)> {
        let messages = self.messages.lock().expect(ERR_POISONED_LOCK);

        messages
            .iter()
            .map(|(instant, text)| (*instant, text.clone()))
            .collect()
    }

    /// Attaches an opaque caller-supplied metadata value.
    ///
    /// The value is not interpreted in any way; retrieve it with
    /// [`metadata`](Self::metadata) or [`metadata_as`](Self::metadata_as).
    pub fn set_metadata(&mut self, value: impl Any + Send + Sync) {
        self.metadata = Some(Box::new(value));
    }

    /// Removes any attached metadata.
    pub fn clear_metadata(&mut self) {
        self.metadata = None;
    }

    /// The attached metadata value, if any.
    #[must_use]
    pub fn metadata(&self) -> Option<&(dyn Any + Send + Sync)> {
        self.metadata.as_deref()
    }

    /// The attached metadata value downcast to a concrete type.
    ///
    /// Returns `None` if no metadata is attached or if it is not of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wall_time::Timestamp;
    ///
    /// let mut timestamp = Timestamp::new();
    /// timestamp.set_metadata("request-7f3a".to_string());
    ///
    /// assert_eq!(
    ///     timestamp.metadata_as::<String>().map(String::as_str),
    ///     Some("request-7f3a")
    /// );
    /// assert!(timestamp.metadata_as::<u64>().is_none());
    /// ```
    #[must_use]
    pub fn metadata_as<T: Any>(&self) -> Option<&T> {
        self.metadata
            .as_deref()
            .and_then(|metadata| metadata.downcast_ref::<T>())
    }

    /// Applies a new start/end pair after revalidating temporal order.
    ///
    /// Every interval mutation funnels through here so the ordering invariant
    /// is checked in exactly one place and failures never partially apply.
    fn apply_bounds(
        &mut self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<()> {
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(Error::StartAfterEnd { start, end });
            }
        }

        self.start = start;
        self.end = end;

        Ok(())
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Avoid panicking inside Debug even if an appender panicked.
        let message_count = self.messages.lock().map(|log| log.len()).unwrap_or(0);

        f.debug_struct("Timestamp")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("messages", &message_count)
            .field("has_metadata", &self.metadata.is_some())
            .finish()
    }
}
