//! Timestamps and entry ids.
//!
//! The store never reads the wall clock directly. Production code uses
//! [`SystemClock`] and [`TimestampIds`]; tests inject [`ManualClock`] and
//! [`SequentialIds`] to get reproducible entries.

use std::cell::Cell;

use chrono::{DateTime, Duration, FixedOffset, Local};

/// Display format of [`HistoryEntry::created_at`](crate::HistoryEntry::created_at),
/// e.g. `2024/3/9 08:05:41`.
pub const CREATED_AT_FORMAT: &str = "%Y/%-m/%-d %H:%M:%S";

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Clock that returns a preset instant and then moves it forward by a
/// fixed step on every reading.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Cell<DateTime<FixedOffset>>,
    step: Duration,
}

impl ManualClock {
    pub fn new(start: DateTime<FixedOffset>) -> Self {
        Self::with_step(start, Duration::seconds(1))
    }

    pub fn with_step(start: DateTime<FixedOffset>, step: Duration) -> Self {
        Self {
            current: Cell::new(start),
            step,
        }
    }

    /// Instant the next reading will return.
    pub fn peek(&self) -> DateTime<FixedOffset> {
        self.current.get()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<FixedOffset> {
        let now = self.current.get();
        self.current.set(now + self.step);
        now
    }
}

/// Issues candidate ids for new entries.
///
/// The store raises a candidate that is not above the last id it issued,
/// so implementations only need to be roughly increasing.
pub trait IdSource {
    fn next_id(&mut self, now: &DateTime<FixedOffset>) -> u64;
}

/// Milliseconds since the Unix epoch of the entry's timestamp.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampIds;

impl IdSource for TimestampIds {
    fn next_id(&mut self, now: &DateTime<FixedOffset>) -> u64 {
        u64::try_from(now.timestamp_millis()).unwrap_or_default()
    }
}

/// 1, 2, 3, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self, _now: &DateTime<FixedOffset>) -> u64 {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }
}

/// Render a timestamp the way history entries display it.
pub fn format_created_at(at: &DateTime<FixedOffset>) -> String {
    at.format(CREATED_AT_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(8 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 9, 8, 5, 41)
            .unwrap()
    }

    #[test]
    fn test_created_at_format_drops_padding_on_date() {
        assert_eq!(format_created_at(&start()), "2024/3/9 08:05:41");
    }

    #[test]
    fn test_manual_clock_steps() {
        let clock = ManualClock::with_step(start(), Duration::minutes(5));
        assert_eq!(clock.now(), start());
        assert_eq!(clock.now(), start() + Duration::minutes(5));
        assert_eq!(clock.peek(), start() + Duration::minutes(10));
    }

    #[test]
    fn test_timestamp_ids_are_epoch_millis() {
        let mut ids = TimestampIds;
        assert_eq!(ids.next_id(&start()), 1_709_942_741_000);
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::starting_at(7);
        assert_eq!(ids.next_id(&start()), 7);
        assert_eq!(ids.next_id(&start()), 8);
    }
}
