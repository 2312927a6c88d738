//! Clock abstraction for the execution date stamped on generated documents.
//!
//! Renderers never read the system time directly. The selector asks a
//! [`Clock`] for today's date once per request and hands it to the renderer,
//! which makes output reproducible under a [`FixedClock`].

use chrono::{Local, NaiveDate};

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
    /// Returns today's date in the local calendar.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the host's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock that always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    /// Creates a clock pinned to `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_pinned_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let clock = FixedClock::new(date);
        assert_eq!(clock.today(), date);
        assert_eq!(clock.today(), clock.today());
    }

    #[test]
    fn clock_is_object_safe() {
        fn check<T: Clock + ?Sized>() {}
        check::<dyn Clock>();
    }
}
