//! Wall-clock access
//!
//! Calendar dates are taken in UTC so "today" matches the ISO date prefix of
//! the current timestamp.

use chrono::{DateTime, NaiveDate, Utc};

/// Source of the current instant
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar date of the current instant
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// The real clock (`Date.now()` on web)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to one instant, for demos and tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Pin the clock to noon UTC on `date`
    pub fn on(date: NaiveDate) -> Self {
        Self(date.and_hms_opt(12, 0, 0).unwrap_or_default().and_utc())
    }

    /// Move the clock forward by whole days
    pub fn advance_days(&mut self, days: i64) {
        self.0 += chrono::Duration::days(days);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
