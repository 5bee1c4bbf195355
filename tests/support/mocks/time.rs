// tests/support/mocks/time.rs
use chrono::{DateTime, Duration, TimeZone, Utc};
use newsdesk_core::application::ports::time::Clock;
use std::sync::Mutex;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// Always returns the same instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(fixed_now())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Advances by one millisecond per call, so consecutive reads never repeat.
pub struct SteppingClock {
    start: DateTime<Utc>,
    calls: Mutex<i64>,
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self {
            start: fixed_now(),
            calls: Mutex::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut calls = self.calls.lock().unwrap();
        let now = self.start + Duration::milliseconds(*calls);
        *calls += 1;
        now
    }
}
