use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use chrono_tz::Tz;

use crate::clock::errors::ClockError;

/// IANA timezone identifier resolved against the bundled tz database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneName(Tz);

impl TimezoneName {
    pub const DEFAULT: &'static str = "UTC";

    /// Resolve a timezone name such as `"Europe/London"`.
    ///
    /// # Errors
    /// * `UnknownTimezone` - Name is not in the IANA database
    pub fn new(name: &str) -> Result<Self, ClockError> {
        name.parse::<Tz>()
            .map(TimezoneName)
            .map_err(|_| ClockError::UnknownTimezone(name.to_string()))
    }

    pub fn utc() -> Self {
        Self(Tz::UTC)
    }

    pub fn as_str(&self) -> &'static str {
        self.0.name()
    }
}

impl fmt::Display for TimezoneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wall-clock time in one timezone at a single instant.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockReading {
    /// `YYYY-MM-DD HH:MM:SS <abbrev>`
    pub current_time: String,
    pub timezone: TimezoneName,
    /// Seconds since the Unix epoch, microsecond resolution
    pub timestamp: f64,
}

impl ClockReading {
    const FORMAT: &'static str = "%Y-%m-%d %H:%M:%S %Z";

    pub fn at(timezone: TimezoneName, now: DateTime<Utc>) -> Self {
        let local = now.with_timezone(&timezone.0);

        Self {
            current_time: local.format(Self::FORMAT).to_string(),
            timezone,
            timestamp: now.timestamp_micros() as f64 / 1_000_000.0,
        }
    }

    pub fn now(timezone: TimezoneName) -> Self {
        Self::at(timezone, Utc::now())
    }
}
