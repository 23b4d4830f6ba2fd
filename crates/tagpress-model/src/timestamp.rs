//! Activation timestamps (display only).

use std::fmt::{self, Write};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};

use crate::error::TimestampFormatError;

/// Date and time to the second, e.g. `2025-03-14 09:26:53`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Moment an activation was detected, in local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp(DateTime<Local>);

impl Timestamp {
    /// Capture the current local time.
    #[must_use]
    pub fn now() -> Self {
        Self(Local::now())
    }

    /// Wrap an existing instant, converting it to local time.
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self(datetime.with_timezone(&Local))
    }

    /// Render with a `strftime`-style pattern.
    pub fn format(&self, pattern: &str) -> Result<String, TimestampFormatError> {
        let mut rendered = String::new();
        write!(rendered, "{}", self.0.format(pattern)).map_err(|_| TimestampFormatError {
            pattern: pattern.to_string(),
        })?;
        Ok(rendered)
    }
}

/// Reject patterns containing specifiers chrono does not understand.
pub fn validate_timestamp_format(pattern: &str) -> Result<(), TimestampFormatError> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(TimestampFormatError {
            pattern: pattern.to_string(),
        });
    }
    Ok(())
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DEFAULT_TIMESTAMP_FORMAT))
    }
}
