//! Time units and their size in milliseconds

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TimeUnitError;

/// A time unit family a duration can be expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Millisecond,
    Second,
    Minute,
    Hour,
}

impl Unit {
    pub const MILLISECOND: i64 = 1;
    pub const SECOND: i64 = 1_000;
    pub const MINUTE: i64 = 60_000;
    pub const HOUR: i64 = 3_600_000;

    /// Canonical order used when recombining captured values
    pub const CANONICAL: [Unit; 4] = [Unit::Hour, Unit::Minute, Unit::Second, Unit::Millisecond];

    /// Number of milliseconds in one unit
    pub const fn millis(self) -> i64 {
        match self {
            Unit::Millisecond => Self::MILLISECOND,
            Unit::Second => Self::SECOND,
            Unit::Minute => Self::MINUTE,
            Unit::Hour => Self::HOUR,
        }
    }

    /// Name of the capture group used for this family in extraction patterns
    pub const fn group_name(self) -> &'static str {
        match self {
            Unit::Millisecond => "millis",
            Unit::Second => "seconds",
            Unit::Minute => "minutes",
            Unit::Hour => "hours",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Unit::Millisecond => "millisecond",
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = TimeUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ms" | "millisecond" | "milliseconds" => Ok(Unit::Millisecond),
            "s" | "sec" | "second" | "seconds" => Ok(Unit::Second),
            "m" | "min" | "minute" | "minutes" => Ok(Unit::Minute),
            "h" | "hour" | "hours" => Ok(Unit::Hour),
            _ => Err(TimeUnitError::InvalidUnit(s.to_string())),
        }
    }
}
