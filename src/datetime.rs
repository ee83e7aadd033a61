//! Calendar date/time rendered as an RFC 3339 string
//!
//! A thin wrapper around [`chrono::DateTime`] whose string and JSON forms are
//! both `2019-12-01T00:00:00+00:00`.

use chrono::{FixedOffset, NaiveDate, NaiveTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::TimeUnitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime(chrono::DateTime<FixedOffset>);

impl DateTime {
    pub fn new<Tz: TimeZone>(datetime: chrono::DateTime<Tz>) -> Self {
        Self(datetime.fixed_offset())
    }

    /// Midnight UTC of the given calendar day
    pub fn from_date(date: NaiveDate) -> Self {
        let naive = date.and_time(NaiveTime::default());
        Self::new(Utc.from_utc_datetime(&naive))
    }

    pub fn inner(&self) -> &chrono::DateTime<FixedOffset> {
        &self.0
    }

    pub fn into_inner(self) -> chrono::DateTime<FixedOffset> {
        self.0
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Secs, false))
    }
}

/// Accepts RFC 3339 timestamps or a bare `YYYY-MM-DD` date (midnight UTC)
impl FromStr for DateTime {
    type Err = TimeUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(datetime) = chrono::DateTime::parse_from_rfc3339(s) {
            return Ok(Self(datetime));
        }

        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self::from_date)
            .map_err(|source| TimeUnitError::InvalidDateTime {
                input: s.to_string(),
                source,
            })
    }
}

impl<Tz: TimeZone> From<chrono::DateTime<Tz>> for DateTime {
    fn from(datetime: chrono::DateTime<Tz>) -> Self {
        Self::new(datetime)
    }
}

impl Serialize for DateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
