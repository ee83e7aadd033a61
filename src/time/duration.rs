//! Millisecond duration value

use serde::{Deserialize, Serialize};
use std::fmt;

use super::parse::{self, shared_cache};
use super::template::Template;
use super::unit::Unit;
use crate::error::Result;

/// `%H:%I:%S.%V`, e.g. `10:00:01.433`
pub const FORMAT_DEFAULT: &str = "%H:%I:%S.%V";

/// `%H:%I:%S.%v`, milliseconds without padding
pub const FORMAT_H_I_S_V_FREE: &str = "%H:%I:%S.%v";

/// A signed duration with millisecond resolution
///
/// Serializes as the raw millisecond count. Arithmetic saturates at the
/// bounds of `i64`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TimeUnit {
    milliseconds: i64,
}

impl TimeUnit {
    /// Create a duration of `value` units
    pub fn new(value: i64, unit: Unit) -> Self {
        Self {
            milliseconds: value.saturating_mul(unit.millis()),
        }
    }

    pub fn from_millis(milliseconds: i64) -> Self {
        Self { milliseconds }
    }

    /// Add `value` units in place
    pub fn add(&mut self, value: i64, unit: Unit) {
        self.milliseconds = self
            .milliseconds
            .saturating_add(value.saturating_mul(unit.millis()));
    }

    pub fn milliseconds(&self) -> i64 {
        self.milliseconds
    }

    pub fn is_negative(&self) -> bool {
        self.milliseconds < 0
    }

    /// Render through a format template such as `%H:%I:%S.%V`
    pub fn format(&self, template: &str) -> Result<String> {
        let template = Template::parse(template)?;
        Ok(self.format_template(&template))
    }

    /// Render through the default template
    pub fn format_default(&self) -> String {
        // FORMAT_DEFAULT is a valid template
        self.format(FORMAT_DEFAULT).unwrap_or_default()
    }

    /// Render through an already scanned template
    pub fn format_template(&self, template: &Template) -> String {
        super::format::render(template, self.milliseconds)
    }

    /// Parse `input` laid out according to `template`
    ///
    /// The result is never negative: templates have no sign placeholder.
    pub fn from_format(input: &str, template: &str) -> Result<Self> {
        let template = Template::parse(template)?;
        Self::from_template(input, &template)
    }

    /// Parse `input` laid out according to the default template
    pub fn from_format_default(input: &str) -> Result<Self> {
        Self::from_format(input, FORMAT_DEFAULT)
    }

    /// Parse `input` against an already scanned template
    pub fn from_template(input: &str, template: &Template) -> Result<Self> {
        parse::parse(template, input, shared_cache()).map(Self::from_millis)
    }

    /// Convert to a chrono delta; `i64::MIN` is clamped to the smallest delta chrono accepts
    pub fn to_chrono(&self) -> chrono::TimeDelta {
        chrono::TimeDelta::milliseconds(self.milliseconds.max(-i64::MAX))
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.milliseconds)
    }
}

impl From<std::time::Duration> for TimeUnit {
    fn from(duration: std::time::Duration) -> Self {
        Self::from_millis(i64::try_from(duration.as_millis()).unwrap_or(i64::MAX))
    }
}

impl From<chrono::TimeDelta> for TimeUnit {
    fn from(delta: chrono::TimeDelta) -> Self {
        Self::from_millis(delta.num_milliseconds())
    }
}
