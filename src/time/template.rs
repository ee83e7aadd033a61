//! Template scanning
//!
//! Splits a format template into literal text and placeholder occurrences.
//! Formatting and parsing both consume the same [`Template`], so a template
//! is always interpreted identically in both directions.

use std::fmt;
use std::str::FromStr;
use tracing::trace;

use super::placeholder::{lookup, PlaceholderSpec, MARKER};
use super::unit::Unit;
use crate::error::{Result, TimeUnitError};

/// Scanned template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Original template string
    raw: String,
    /// Literal runs and placeholders in template order
    segments: Vec<Segment>,
}

/// Template segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, with escaped markers already reduced
    Literal(String),
    /// Placeholder occurrence
    Placeholder {
        /// Code point offset of the marker in the raw template
        offset: usize,
        spec: &'static PlaceholderSpec,
    },
}

impl Template {
    /// Scan a template string
    pub fn parse(raw: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = raw.chars().enumerate();

        while let Some((offset, ch)) = chars.next() {
            if ch != MARKER {
                literal.push(ch);
                continue;
            }

            match chars.next() {
                None => return Err(TimeUnitError::MissingPlaceholder { offset }),
                Some((_, MARKER)) => literal.push(MARKER),
                Some((_, symbol)) => {
                    let spec =
                        lookup(symbol).ok_or(TimeUnitError::UnknownPlaceholder { symbol, offset })?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder { offset, spec });
                }
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        trace!(template = raw, segments = segments.len(), "scanned template");

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Placeholder occurrences in template order
    pub fn placeholders(&self) -> impl Iterator<Item = (usize, &'static PlaceholderSpec)> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder { offset, spec } => Some((*offset, *spec)),
            Segment::Literal(_) => None,
        })
    }

    /// Unit families referenced more than once, in order of first repetition
    pub fn repeated_units(&self) -> Vec<Unit> {
        let mut seen = Vec::new();
        let mut repeated = Vec::new();
        for (_, spec) in self.placeholders() {
            if seen.contains(&spec.unit) {
                if !repeated.contains(&spec.unit) {
                    repeated.push(spec.unit);
                }
            } else {
                seen.push(spec.unit);
            }
        }
        repeated
    }
}

impl FromStr for Template {
    type Err = TimeUnitError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
