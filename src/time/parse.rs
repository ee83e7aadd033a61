//! Extraction patterns and parsing
//!
//! A template is turned into an anchored regular expression with one named
//! group per unit family. Captured values are recombined in canonical unit
//! order regardless of where they appeared in the template.

use lru::LruCache;
use regex::Regex;
use std::borrow::Cow;
use std::num::NonZeroUsize;
use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError};
use tracing::debug;

use super::template::{Segment, Template};
use super::unit::Unit;
use crate::error::{Result, TimeUnitError};

static SHARED_PATTERNS: LazyLock<PatternCache> =
    LazyLock::new(|| PatternCache::new(PatternCache::DEFAULT_CAPACITY));

/// Process-wide cache used by [`TimeUnit::from_format`](super::TimeUnit::from_format)
pub fn shared_cache() -> &'static PatternCache {
    &SHARED_PATTERNS
}

/// Build the anchored extraction pattern for a template
pub fn build_pattern(template: &Template) -> String {
    let mut pattern = String::from("^");
    for segment in template.segments() {
        match segment {
            Segment::Literal(text) => pattern.push_str(&regex::escape(text)),
            Segment::Placeholder { spec, .. } => pattern.push_str(&spec.capture_fragment()),
        }
    }
    pattern.push('$');
    pattern
}

/// Compile the extraction pattern for a template
///
/// Templates repeating a unit family produce duplicate group names and fail
/// here with [`TimeUnitError::PatternConstruction`].
pub fn compile(template: &Template) -> Result<Regex> {
    let pattern = build_pattern(template);
    debug!(template = template.raw(), %pattern, "compiling extraction pattern");
    Regex::new(&pattern).map_err(|source| TimeUnitError::PatternConstruction { pattern, source })
}

/// LRU cache of compiled extraction patterns keyed by template string
pub struct PatternCache {
    entries: Option<Mutex<LruCache<String, Arc<Regex>>>>,
}

impl PatternCache {
    pub const DEFAULT_CAPACITY: usize = 64;

    /// Create a cache holding up to `capacity` patterns; zero disables caching
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap))),
        }
    }

    /// Return the compiled pattern for `template`, compiling it on a miss
    pub fn get_or_compile(&self, template: &Template) -> Result<Arc<Regex>> {
        let Some(entries) = &self.entries else {
            return compile(template).map(Arc::new);
        };

        if let Some(regex) = lock(entries).get(template.raw()) {
            debug!(template = template.raw(), "extraction pattern cache hit");
            return Ok(Arc::clone(regex));
        }

        let regex = Arc::new(compile(template)?);
        lock(entries).put(template.raw().to_string(), Arc::clone(&regex));
        Ok(regex)
    }

    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, |entries| lock(entries).len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.entries
            .as_ref()
            .map_or(0, |entries| lock(entries).cap().get())
    }

    pub fn clear(&self) {
        if let Some(entries) = &self.entries {
            lock(entries).clear();
        }
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl std::fmt::Debug for PatternCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Match `input` against `template` and return the total in milliseconds
pub fn parse(template: &Template, input: &str, cache: &PatternCache) -> Result<i64> {
    let regex = cache.get_or_compile(template)?;
    let captures = regex
        .captures(input)
        .ok_or_else(|| TimeUnitError::NoMatch {
            pattern: regex.as_str().to_string(),
            input: input.to_string(),
        })?;

    let mut total: i64 = 0;
    for unit in Unit::CANONICAL {
        let Some(digits) = captures.name(unit.group_name()) else {
            continue;
        };
        let digits = digits.as_str();
        total = captured_millis(unit, digits)?
            .checked_add(total)
            .ok_or_else(|| out_of_range(unit, digits))?;
    }

    Ok(total)
}

/// Convert captured digits of one family to milliseconds
///
/// Millisecond captures are a fraction of a second scaled to three digits,
/// so shorter captures are right-padded with zeros.
fn captured_millis(unit: Unit, digits: &str) -> Result<i64> {
    let digits_for_value: Cow<'_, str> = if unit == Unit::Millisecond && digits.len() < 3 {
        Cow::Owned(format!("{digits:0<3}"))
    } else {
        Cow::Borrowed(digits)
    };

    digits_for_value
        .parse::<i64>()
        .ok()
        .and_then(|value| value.checked_mul(unit.millis()))
        .ok_or_else(|| out_of_range(unit, digits))
}

fn out_of_range(unit: Unit, digits: &str) -> TimeUnitError {
    TimeUnitError::ValueOutOfRange {
        family: unit,
        digits: digits.to_string(),
    }
}
