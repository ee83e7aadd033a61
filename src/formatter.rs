//! Formatter bound to a default template and its own pattern cache

use tracing::debug;

use crate::config::FormatConfig;
use crate::error::Result;
use crate::time::{parse, PatternCache, Template, TimeUnit};

#[derive(Debug)]
pub struct Formatter {
    default_template: Template,
    cache: PatternCache,
}

impl Formatter {
    /// Create a formatter; the default template is scanned eagerly
    pub fn new(default_template: &str, cache_size: usize) -> Result<Self> {
        Ok(Self {
            default_template: Template::parse(default_template)?,
            cache: PatternCache::new(cache_size),
        })
    }

    pub fn from_config(config: &FormatConfig) -> Result<Self> {
        debug!(
            template = %config.default_template,
            cache_size = config.pattern_cache_size,
            "creating formatter"
        );
        Ok(Self {
            default_template: config.template()?,
            cache: PatternCache::new(config.pattern_cache_size),
        })
    }

    pub fn default_template(&self) -> &Template {
        &self.default_template
    }

    pub fn cache(&self) -> &PatternCache {
        &self.cache
    }

    /// Render with the default template
    pub fn format(&self, value: &TimeUnit) -> String {
        value.format_template(&self.default_template)
    }

    pub fn format_with(&self, value: &TimeUnit, template: &str) -> Result<String> {
        value.format(template)
    }

    /// Parse with the default template
    pub fn parse(&self, input: &str) -> Result<TimeUnit> {
        self.parse_template(input, &self.default_template)
    }

    pub fn parse_with(&self, input: &str, template: &str) -> Result<TimeUnit> {
        self.parse_template(input, &Template::parse(template)?)
    }

    /// Parse `input` with `from` and render the result with `to`
    ///
    /// Both templates are scanned before the input is looked at.
    pub fn convert(&self, input: &str, from: &str, to: &str) -> Result<String> {
        let from = Template::parse(from)?;
        let to = Template::parse(to)?;
        let value = self.parse_template(input, &from)?;
        Ok(value.format_template(&to))
    }

    fn parse_template(&self, input: &str, template: &Template) -> Result<TimeUnit> {
        parse::parse(template, input, &self.cache).map(TimeUnit::from_millis)
    }
}
