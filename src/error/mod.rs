use thiserror::Error;

use crate::time::Unit;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TimeUnitError>;

/// The unified error type for duration formatting and parsing
#[derive(Error, Debug)]
pub enum TimeUnitError {
    #[error(
        "[E2001] Invalid format string (placeholder <%> at offset {offset} is not allowed - please use %% for a % sign)"
    )]
    MissingPlaceholder { offset: usize },

    #[error("[E2002] Invalid format string (placeholder <%{symbol}> at offset {offset} is not allowed)")]
    UnknownPlaceholder { symbol: char, offset: usize },

    #[error("[E3001] Invalid format string (no match for <{input}> or invalid pattern <{pattern}>)")]
    NoMatch { pattern: String, input: String },

    #[error("[E3002] Invalid format string (no match or invalid pattern <{pattern}>)")]
    PatternConstruction {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("[E3003] Captured {family} value <{digits}> is out of range")]
    ValueOutOfRange { family: Unit, digits: String },

    #[error("[E4001] Unknown time unit <{0}>")]
    InvalidUnit(String),

    #[error("[E4002] Invalid date/time <{input}>")]
    InvalidDateTime {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl TimeUnitError {
    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::config_with_code(ErrorCode::CONFIG_GENERIC, message)
    }

    /// Create a configuration error with specific code
    pub fn config_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach a source error. Only configuration errors carry a boxed source;
    /// other variants are returned unchanged.
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        if let Self::Config { source: src, .. } = &mut self {
            *src = Some(source.into());
        }
        self
    }

    /// Get the numeric error code
    pub fn code(&self) -> u16 {
        match self {
            Self::MissingPlaceholder { .. } => ErrorCode::TEMPLATE_MISSING_PLACEHOLDER,
            Self::UnknownPlaceholder { .. } => ErrorCode::TEMPLATE_UNKNOWN_PLACEHOLDER,
            Self::NoMatch { .. } => ErrorCode::PARSE_NO_MATCH,
            Self::PatternConstruction { .. } => ErrorCode::PARSE_INVALID_PATTERN,
            Self::ValueOutOfRange { .. } => ErrorCode::PARSE_VALUE_OUT_OF_RANGE,
            Self::InvalidUnit(_) => ErrorCode::VALUE_INVALID_UNIT,
            Self::InvalidDateTime { .. } => ErrorCode::VALUE_INVALID_DATETIME,
            Self::Config { code, .. } => *code,
        }
    }

    /// Human-readable description of the error category
    pub fn description(&self) -> &'static str {
        describe_error_code(self.code())
    }

    /// Whether the template itself was rejected while scanning
    pub fn is_malformed_template(&self) -> bool {
        matches!(
            self,
            Self::MissingPlaceholder { .. } | Self::UnknownPlaceholder { .. }
        )
    }

    /// Whether the failure happened while matching an input against a template
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            Self::NoMatch { .. } | Self::PatternConstruction { .. } | Self::ValueOutOfRange { .. }
        )
    }

    /// The extraction pattern involved in a parse failure, if any
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Self::NoMatch { pattern, .. } | Self::PatternConstruction { pattern, .. } => {
                Some(pattern)
            }
            _ => None,
        }
    }
}
