//! # timeunit
//!
//! Millisecond durations rendered and parsed through small `%`-placeholder
//! templates such as `%H:%I:%S.%V`.
//!
//! ```
//! use timeunit::{TimeUnit, Unit};
//!
//! let mut elapsed = TimeUnit::new(3, Unit::Second);
//! elapsed.add(303, Unit::Millisecond);
//! assert_eq!(elapsed.format("%H:%I:%S.%V").unwrap(), "00:00:03.303");
//!
//! let parsed = TimeUnit::from_format("00:00:03.303", "%H:%I:%S.%V").unwrap();
//! assert_eq!(parsed, elapsed);
//! ```
//!
//! ## Modules
//!
//! - `time` - Duration value, placeholder table, template scanning, formatting and parsing
//! - `formatter` - Formatter bound to a configured default template and pattern cache
//! - `datetime` - Calendar date/time with RFC 3339 string and JSON forms
//! - `config` - Configuration loading from TOML and environment
//! - `error` - Error type and error codes
//! - `cli` - Command line interface
//! - `logging` - Tracing setup for the command line tool
pub mod cli;
pub mod config;
pub mod datetime;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod time;

pub use datetime::DateTime;
pub use error::{Result, TimeUnitError};
pub use formatter::Formatter;
pub use time::{Template, TimeUnit, Unit, FORMAT_DEFAULT, FORMAT_H_I_S_V_FREE};
