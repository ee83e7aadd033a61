//! Millisecond durations and their placeholder templates
//!
//! A template such as `%H:%I:%S.%V` mixes literal text with placeholders
//! introduced by `%`:
//!
//! | placeholder | unit        | rendering            |
//! |-------------|-------------|----------------------|
//! | `%H` / `%h` | hours       | two digits / plain   |
//! | `%I` / `%i` | minutes     | two digits / plain   |
//! | `%S` / `%s` | seconds     | two digits / plain   |
//! | `%V` / `%v` | milliseconds| three digits / plain |
//!
//! `%%` stands for a literal `%`.

pub mod duration;
pub mod format;
pub mod parse;
pub mod placeholder;
pub mod template;
pub mod unit;

pub use duration::{TimeUnit, FORMAT_DEFAULT, FORMAT_H_I_S_V_FREE};
pub use parse::PatternCache;
pub use placeholder::{PlaceholderSpec, RenderRule, MARKER};
pub use template::{Segment, Template};
pub use unit::Unit;
