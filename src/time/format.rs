//! Rendering a millisecond count through a template
//!
//! Values are computed with a running remainder in template order, so each
//! placeholder only receives what the placeholders before it left over. A
//! template that names the same unit family twice therefore yields a smaller
//! value for the second occurrence; this is reported in the log and left as is.

use tracing::warn;

use super::template::{Segment, Template};

/// Decompose `magnitude` into one value per placeholder occurrence
pub fn decompose(template: &Template, magnitude: u64) -> Vec<u64> {
    template
        .placeholders()
        .scan(magnitude, |remaining, (_, spec)| {
            let size = spec.unit.millis().unsigned_abs();
            let value = *remaining / size;
            *remaining -= value * size;
            Some(value)
        })
        .collect()
}

/// Render a signed millisecond count
pub fn render(template: &Template, milliseconds: i64) -> String {
    let repeated = template.repeated_units();
    if !repeated.is_empty() {
        warn!(
            template = template.raw(),
            units = ?repeated,
            "template repeats a unit family, later occurrences only see the remainder"
        );
    }

    let mut values = decompose(template, milliseconds.unsigned_abs()).into_iter();
    let mut output = String::new();
    if milliseconds < 0 {
        output.push('-');
    }

    for segment in template.segments() {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Placeholder { spec, .. } => {
                // decompose yields exactly one value per placeholder
                let value = values.next().unwrap_or_default();
                output.push_str(&spec.render.render(value));
            }
        }
    }

    output
}
