//! Placeholder table
//!
//! Maps each placeholder symbol to the unit family it selects, how its value
//! is rendered and which digits it accepts when parsing. The table is the
//! single place where symbols are validated.

use super::unit::Unit;

/// Character introducing a placeholder; doubled to stand for itself
pub const MARKER: char = '%';

/// How a placeholder value is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderRule {
    /// Zero padded to two digits, wider values are written in full
    TwoDigits,
    /// Zero padded to three digits, used for milliseconds
    ThreeDigits,
    /// Plain decimal without padding
    Free,
}

impl RenderRule {
    pub fn render(self, value: u64) -> String {
        match self {
            RenderRule::TwoDigits => format!("{value:02}"),
            RenderRule::ThreeDigits => format!("{value:03}"),
            RenderRule::Free => value.to_string(),
        }
    }
}

/// One row of the placeholder table
#[derive(Debug, PartialEq, Eq)]
pub struct PlaceholderSpec {
    pub symbol: char,
    pub unit: Unit,
    pub render: RenderRule,
    /// Digit class accepted when parsing, without the group wrapper
    pub digits: &'static str,
}

impl PlaceholderSpec {
    /// Named capture group matching this placeholder's digits
    pub fn capture_fragment(&self) -> String {
        format!("(?P<{}>{})", self.unit.group_name(), self.digits)
    }
}

pub static PLACEHOLDERS: [PlaceholderSpec; 8] = [
    PlaceholderSpec {
        symbol: 'H',
        unit: Unit::Hour,
        render: RenderRule::TwoDigits,
        digits: "[0-9]+",
    },
    PlaceholderSpec {
        symbol: 'h',
        unit: Unit::Hour,
        render: RenderRule::Free,
        digits: "[0-9]+",
    },
    PlaceholderSpec {
        symbol: 'I',
        unit: Unit::Minute,
        render: RenderRule::TwoDigits,
        digits: "[0-9]+",
    },
    PlaceholderSpec {
        symbol: 'i',
        unit: Unit::Minute,
        render: RenderRule::Free,
        digits: "[0-9]+",
    },
    PlaceholderSpec {
        symbol: 'S',
        unit: Unit::Second,
        render: RenderRule::TwoDigits,
        digits: "[0-9]+",
    },
    PlaceholderSpec {
        symbol: 's',
        unit: Unit::Second,
        render: RenderRule::Free,
        digits: "[0-9]+",
    },
    PlaceholderSpec {
        symbol: 'V',
        unit: Unit::Millisecond,
        render: RenderRule::ThreeDigits,
        digits: "[0-9]{1,3}",
    },
    PlaceholderSpec {
        symbol: 'v',
        unit: Unit::Millisecond,
        render: RenderRule::Free,
        digits: "[0-9]+",
    },
];

/// Look up a placeholder symbol
pub fn lookup(symbol: char) -> Option<&'static PlaceholderSpec> {
    PLACEHOLDERS.iter().find(|spec| spec.symbol == symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_symbols() {
        for symbol in ['H', 'h', 'I', 'i', 'S', 's', 'V', 'v'] {
            let spec = lookup(symbol).expect("symbol should be in table");
            assert_eq!(spec.symbol, symbol);
        }
        assert_eq!(lookup('I').unwrap().unit, Unit::Minute);
        assert_eq!(lookup('v').unwrap().unit, Unit::Millisecond);
    }

    #[test]
    fn test_lookup_unknown_symbols() {
        assert!(lookup('n').is_none());
        assert!(lookup('M').is_none());
        assert!(lookup('%').is_none());
        assert!(lookup('ö').is_none());
    }

    #[test]
    fn test_two_symbols_per_family() {
        for unit in Unit::CANONICAL {
            let count = PLACEHOLDERS.iter().filter(|s| s.unit == unit).count();
            assert_eq!(count, 2, "family {unit} should have two symbols");
        }
    }

    #[test]
    fn test_render_rules() {
        assert_eq!(RenderRule::TwoDigits.render(5), "05");
        assert_eq!(RenderRule::TwoDigits.render(600), "600");
        assert_eq!(RenderRule::ThreeDigits.render(8), "008");
        assert_eq!(RenderRule::ThreeDigits.render(433), "433");
        assert_eq!(RenderRule::Free.render(0), "0");
        assert_eq!(RenderRule::Free.render(36001433), "36001433");
    }

    #[test]
    fn test_capture_fragment() {
        assert_eq!(lookup('H').unwrap().capture_fragment(), "(?P<hours>[0-9]+)");
        assert_eq!(lookup('V').unwrap().capture_fragment(), "(?P<millis>[0-9]{1,3})");
        assert_eq!(lookup('v').unwrap().capture_fragment(), "(?P<millis>[0-9]+)");
    }
}
