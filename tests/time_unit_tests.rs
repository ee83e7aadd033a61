//! Integration tests for formatting and parsing through the public API

use timeunit::{Formatter, TimeUnit, TimeUnitError, Unit, FORMAT_DEFAULT};

const REFERENCE: i64 = 36001433;

#[test]
fn test_default_template_round_trip() {
    for milliseconds in [0, 1, 999, 1_000, 59_999, 60_000, 3_599_999, REFERENCE, 360_000_000_123] {
        let value = TimeUnit::from_millis(milliseconds);
        let text = value.format(FORMAT_DEFAULT).unwrap();
        let back = TimeUnit::from_format(&text, FORMAT_DEFAULT).unwrap();
        assert_eq!(back, value, "round trip through {text:?}");
    }
}

#[test]
fn test_round_trip_with_other_templates() {
    let templates = ["%h:%I:%S.%V", "%i min %S.%V s", "%s.%V", "[%H] %%%I%% %S,%V"];
    for template in templates {
        for milliseconds in [0, 7, 80, 1_234, 61_001, REFERENCE] {
            let value = TimeUnit::from_millis(milliseconds);
            let text = value.format(template).unwrap();
            assert_eq!(
                TimeUnit::from_format(&text, template).unwrap(),
                value,
                "round trip through {template:?} / {text:?}"
            );
        }
    }
}

#[test]
fn test_sign_is_prefixed_once() {
    let value = TimeUnit::new(-3327, Unit::Millisecond);
    assert_eq!(value.format("%H:%I:%S.%V").unwrap(), "-00:00:03.327");
    assert_eq!(value.format("%h h %i m %s s %v ms").unwrap(), "-0 h 0 m 3 s 327 ms");
    assert_eq!(value.format("no units").unwrap(), "-no units");
}

#[test]
fn test_free_width_placeholders() {
    let value = TimeUnit::from_millis(REFERENCE);
    assert_eq!(value.format("%v").unwrap(), "36001433");
    assert_eq!(value.format("%s.%v").unwrap(), "36001.433");
    assert_eq!(value.format("%i:%s.%v").unwrap(), "600:1.433");
    assert_eq!(value.format("%h:%i:%s.%v").unwrap(), "10:0:1.433");
}

#[test]
fn test_repeated_family_formats_with_remainder_but_does_not_parse() {
    let value = TimeUnit::from_millis(REFERENCE);

    // Later occurrences only see what earlier ones left over
    assert_eq!(value.format("%H%H%H").unwrap(), "100000");

    let text = value.format("%H%H%H").unwrap();
    let err = TimeUnit::from_format(&text, "%H%H%H").unwrap_err();
    assert!(matches!(err, TimeUnitError::PatternConstruction { .. }));
    assert!(err.to_string().contains("(?P<hours>[0-9]+)(?P<hours>[0-9]+)"));
}

#[test]
fn test_percent_escaping() {
    let value = TimeUnit::from_millis(300);
    assert_eq!(value.format("%%%v%%").unwrap(), "%300%");
    assert_eq!(TimeUnit::from_format("%300%", "%%%v%%").unwrap(), value);
}

#[test]
fn test_short_millisecond_captures_are_fractions() {
    assert_eq!(TimeUnit::from_format("00.08", "%S.%v").unwrap().milliseconds(), 80);
    assert_eq!(TimeUnit::from_format("00.08", "%S.%V").unwrap().milliseconds(), 80);
    assert_eq!(TimeUnit::from_format("00.4", "%S.%V").unwrap().milliseconds(), 400);
}

#[test]
fn test_unknown_placeholder_fails_both_ways() {
    let value = TimeUnit::from_millis(REFERENCE);
    let format_err = value.format("i%nvalid format").unwrap_err();
    let parse_err = TimeUnit::from_format("10:00:01.433", "i%nvalid format").unwrap_err();

    assert!(format_err.is_malformed_template());
    assert!(parse_err.is_malformed_template());
    assert_eq!(format_err.to_string(), parse_err.to_string());
}

#[test]
fn test_parsed_values_are_never_negative() {
    assert!(TimeUnit::from_format("-00:00:03.327", FORMAT_DEFAULT).is_err());
    assert_eq!(
        TimeUnit::from_format("-00:00:03.327", "-%H:%I:%S.%V")
            .unwrap()
            .milliseconds(),
        3327
    );
}

#[test]
fn test_additive_consistency() {
    let mut value = TimeUnit::new(3, Unit::Second);
    value.add(303, Unit::Millisecond);
    assert_eq!(value.milliseconds(), 3303);

    value.add(-1, Unit::Hour);
    assert_eq!(value.milliseconds(), 3303 - 3_600_000);
}

#[test]
fn test_formatter_and_value_agree() {
    let formatter = Formatter::new(FORMAT_DEFAULT, 4).unwrap();
    let value = TimeUnit::new(42, Unit::Minute);

    assert_eq!(formatter.format(&value), value.format_default());
    assert_eq!(
        formatter.parse("00:42:00.000").unwrap(),
        TimeUnit::from_format_default("00:42:00.000").unwrap()
    );
}
