/// Error code registry for timeunit
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 2000-2999: Template errors
/// - 3000-3999: Parse errors
/// - 4000-4999: Value errors
#[allow(dead_code)]
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_TOML: u16 = 1002;
    pub const CONFIG_INVALID_VALUE: u16 = 1003;

    // Template errors (2000-2999)
    pub const TEMPLATE_MISSING_PLACEHOLDER: u16 = 2001;
    pub const TEMPLATE_UNKNOWN_PLACEHOLDER: u16 = 2002;

    // Parse errors (3000-3999)
    pub const PARSE_NO_MATCH: u16 = 3001;
    pub const PARSE_INVALID_PATTERN: u16 = 3002;
    pub const PARSE_VALUE_OUT_OF_RANGE: u16 = 3003;

    // Value errors (4000-4999)
    pub const VALUE_INVALID_UNIT: u16 = 4001;
    pub const VALUE_INVALID_DATETIME: u16 = 4002;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        // Configuration errors
        1000 => "Generic configuration error",
        1001 => "Configuration file not found",
        1002 => "Invalid TOML syntax in configuration",
        1003 => "Invalid value in configuration",

        // Template errors
        2001 => "Placeholder marker at end of template",
        2002 => "Unknown placeholder symbol in template",

        // Parse errors
        3001 => "Input does not match the template",
        3002 => "Template produced an invalid extraction pattern",
        3003 => "Captured value does not fit in a millisecond count",

        // Value errors
        4001 => "Unknown time unit name",
        4002 => "Invalid date/time value",

        _ => "Unknown error code",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_descriptions() {
        assert_eq!(
            describe_error_code(ErrorCode::TEMPLATE_UNKNOWN_PLACEHOLDER),
            "Unknown placeholder symbol in template"
        );
        assert_eq!(
            describe_error_code(ErrorCode::PARSE_NO_MATCH),
            "Input does not match the template"
        );
        assert_eq!(describe_error_code(9999), "Unknown error code");
    }

    #[test]
    fn test_error_code_ranges() {
        assert!((1000..2000).contains(&ErrorCode::CONFIG_INVALID_TOML));
        assert!((2000..3000).contains(&ErrorCode::TEMPLATE_MISSING_PLACEHOLDER));
        assert!((3000..4000).contains(&ErrorCode::PARSE_INVALID_PATTERN));
        assert!((4000..5000).contains(&ErrorCode::VALUE_INVALID_UNIT));
    }
}
