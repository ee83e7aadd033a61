//! Command routing and execution

use anyhow::{Context, Result};
use serde_json::json;
use tracing::info;

use crate::cli::args::Commands;
use crate::formatter::Formatter;
use crate::time::TimeUnit;

/// Execute a command and return what should be printed on stdout
pub fn execute_command(command: Commands, formatter: &Formatter) -> Result<String> {
    match command {
        Commands::Format {
            value,
            unit,
            template,
        } => {
            let duration = TimeUnit::new(value, unit);
            info!("Formatting {} ms", duration.milliseconds());
            match template {
                Some(template) => formatter
                    .format_with(&duration, &template)
                    .with_context(|| format!("Failed to format with template {template:?}")),
                None => Ok(formatter.format(&duration)),
            }
        }
        Commands::Parse {
            input,
            template,
            json,
        } => {
            let template_str = template
                .as_deref()
                .unwrap_or_else(|| formatter.default_template().raw());
            let duration = formatter
                .parse_with(&input, template_str)
                .with_context(|| format!("Failed to parse {input:?}"))?;
            info!("Parsed {:?} to {} ms", input, duration.milliseconds());

            if json {
                let output = json!({
                    "input": input,
                    "template": template_str,
                    "milliseconds": duration,
                });
                Ok(serde_json::to_string(&output)?)
            } else {
                Ok(duration.to_string())
            }
        }
        Commands::Convert { input, from, to } => {
            let from = from
                .as_deref()
                .unwrap_or_else(|| formatter.default_template().raw());
            formatter
                .convert(&input, from, &to)
                .with_context(|| format!("Failed to convert {input:?}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Unit;

    fn formatter() -> Formatter {
        Formatter::new("%H:%I:%S.%V", 8).unwrap()
    }

    #[test]
    fn test_format_command() {
        let output = execute_command(
            Commands::Format {
                value: 3,
                unit: Unit::Second,
                template: None,
            },
            &formatter(),
        )
        .unwrap();
        assert_eq!(output, "00:00:03.000");

        let output = execute_command(
            Commands::Format {
                value: -3327,
                unit: Unit::Millisecond,
                template: Some("%s.%v".to_string()),
            },
            &formatter(),
        )
        .unwrap();
        assert_eq!(output, "-3.327");
    }

    #[test]
    fn test_parse_command_json() {
        let output = execute_command(
            Commands::Parse {
                input: "10:00:01.433".to_string(),
                template: None,
                json: true,
            },
            &formatter(),
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["milliseconds"], 36001433);
        assert_eq!(value["template"], "%H:%I:%S.%V");
    }

    #[test]
    fn test_parse_command_error_keeps_cause() {
        let err = execute_command(
            Commands::Parse {
                input: "1:2".to_string(),
                template: None,
                json: false,
            },
            &formatter(),
        )
        .unwrap_err();

        assert!(err.to_string().contains("Failed to parse"));
        let cause = err.root_cause().to_string();
        assert!(cause.contains("[E3001]"), "unexpected cause: {cause}");
    }

    #[test]
    fn test_convert_command() {
        let output = execute_command(
            Commands::Convert {
                input: "10:00:01.433".to_string(),
                from: None,
                to: "%i:%s.%v".to_string(),
            },
            &formatter(),
        )
        .unwrap();
        assert_eq!(output, "600:1.433");
    }
}
