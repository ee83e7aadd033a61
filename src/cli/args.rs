//! CLI argument structures

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::time::Unit;

/// Format and parse millisecond durations with %-placeholder templates
#[derive(Parser, Debug)]
#[command(name = "timeunit")]
#[command(about = "timeunit - Format and parse durations with %-placeholder templates", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a duration through a template
    Format {
        /// Duration amount, may be negative
        #[arg(allow_negative_numbers = true)]
        value: i64,

        /// Unit of the amount (ms, s, m, h)
        #[arg(short, long, default_value = "ms")]
        unit: Unit,

        /// Template, e.g. "%H:%I:%S.%V" (defaults to the configured template)
        #[arg(short, long)]
        template: Option<String>,
    },

    /// Parse a formatted duration back into milliseconds
    Parse {
        /// Text to parse
        input: String,

        /// Template the input was written with
        #[arg(short, long)]
        template: Option<String>,

        /// Print a JSON object instead of the bare millisecond count
        #[arg(long)]
        json: bool,
    },

    /// Re-render a formatted duration with another template
    Convert {
        /// Text to convert
        input: String,

        /// Template the input was written with (defaults to the configured template)
        #[arg(long)]
        from: Option<String>,

        /// Template to render with
        #[arg(long)]
        to: String,
    },
}
