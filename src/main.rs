use anyhow::Context;
use clap::Parser;
use tracing::error;

use timeunit::cli::{execute_command, Cli};
use timeunit::config::FormatConfig;
use timeunit::formatter::Formatter;
use timeunit::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    let config = FormatConfig::load(cli.config.as_deref());
    let configured_level = config
        .as_ref()
        .ok()
        .and_then(|config| config.log_level.clone());
    init_logging(cli.verbose, configured_level.as_deref());

    let result = config
        .context("Failed to load configuration")
        .and_then(|config| Ok(Formatter::from_config(&config)?))
        .and_then(|formatter| execute_command(cli.command, &formatter));

    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            error!("Fatal error: {:#}", e);
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
