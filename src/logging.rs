//! Logging configuration and initialization

use tracing::{debug, trace};

/// Filter directive for a `-v` count
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing for the command line tool
///
/// A configured level wins over the verbosity flag when no `-v` was given.
/// Logs go to stderr so formatted output on stdout stays clean.
pub fn init_logging(verbose: u8, configured: Option<&str>) {
    let filter = match configured {
        Some(level) if verbose == 0 => level.to_string(),
        _ => log_level(verbose).to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2) // Show target module for -vv and above
        .with_thread_ids(verbose >= 3) // Show thread IDs for -vvv
        .with_line_number(verbose >= 3) // Show line numbers for -vvv
        .init();

    debug!("timeunit started with verbosity level: {}", verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}
