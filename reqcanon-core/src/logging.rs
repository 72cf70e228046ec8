use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system with JSON formatting and environment-based filtering
///
/// - Uses `RUST_LOG` for filtering (defaults to "info" if not set)
/// - Writes to stderr; stdout carries command output only
/// - Flattens event fields for cleaner log output
pub fn init_logging() {
    init_logging_with_mode(LogMode::Raw);
}

/// Like [`init_logging`], with human-readable output in [`LogMode::Pretty`].
pub fn init_logging_with_mode(mode: LogMode) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = match mode {
        LogMode::Raw => builder.json().flatten_event(true).try_init(),
        LogMode::Pretty => builder.pretty().try_init(),
    };
}

pub fn default_log_mode() -> LogMode {
    if io::stderr().is_terminal() {
        LogMode::Pretty
    } else {
        LogMode::Raw
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    Raw,
    Pretty,
}
