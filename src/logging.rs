//! Logging set-up for the binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the application. The CLI calls [`init_logging`] once at start-up.

use std::env;
use std::io::{self, IsTerminal};

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the computed filter.
pub const LOG_ENV: &str = "RUST_LOG";

/// Logging configuration for the chatconv binary.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Maximum level emitted when `RUST_LOG` is unset
    pub level: Level,
    /// Whether to use ANSI colors (default: stderr is a terminal)
    pub use_colors: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            use_colors: io::stderr().is_terminal(),
        }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps a `-v` count to a level: 0 warn, 1 info, 2 debug, 3+ trace.
    pub fn from_verbosity(verbose: u8) -> Self {
        let level = match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            ..Self::default()
        }
    }

    /// Enable/disable ANSI colors
    #[must_use]
    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.use_colors = enabled;
        self
    }

    fn filter(&self) -> EnvFilter {
        match env::var(LOG_ENV) {
            Ok(spec) if !spec.trim().is_empty() => EnvFilter::new(spec),
            _ => EnvFilter::new(self.level.as_str().to_lowercase()),
        }
    }
}

/// Installs a stderr `fmt` subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(config: &LoggingConfig) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_writer(io::stderr)
        .with_ansi(config.use_colors)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(level = %config.level, "logging initialized");
    }
}
