//! Unified error types for chatconv.
//!
//! This module provides a single [`ChatpackError`] enum that covers all error
//! cases in the library and the binary. Every variant maps to a process exit
//! code through [`ChatpackError::exit_code`], so the CLI never has to guess
//! how a failure should be reported.
//!
//! | Category | Variants | Exit code |
//! |----------|----------|-----------|
//! | Usage | [`Usage`](ChatpackError::Usage) | 1 |
//! | I/O | [`Io`](ChatpackError::Io), [`Utf8`](ChatpackError::Utf8), [`Csv`](ChatpackError::Csv) | 2 |
//! | Parse | [`Parse`](ChatpackError::Parse) | 3 |
//! | Config | [`Config`](ChatpackError::Config), [`Json`](ChatpackError::Json) | 4 |

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatconv operations.
///
/// # Example
///
/// ```rust
/// use chatconv::error::Result;
/// use chatconv::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatpackError>;

/// Exit code for argument errors.
pub const EXIT_USAGE: i32 = 1;
/// Exit code for file-level I/O failures.
pub const EXIT_IO: i32 = 2;
/// Exit code for malformed input rejected in strict mode.
pub const EXIT_PARSE: i32 = 3;
/// Exit code for an unreadable or invalid configuration file.
pub const EXIT_CONFIG: i32 = 4;

/// The error type for all chatconv operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatpackError {
    /// The command line could not be understood.
    #[error("{message}")]
    Usage {
        /// Human-readable description (already includes clap's hint text)
        message: String,
    },

    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - The output directory cannot be created
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input file is not valid UTF-8.
    #[error("UTF-8 encoding error in {}: {source}", path.display())]
    Utf8 {
        /// File that failed to decode
        path: PathBuf,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// A line lacked the `" - "` separator and strict parsing was requested.
    #[error("Failed to parse line {line}{}: {message}", path.as_ref().map(|p| format!(" of {}", p.display())).unwrap_or_default())]
    Parse {
        /// 1-based line number
        line: usize,
        /// Description of what's wrong
        message: String,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration file failed to deserialize.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration is structurally valid JSON but semantically wrong.
    #[error("Invalid configuration{}: {message}", path.as_ref().map(|p| format!(" ({})", p.display())).unwrap_or_default())]
    Config {
        /// Description of what's wrong
        message: String,
        /// The config file, if the error came from one
        path: Option<PathBuf>,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatpackError {
    /// Creates a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        ChatpackError::Usage {
            message: message.into(),
        }
    }

    /// Creates a strict-mode parse error for the given 1-based line.
    pub fn parse(line: usize, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        ChatpackError::Parse {
            line,
            message: message.into(),
            path,
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        ChatpackError::Config {
            message: message.into(),
            path,
        }
    }

    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ChatpackError::Usage { .. } => EXIT_USAGE,
            ChatpackError::Io(_) | ChatpackError::Utf8 { .. } => EXIT_IO,
            #[cfg(feature = "csv-output")]
            ChatpackError::Csv(_) => EXIT_IO,
            ChatpackError::Parse { .. } => EXIT_PARSE,
            ChatpackError::Json(_) | ChatpackError::Config { .. } => EXIT_CONFIG,
        }
    }

    /// Returns `true` if this is a usage error.
    pub fn is_usage(&self) -> bool {
        matches!(self, ChatpackError::Usage { .. })
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatpackError::Io(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatpackError::Parse { .. })
    }

    /// Returns `true` if this is a configuration error of either kind.
    pub fn is_config(&self) -> bool {
        matches!(self, ChatpackError::Config { .. } | ChatpackError::Json(_))
    }
}
