//! Line parser for WhatsApp-style text exports.
//!
//! Each accepted line has the shape
//!
//! ```text
//! <timestamp> - [<sender>: ]<body>
//! ```
//!
//! The line is trimmed, split once on `" - "` and the remainder is split once
//! on `": "`. Only the first occurrence of each separator is significant, so
//! bodies keep any later `" - "` or `": "` verbatim. A line with no `": "`
//! after the timestamp is attributed to the unknown sender (encryption
//! notices, "X added Y" and similar system lines).
//!
//! Lines may end in `\n`, `\r\n` or a bare `\r`.
//!
//! # Example
//!
//! ```rust
//! use chatconv::parser::ChatParser;
//!
//! let parser = ChatParser::new();
//! let outcome = parser.parse_str("1/1/24, 10:00 AM - Aditya: Hello there\nnoise\n")?;
//!
//! assert_eq!(outcome.messages.len(), 1);
//! assert_eq!(outcome.messages[0].sender, "Aditya");
//! assert_eq!(outcome.skipped, 1);
//! # Ok::<(), chatconv::ChatpackError>(())
//! ```

use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::Message;
use crate::config::ParserConfig;
use crate::error::{ChatpackError, Result};
use crate::message::UNKNOWN_SENDER;

/// Separator between the timestamp and the rest of the line.
pub const TIMESTAMP_SEPARATOR: &str = " - ";
/// Separator between the sender and the body.
pub const SENDER_SEPARATOR: &str = ": ";

/// Parses one line with the default unknown-sender label.
///
/// Returns `None` for blank lines and lines without `" - "`.
///
/// ```rust
/// use chatconv::parser::parse_line;
///
/// let msg = parse_line("1/1/24, 10:01 AM - Messages to this chat are now secured.").unwrap();
/// assert_eq!(msg.sender, "Unknown");
/// assert!(parse_line("just some text").is_none());
/// ```
pub fn parse_line(line: &str) -> Option<Message> {
    split_line(line, UNKNOWN_SENDER)
}

fn split_line(line: &str, unknown_sender: &str) -> Option<Message> {
    let (timestamp, message) = line.trim().split_once(TIMESTAMP_SEPARATOR)?;

    let msg = match message.split_once(SENDER_SEPARATOR) {
        Some((sender, body)) => Message::new(timestamp, sender, body),
        None => Message::new(timestamp, unknown_sender, message),
    };
    Some(msg)
}

/// Splits on `\n`, `\r\n` and a bare `\r`.
///
/// Like [`str::lines`], a trailing line break does not produce an empty
/// final line.
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let line = match rest.find(['\r', '\n']) {
            Some(idx) => {
                let line = &rest[..idx];
                let break_len = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + break_len..];
                line
            }
            None => std::mem::take(&mut rest),
        };
        Some(line)
    })
}

/// Result of parsing a whole export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Records in input order.
    pub messages: Vec<Message>,
    /// Non-blank lines dropped for lacking the `" - "` separator.
    pub skipped: usize,
}

/// Parser for WhatsApp text exports.
///
/// # Example
///
/// ```rust,no_run
/// use chatconv::parser::ChatParser;
/// use std::path::Path;
///
/// let parser = ChatParser::new();
/// let outcome = parser.parse(Path::new("whatsapp_chat.txt"))?;
/// println!("{} messages", outcome.messages.len());
/// # Ok::<(), chatconv::ChatpackError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChatParser {
    config: ParserConfig,
}

impl ChatParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads and parses an export file.
    ///
    /// Fails only on I/O errors, invalid UTF-8, or (in strict mode) the first
    /// line without a separator.
    pub fn parse(&self, path: &Path) -> Result<ParseOutcome> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes).map_err(|source| ChatpackError::Utf8 {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_lines(&content, Some(path))
    }

    /// Parses export content already held in memory.
    pub fn parse_str(&self, content: &str) -> Result<ParseOutcome> {
        self.parse_lines(content, None)
    }

    fn parse_lines(&self, content: &str, path: Option<&Path>) -> Result<ParseOutcome> {
        let mut outcome = ParseOutcome::default();

        for (idx, line) in split_lines(content).enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            match split_line(line, &self.config.unknown_sender) {
                Some(msg) => {
                    trace!(line = idx + 1, sender = %msg.sender, "parsed message");
                    outcome.messages.push(msg);
                }
                None if self.config.skip_invalid => {
                    debug!(line = idx + 1, "skipping line without ' - ' separator");
                    outcome.skipped += 1;
                }
                None => {
                    return Err(ChatpackError::parse(
                        idx + 1,
                        "expected '<timestamp> - <message>'",
                        path.map(Path::to_path_buf),
                    ));
                }
            }
        }

        debug!(
            messages = outcome.messages.len(),
            skipped = outcome.skipped,
            "parsed export"
        );
        Ok(outcome)
    }
}
