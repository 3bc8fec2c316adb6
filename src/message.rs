//! The record type produced by the parser.
//!
//! One [`Message`] is built per accepted input line and holds the three raw
//! text fields of the export line:
//!
//! ```text
//! 1/1/24, 10:00 AM - Aditya: Hello there
//! ^^^^^^^^^^^^^^^^   ^^^^^^  ^^^^^^^^^^^
//!    timestamp       sender     body
//! ```
//!
//! # Example
//!
//! ```
//! use chatconv::Message;
//!
//! let msg = Message::new("1/1/24, 10:00 AM", "Aditya", "Hello there");
//! assert_eq!(msg.sender(), "Aditya");
//! assert_eq!(msg.body(), "Hello there");
//! ```

use serde::{Deserialize, Serialize};

/// Sender used when a line carries no `": "` separator.
pub const UNKNOWN_SENDER: &str = "Unknown";

/// One parsed chat line.
///
/// | Field | Description |
/// |-------|-------------|
/// | `timestamp` | Text before the first `" - "`, unvalidated |
/// | `sender` | Text before the first `": "` of the remainder, or [`UNKNOWN_SENDER`] |
/// | `body` | Everything else, verbatim |
///
/// The timestamp is kept as written in the export. Export locales disagree on
/// date order and clock style, and neither output needs a parsed date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// Raw timestamp token, e.g. `1/1/24, 10:00 AM`.
    pub timestamp: String,

    /// Display name of the author.
    pub sender: String,

    /// Message text. May itself contain `" - "` or `": "`.
    pub body: String,
}

impl Message {
    /// Creates a message from its three fields.
    pub fn new(
        timestamp: impl Into<String>,
        sender: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            sender: sender.into(),
            body: body.into(),
        }
    }

    /// Creates a message attributed to [`UNKNOWN_SENDER`].
    ///
    /// ```
    /// use chatconv::Message;
    ///
    /// let msg = Message::unattributed("1/1/24, 10:01 AM", "Messages to this chat are now secured.");
    /// assert!(msg.is_unattributed());
    /// ```
    pub fn unattributed(timestamp: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(timestamp, UNKNOWN_SENDER, body)
    }

    /// Returns the raw timestamp.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns `true` if the sender is the [`UNKNOWN_SENDER`] sentinel.
    pub fn is_unattributed(&self) -> bool {
        self.sender == UNKNOWN_SENDER
    }

    /// Returns the fields in CSV column order.
    pub fn as_record(&self) -> [&str; 3] {
        [&self.timestamp, &self.sender, &self.body]
    }
}
