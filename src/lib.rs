//! # chatconv
//!
//! Converts WhatsApp text chat exports into two artifacts:
//!
//! - a **CSV table** with one `Timestamp,Name,Text` row per message, and
//! - a **styled HTML transcript** with chat bubbles for the senders you map.
//!
//! ## Input format
//!
//! One message per line:
//!
//! ```text
//! 1/1/24, 10:00 AM - Aditya: Hello there
//! 1/1/24, 10:01 AM - Messages to this chat are now secured.
//! ```
//!
//! The text before the first `" - "` is the timestamp; the remainder is split
//! once on `": "` into sender and body. Lines without a sender are attributed
//! to `"Unknown"`; lines without a timestamp separator are skipped.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "html-output"))]
//! # fn main() -> chatconv::Result<()> {
//! use chatconv::prelude::*;
//! use std::path::Path;
//!
//! let outcome = ChatParser::new().parse(Path::new("chat.txt"))?;
//!
//! write_csv(&outcome.messages, "chat.csv")?;
//! write_html(&outcome.messages, "chat.html", &RenderConfig::default())?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "html-output")))]
//! # fn main() {}
//! ```
//!
//! ## Module Structure
//!
//! - [`message`]: [`Message`], the parsed record
//! - [`parser`]: [`ChatParser`](parser::ChatParser), [`parse_line`](parser::parse_line)
//! - [`config`]: [`ParserConfig`](config::ParserConfig), [`RenderConfig`](config::RenderConfig), [`RoleMap`](config::RoleMap)
//! - [`core`]: output writers and the single-pass [`convert`](core::convert) pipeline
//! - [`progress`]: progress callbacks for rendering
//! - [`error`]: [`ChatpackError`] and exit codes
//! - `cli`, `logging`: binary support (feature `cli`)

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
#[cfg(feature = "cli")]
pub mod logging;
pub mod message;
pub mod parser;
pub mod progress;

// Re-export the main types at the crate root for convenience
pub use error::{ChatpackError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatconv::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;

    pub use crate::error::{ChatpackError, Result};

    pub use crate::parser::{ChatParser, ParseOutcome, parse_line};

    pub use crate::config::{Fallback, ParserConfig, RenderConfig, RoleMap, StyleRole};

    pub use crate::progress::{Progress, ProgressCallback, no_progress};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "html-output")]
    pub use crate::core::output::{to_html, write_html};
    #[cfg(all(feature = "csv-output", feature = "html-output"))]
    pub use crate::core::processor::{ConversionPaths, ConversionStats, convert};
}
