//! Output format writers.
//!
//! - [`write_csv`] / [`to_csv`] - tabular record, one row per message - requires `csv-output` feature
//! - [`write_html`] / [`to_html`] - styled chat transcript - requires `html-output` feature
//!
//! Both writers build the whole document in memory and write it with a single
//! call, creating missing parent directories of the destination first.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "html-output"))]
//! # fn main() -> chatconv::Result<()> {
//! use chatconv::Message;
//! use chatconv::config::RenderConfig;
//! use chatconv::core::output::{write_csv, write_html};
//!
//! let messages = vec![
//!     Message::new("1/1/24, 10:00 AM", "Aditya", "Hello there"),
//!     Message::new("1/1/24, 10:01 AM", "Ronak", "Hi!"),
//! ];
//!
//! write_csv(&messages, "out/chat.csv")?;
//! write_html(&messages, "out/chat.html", &RenderConfig::default())?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "html-output")))]
//! # fn main() {}
//! ```

use std::fs;
use std::io;
use std::path::Path;

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "html-output")]
mod html_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{CSV_HEADER, to_csv, write_csv};
#[cfg(feature = "html-output")]
pub use html_writer::{
    RenderStats, escape_html, to_html, to_html_with_progress, write_html,
    write_html_with_progress,
};

/// Creates the parent directory of `path` if it has one and it is missing.
#[allow(dead_code)]
pub(crate) fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
