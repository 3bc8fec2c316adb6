//! Core processing logic for chatconv.
//!
//! This module contains:
//! - [`output`] - Format writers (CSV, HTML)
//! - [`processor`] - The parse-once, write-twice pipeline

pub mod output;
#[cfg(all(feature = "csv-output", feature = "html-output"))]
pub mod processor;

// Re-export the record type from the crate root
pub use crate::Message;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "html-output")]
pub use output::{to_html, write_html};

#[cfg(all(feature = "csv-output", feature = "html-output"))]
pub use processor::{ConversionPaths, ConversionStats, convert};
