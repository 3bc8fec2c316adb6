//! Single-pass conversion pipeline.
//!
//! The export is parsed once and the resulting records are handed to both
//! writers, CSV first and HTML second.

use std::path::Path;

use tracing::info;

use crate::config::{ParserConfig, RenderConfig};
use crate::error::Result;
use crate::parser::ChatParser;
use crate::progress::ProgressCallback;

use super::output::{write_csv, write_html_with_progress};

/// Counts gathered over one conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Records parsed from the export (= CSV data rows).
    pub parsed: usize,
    /// Non-blank lines dropped for lacking a `" - "` separator.
    pub skipped_lines: usize,
    /// Records that produced an HTML bubble.
    pub rendered: usize,
    /// Records left out of the HTML by the fallback policy.
    pub dropped: usize,
}

impl ConversionStats {
    /// Share of parsed records that appear in the HTML transcript, in percent.
    #[allow(clippy::cast_precision_loss)]
    pub fn coverage(&self) -> f64 {
        if self.parsed == 0 {
            return 0.0;
        }
        (self.rendered as f64 / self.parsed as f64) * 100.0
    }
}

/// Input and output locations for [`convert`].
#[derive(Debug, Clone, Copy)]
pub struct ConversionPaths<'a> {
    pub input: &'a Path,
    pub csv: &'a Path,
    pub html: &'a Path,
}

/// Parses `paths.input` once and writes both the CSV and the HTML output.
///
/// The first failure aborts the run. A CSV written before an HTML failure is
/// left in place.
pub fn convert(
    paths: ConversionPaths<'_>,
    parser_config: &ParserConfig,
    render_config: &RenderConfig,
    progress: &ProgressCallback,
) -> Result<ConversionStats> {
    let parser = ChatParser::with_config(parser_config.clone());

    info!(input = %paths.input.display(), "parsing export");
    let outcome = parser.parse(paths.input)?;

    write_csv(&outcome.messages, paths.csv)?;
    let render = write_html_with_progress(&outcome.messages, paths.html, render_config, progress)?;

    Ok(ConversionStats {
        parsed: outcome.messages.len(),
        skipped_lines: outcome.skipped,
        rendered: render.rendered,
        dropped: render.dropped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::no_progress;
    use std::fs;

    const EXPORT: &str = "\
1/1/24, 10:00 AM - Aditya: Hello there
1/1/24, 10:01 AM - Messages to this chat are now secured.
1/1/24, 10:02 AM - Ronak: Hi!
a stray continuation line
";

    #[test]
    fn test_convert_writes_both_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("chat.txt");
        let csv = dir.path().join("chat.csv");
        let html = dir.path().join("html").join("chat.html");
        fs::write(&input, EXPORT).unwrap();

        let stats = convert(
            ConversionPaths {
                input: &input,
                csv: &csv,
                html: &html,
            },
            &ParserConfig::default(),
            &RenderConfig::default(),
            &no_progress(),
        )
        .unwrap();

        assert_eq!(
            stats,
            ConversionStats {
                parsed: 3,
                skipped_lines: 1,
                rendered: 2,
                dropped: 1,
            }
        );
        assert_eq!(fs::read_to_string(&csv).unwrap().lines().count(), 4);
        assert!(fs::read_to_string(&html).unwrap().contains("Hello there"));
    }

    #[test]
    fn test_convert_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("chat.csv");
        let html = dir.path().join("chat.html");

        let err = convert(
            ConversionPaths {
                input: &dir.path().join("missing.txt"),
                csv: &csv,
                html: &html,
            },
            &ParserConfig::default(),
            &RenderConfig::default(),
            &no_progress(),
        )
        .unwrap_err();

        assert!(err.is_io());
        assert!(!csv.exists());
        assert!(!html.exists());
    }

    #[test]
    fn test_coverage() {
        let stats = ConversionStats {
            parsed: 4,
            rendered: 1,
            ..ConversionStats::default()
        };
        assert!((stats.coverage() - 25.0).abs() < f64::EPSILON);
        assert!(ConversionStats::default().coverage().abs() < f64::EPSILON);
    }
}
