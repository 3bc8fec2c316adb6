//! Command-line interface definition using clap.
//!
//! [`Args`] holds the raw flags; [`Args::parser_config`] and
//! [`Args::render_config`] turn them into library configuration so that
//! `main.rs` only wires things together.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::config::{Fallback, ParserConfig, RenderConfig, StyleRole};
use crate::error::{ChatpackError, Result};

/// Convert a WhatsApp text export into a CSV table and a styled HTML transcript.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatconv")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatconv chat.txt chat.csv chat.html
    chatconv chat.txt out/chat.csv out/chat.html --me Alice --other Bob
    chatconv chat.txt chat.csv chat.html --config roles.json --timestamps
    chatconv chat.txt chat.csv chat.html --fallback other --progress")]
pub struct Args {
    /// Path to the WhatsApp .txt export
    pub input: PathBuf,

    /// Path of the CSV file to write
    pub csv_output: PathBuf,

    /// Path of the HTML file to write (parent directories are created)
    pub html_output: PathBuf,

    /// JSON file with render settings (roles, fallback, title, ...)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Sender rendered on the "me" side (repeatable)
    #[arg(long, value_name = "NAME")]
    pub me: Vec<String>,

    /// Sender rendered on the "other" side (repeatable)
    #[arg(long, value_name = "NAME")]
    pub other: Vec<String>,

    /// What to do with senders that have no role: drop, me, other
    #[arg(long, value_name = "POLICY")]
    pub fallback: Option<Fallback>,

    /// Title of the HTML document
    #[arg(long)]
    pub title: Option<String>,

    /// Show each message's timestamp in the HTML transcript
    #[arg(short = 't', long)]
    pub timestamps: bool,

    /// Embed message bodies without HTML escaping
    #[arg(long)]
    pub raw_html: bool,

    /// Fail on lines that lack the " - " separator instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Print rendering progress to stderr
    #[arg(long)]
    pub progress: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// What the command line asks the binary to do.
#[derive(Debug)]
pub enum Invocation {
    /// Convert with the given arguments.
    Run(Args),
    /// Print help or version text to stdout and exit 0.
    Info(clap::Error),
}

/// Reads the command line.
///
/// `-h`/`--help` and `-V`/`--version` must be the only argument; anything
/// clap rejects, or an info flag mixed with other arguments, becomes
/// [`ChatpackError::Usage`].
pub fn parse_invocation<I, T>(argv: I) -> Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();

    match Args::try_parse_from(&argv) {
        Ok(args) => Ok(Invocation::Run(args)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            if argv.len() > 2 {
                let flag = if e.kind() == ErrorKind::DisplayHelp {
                    "--help"
                } else {
                    "--version"
                };
                return Err(ChatpackError::usage(format!(
                    "error: {} takes no other arguments\n\n{}\n",
                    flag,
                    Args::command().render_usage()
                )));
            }
            Ok(Invocation::Info(e))
        }
        Err(e) => Err(ChatpackError::usage(e.render().to_string())),
    }
}

impl Args {
    /// Builds the parser configuration from the flags.
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new().with_skip_invalid(!self.strict)
    }

    /// Builds the render configuration.
    ///
    /// Starts from `--config` (or the defaults), then applies the individual
    /// flags on top. Naming the same sender in both `--me` and `--other` is a
    /// usage error.
    pub fn render_config(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::from_file(path)?,
            None => RenderConfig::default(),
        };

        if let Some(name) = self.me.iter().find(|name| self.other.contains(*name)) {
            return Err(ChatpackError::usage(format!(
                "sender '{}' was given both --me and --other",
                name
            )));
        }
        if let Some(name) = self.me.iter().chain(&self.other).find(|n| n.trim().is_empty()) {
            return Err(ChatpackError::usage(format!(
                "sender name '{}' must not be empty",
                name
            )));
        }

        for name in &self.me {
            config.roles.assign(name.clone(), StyleRole::Me);
        }
        for name in &self.other {
            config.roles.assign(name.clone(), StyleRole::Other);
        }

        if let Some(fallback) = self.fallback {
            config.fallback = fallback;
        }
        if let Some(title) = &self.title {
            config.title.clone_from(title);
        }
        if self.timestamps {
            config.include_timestamps = true;
        }
        if self.raw_html {
            config.escape_html = false;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> std::result::Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("chatconv").chain(args.iter().copied()))
    }

    #[test]
    fn test_positional_arguments() {
        let args = parse(&["in.txt", "out.csv", "out.html"]).unwrap();
        assert_eq!(args.input, PathBuf::from("in.txt"));
        assert_eq!(args.csv_output, PathBuf::from("out.csv"));
        assert_eq!(args.html_output, PathBuf::from("out.html"));
    }

    #[test]
    fn test_wrong_argument_count() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["in.txt", "out.csv"]).is_err());
        assert!(parse(&["a", "b", "c", "d"]).is_err());
    }

    #[test]
    fn test_help_is_display_help() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        let err = parse(&["-h"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_invocation_help_alone() {
        let invocation = parse_invocation(["chatconv", "-h"]).unwrap();
        assert!(matches!(invocation, Invocation::Info(_)));
        let invocation = parse_invocation(["chatconv", "--version"]).unwrap();
        assert!(matches!(invocation, Invocation::Info(_)));
    }

    #[test]
    fn test_invocation_help_with_extra_arguments_is_usage_error() {
        let err = parse_invocation(["chatconv", "-h", "extra"]).unwrap_err();
        assert!(err.is_usage());
        assert!(err.to_string().contains("--help takes no other arguments"));
        assert!(err.to_string().contains("Usage:"));

        let err = parse_invocation(["chatconv", "in.txt", "out.csv", "out.html", "--help"])
            .unwrap_err();
        assert_eq!(err.exit_code(), 1);

        let err = parse_invocation(["chatconv", "--version", "x"]).unwrap_err();
        assert!(err.to_string().contains("--version takes no other arguments"));
    }

    #[test]
    fn test_invocation_run_and_clap_errors() {
        let invocation = parse_invocation(["chatconv", "in.txt", "out.csv", "out.html"]).unwrap();
        assert!(matches!(invocation, Invocation::Run(_)));

        let err = parse_invocation(["chatconv", "in.txt"]).unwrap_err();
        assert!(err.is_usage());
    }

    #[test]
    fn test_default_configs() {
        let args = parse(&["in.txt", "out.csv", "out.html"]).unwrap();
        assert_eq!(args.parser_config(), ParserConfig::default());
        assert_eq!(args.render_config().unwrap(), RenderConfig::default());
    }

    #[test]
    fn test_role_flags_extend_defaults() {
        let args = parse(&[
            "in.txt", "out.csv", "out.html", "--me", "Alice", "--other", "Bob", "--other", "Carol",
        ])
        .unwrap();
        let config = args.render_config().unwrap();
        assert_eq!(config.placement("Alice"), Some(StyleRole::Me));
        assert_eq!(config.placement("Bob"), Some(StyleRole::Other));
        assert_eq!(config.placement("Carol"), Some(StyleRole::Other));
        assert_eq!(config.placement("Aditya"), Some(StyleRole::Me));
    }

    #[test]
    fn test_conflicting_roles_is_usage_error() {
        let args = parse(&["in.txt", "out.csv", "out.html", "--me", "Al", "--other", "Al"]).unwrap();
        let err = args.render_config().unwrap_err();
        assert!(err.is_usage());
    }

    #[test]
    fn test_rendering_flags() {
        let args = parse(&[
            "in.txt",
            "out.csv",
            "out.html",
            "--fallback",
            "other",
            "--title",
            "Trip",
            "-t",
            "--raw-html",
            "--strict",
        ])
        .unwrap();
        let config = args.render_config().unwrap();
        assert_eq!(config.fallback, Fallback::Other);
        assert_eq!(config.title, "Trip");
        assert!(config.include_timestamps);
        assert!(!config.escape_html);
        assert!(!args.parser_config().skip_invalid);
    }

    #[test]
    fn test_invalid_fallback_rejected() {
        assert!(parse(&["in.txt", "out.csv", "out.html", "--fallback", "left"]).is_err());
    }

    #[test]
    fn test_verbosity_count() {
        let args = parse(&["in.txt", "out.csv", "out.html", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }
}
