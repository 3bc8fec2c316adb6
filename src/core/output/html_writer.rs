//! HTML transcript writer.
//!
//! Produces a self-contained page with an inline dark stylesheet. Every
//! message whose sender resolves to a [`StyleRole`] becomes one bubble:
//!
//! ```html
//! <div class="message me"><div class="message-body">Hello there</div></div>
//! ```
//!
//! Senders without a role are handled by [`RenderConfig::fallback`]; with the
//! default policy they are left out of the page.

use std::fs;
use std::path::Path;

use crate::Message;
use crate::config::{RenderConfig, StyleRole};
use crate::error::Result;
use crate::progress::{Progress, ProgressCallback, no_progress};

use super::ensure_parent_dir;

const STYLE: &str = r"body {
    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    background-color: #121212;
    color: #ffffff;
    margin: 0;
    padding: 0;
}
.chat-container {
    width: 100%;
    max-width: 600px;
    margin: 20px auto;
}
.message {
    padding: 10px 15px;
    margin: 5px 0;
    border-radius: 10px;
    max-width: 70%;
    word-wrap: break-word;
}
.message.me {
    background-color: #303030;
    align-self: flex-end;
    margin-left: auto;
}
.message.other {
    background-color: #424242;
    align-self: flex-start;
    margin-right: auto;
}
.message-body {
    font-size: 14px;
    line-height: 1.5;
}
.message-time {
    font-size: 12px;
    color: #999999;
}
";

const CLOSING: &str = "</div>\n</body>\n</html>\n";

/// Counts from one rendering pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Messages that produced a bubble.
    pub rendered: usize,
    /// Messages left out by the fallback policy.
    pub dropped: usize,
}

/// Escapes the five HTML-significant characters.
///
/// ```rust
/// use chatconv::core::output::escape_html;
///
/// assert_eq!(escape_html("<b>&\"'"), "&lt;b&gt;&amp;&quot;&#39;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Renders messages to an HTML string.
pub fn to_html(messages: &[Message], config: &RenderConfig) -> String {
    render(messages, config, &no_progress()).0
}

/// Renders messages to an HTML string, reporting progress once per message.
pub fn to_html_with_progress(
    messages: &[Message],
    config: &RenderConfig,
    progress: &ProgressCallback,
) -> String {
    render(messages, config, progress).0
}

/// Writes the HTML transcript to a file.
///
/// Missing parent directories are created and the destination is overwritten.
pub fn write_html(
    messages: &[Message],
    output_path: impl AsRef<Path>,
    config: &RenderConfig,
) -> Result<RenderStats> {
    write_html_with_progress(messages, output_path, config, &no_progress())
}

/// Writes the HTML transcript to a file, reporting progress once per message.
pub fn write_html_with_progress(
    messages: &[Message],
    output_path: impl AsRef<Path>,
    config: &RenderConfig,
    progress: &ProgressCallback,
) -> Result<RenderStats> {
    let output_path = output_path.as_ref();
    let (html, stats) = render(messages, config, progress);

    ensure_parent_dir(output_path)?;
    fs::write(output_path, html)?;

    tracing::info!(
        path = %output_path.display(),
        rendered = stats.rendered,
        dropped = stats.dropped,
        "wrote HTML"
    );
    Ok(stats)
}

fn render(
    messages: &[Message],
    config: &RenderConfig,
    progress: &ProgressCallback,
) -> (String, RenderStats) {
    let mut html = String::with_capacity(STYLE.len() + messages.len() * 96);
    let mut stats = RenderStats::default();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(&config.title)));
    html.push_str("<style>\n");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n<div class=\"chat-container\">\n");

    let total = messages.len();
    for (idx, msg) in messages.iter().enumerate() {
        match config.placement(&msg.sender) {
            Some(role) => {
                push_bubble(&mut html, msg, role, config);
                stats.rendered += 1;
            }
            None => {
                tracing::trace!(sender = %msg.sender, "no role for sender, dropping from HTML");
                stats.dropped += 1;
            }
        }
        progress(Progress::new(idx + 1, Some(total)));
    }

    html.push_str(CLOSING);
    (html, stats)
}

fn push_bubble(html: &mut String, msg: &Message, role: StyleRole, config: &RenderConfig) {
    let body = if config.escape_html {
        escape_html(&msg.body)
    } else {
        msg.body.clone()
    };

    html.push_str(&format!("<div class=\"{}\">", role.css_class()));
    html.push_str(&format!("<div class=\"message-body\">{}</div>", body));
    if config.include_timestamps {
        html.push_str(&format!(
            "<div class=\"message-time\">{}</div>",
            escape_html(&msg.timestamp)
        ));
    }
    html.push_str("</div>\n");
}
