//! Configuration types for parsing and rendering.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParserConfig`] - how malformed lines are treated
//! - [`RenderConfig`] - how the HTML transcript is styled
//! - [`RoleMap`] - which sender gets which bubble style
//!
//! # Example
//!
//! ```rust
//! use chatconv::config::{Fallback, RenderConfig, RoleMap, StyleRole};
//!
//! let roles = RoleMap::new()
//!     .with_sender("Alice", StyleRole::Me)
//!     .with_sender("Bob", StyleRole::Other);
//!
//! let config = RenderConfig::new()
//!     .with_roles(roles)
//!     .with_fallback(Fallback::Other);
//!
//! assert_eq!(config.placement("Alice"), Some(StyleRole::Me));
//! assert_eq!(config.placement("Carol"), Some(StyleRole::Other));
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChatpackError, Result};
use crate::message::UNKNOWN_SENDER;

/// Sender shown on the right-hand ("me") side by default.
pub const DEFAULT_ME: &str = "Aditya";
/// Sender shown on the left-hand ("other") side by default.
pub const DEFAULT_OTHER: &str = "Ronak";
/// Default `<title>` of the rendered document.
pub const DEFAULT_TITLE: &str = "WhatsApp Chat";

/// Configuration for the line parser.
///
/// # Example
///
/// ```rust
/// use chatconv::config::ParserConfig;
///
/// let config = ParserConfig::new().with_skip_invalid(false);
/// assert!(!config.skip_invalid);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Skip lines without the `" - "` separator instead of failing (default: true)
    pub skip_invalid: bool,

    /// Sender assigned when a line has no `": "` separator (default: "Unknown")
    pub unknown_sender: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            skip_invalid: true,
            unknown_sender: UNKNOWN_SENDER.to_string(),
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that rejects lines without a separator.
    pub fn strict() -> Self {
        Self {
            skip_invalid: false,
            ..Self::default()
        }
    }

    /// Sets whether to skip invalid lines.
    #[must_use]
    pub fn with_skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }

    /// Sets the sender used for unattributed lines.
    #[must_use]
    pub fn with_unknown_sender(mut self, sender: impl Into<String>) -> Self {
        self.unknown_sender = sender.into();
        self
    }
}

/// Visual placement of a message bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleRole {
    /// Right-aligned bubble for the exporting user.
    Me,
    /// Left-aligned bubble for the conversation partner.
    Other,
}

impl StyleRole {
    /// Returns the CSS class list used for this role's bubble.
    pub fn css_class(self) -> &'static str {
        match self {
            StyleRole::Me => "message me",
            StyleRole::Other => "message other",
        }
    }
}

impl std::fmt::Display for StyleRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleRole::Me => write!(f, "me"),
            StyleRole::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for StyleRole {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "me" | "self" => Ok(StyleRole::Me),
            "other" => Ok(StyleRole::Other),
            _ => Err(format!("Unknown role: '{}'. Expected one of: me, other", s)),
        }
    }
}

/// What to do with a sender that has no entry in the [`RoleMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fallback {
    /// Leave the message out of the HTML transcript (it stays in the CSV).
    #[default]
    Drop,
    /// Render as a "me" bubble.
    Me,
    /// Render as an "other" bubble.
    Other,
}

impl Fallback {
    /// Returns the role unmapped senders receive, or `None` when they are dropped.
    pub fn role(self) -> Option<StyleRole> {
        match self {
            Fallback::Drop => None,
            Fallback::Me => Some(StyleRole::Me),
            Fallback::Other => Some(StyleRole::Other),
        }
    }
}

impl std::str::FromStr for Fallback {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "drop" | "none" => Ok(Fallback::Drop),
            "me" | "self" => Ok(Fallback::Me),
            "other" => Ok(Fallback::Other),
            _ => Err(format!(
                "Unknown fallback: '{}'. Expected one of: drop, me, other",
                s
            )),
        }
    }
}

/// Mapping from exact sender name to bubble style.
///
/// Matching is exact and case-sensitive: `"aditya"` does not match `"Aditya"`.
/// Serializes as a plain JSON object, e.g. `{"Aditya": "me", "Ronak": "other"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleMap {
    senders: BTreeMap<String, StyleRole>,
}

impl Default for RoleMap {
    fn default() -> Self {
        Self::new()
            .with_sender(DEFAULT_ME, StyleRole::Me)
            .with_sender(DEFAULT_OTHER, StyleRole::Other)
    }
}

impl RoleMap {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self {
            senders: BTreeMap::new(),
        }
    }

    /// Builder method that assigns `role` to `sender`.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>, role: StyleRole) -> Self {
        self.assign(sender, role);
        self
    }

    /// Assigns `role` to `sender`, returning the role it replaced.
    pub fn assign(&mut self, sender: impl Into<String>, role: StyleRole) -> Option<StyleRole> {
        self.senders.insert(sender.into(), role)
    }

    /// Returns the role mapped to `sender`, if any.
    pub fn role_for(&self, sender: &str) -> Option<StyleRole> {
        self.senders.get(sender).copied()
    }

    /// Iterates over `(sender, role)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, StyleRole)> {
        self.senders.iter().map(|(name, role)| (name.as_str(), *role))
    }

    pub fn len(&self) -> usize {
        self.senders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }

    fn validate(&self) -> std::result::Result<(), String> {
        if self.senders.keys().any(|name| name.trim().is_empty()) {
            return Err("sender names in \"roles\" must not be empty".to_string());
        }
        Ok(())
    }
}

/// Configuration for the HTML transcript.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```json
/// {
///   "roles": { "Alice": "me", "Bob": "other" },
///   "fallback": "drop",
///   "title": "Family chat",
///   "escape_html": true,
///   "include_timestamps": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Sender to bubble-style mapping
    pub roles: RoleMap,

    /// Policy for senders missing from `roles` (default: drop)
    pub fallback: Fallback,

    /// Document `<title>` (default: "WhatsApp Chat")
    pub title: String,

    /// Escape `<`, `>`, `&` and quotes in message bodies (default: true)
    pub escape_html: bool,

    /// Add a timestamp line under each bubble body (default: false)
    pub include_timestamps: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            roles: RoleMap::default(),
            fallback: Fallback::default(),
            title: DEFAULT_TITLE.to_string(),
            escape_html: true,
            include_timestamps: false,
        }
    }
}

impl RenderConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config
            .roles
            .validate()
            .map_err(|message| ChatpackError::config(message, None))?;
        Ok(config)
    }

    /// Loads a configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config
            .roles
            .validate()
            .map_err(|message| ChatpackError::config(message, Some(path.to_path_buf())))?;
        let roles: Vec<String> = config
            .roles
            .iter()
            .map(|(name, role)| format!("{name}={role}"))
            .collect();
        tracing::debug!(
            path = %path.display(),
            roles = %roles.join(", "),
            fallback = ?config.fallback,
            "loaded render config"
        );
        Ok(config)
    }

    /// Replaces the role mapping.
    #[must_use]
    pub fn with_roles(mut self, roles: RoleMap) -> Self {
        self.roles = roles;
        self
    }

    /// Sets the policy for unmapped senders.
    #[must_use]
    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Sets the document title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Enables or disables HTML escaping of message bodies.
    #[must_use]
    pub fn with_escape_html(mut self, escape: bool) -> Self {
        self.escape_html = escape;
        self
    }

    /// Enables or disables per-message timestamps.
    #[must_use]
    pub fn with_timestamps(mut self, include: bool) -> Self {
        self.include_timestamps = include;
        self
    }

    /// Resolves the bubble style for `sender`, applying the fallback policy.
    ///
    /// Returns `None` when the message should not appear in the transcript.
    pub fn placement(&self, sender: &str) -> Option<StyleRole> {
        self.roles.role_for(sender).or_else(|| self.fallback.role())
    }
}
