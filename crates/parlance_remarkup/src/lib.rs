//! Remarkup rules: lightweight text markup rendered as escaped HTML.
//!
//! Each [`MarkupRule`] rewrites one construct. In [`MarkupMode::Html`] the
//! input is escaped before the rule inserts its own tags, so the result is
//! [`SafeMarkup`]; in [`MarkupMode::Text`] rules leave the input alone.

use std::fmt;

use parlance_common::SafeMarkup;
use thiserror::Error;

mod bold;

pub use bold::BoldRule;

/// Output flavour requested by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MarkupMode {
    /// Render escaped HTML.
    #[default]
    Html,
    /// Render plain text.
    Text,
}

/// Output of a rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rendered {
    /// Plain text, returned in text mode.
    Text(String),
    /// Escaped HTML.
    Html(SafeMarkup),
}

impl Rendered {
    /// The rendered text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Html(markup) => markup.as_str(),
        }
    }

    /// Whether the output is escaped HTML.
    #[must_use]
    pub const fn is_html(&self) -> bool {
        matches!(self, Self::Html(_))
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Raised when a rule cannot be applied.
#[derive(Clone, Debug, Error)]
pub enum RuleError {
    /// The rule's pattern failed to compile.
    #[error("rule `{rule}` has an invalid pattern: {source}")]
    Pattern {
        /// Name of the failing rule.
        rule: &'static str,
        /// The compilation error.
        #[source]
        source: regex::Error,
    },
}

/// A single markup construct.
pub trait MarkupRule: fmt::Debug + Send + Sync {
    /// Short identifier used in diagnostics.
    fn name(&self) -> &'static str;

    /// Ordering among rules; lower values run first.
    fn priority(&self) -> f64;

    /// Rewrite `text` for `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError`] when the rule's pattern is unusable.
    fn apply(&self, text: &str, mode: MarkupMode) -> Result<Rendered, RuleError>;
}
