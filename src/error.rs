//! Error types for translator configuration and variant resolution.
//!
//! Missing keys and broken interpolation never surface here: the former falls
//! back to the source text and the latter renders a visible diagnostic. These
//! errors describe data that does not fit the active locale, which is a
//! defect in configuration rather than a runtime condition.

use thiserror::Error;

/// Raised when a locale, its grammar, and the translation data disagree.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The locale has no variant grammar, so variants cannot be chosen.
    #[error("unknown language `{code}`: no variant grammar is defined")]
    UnknownLanguage {
        /// Code of the locale lacking a grammar.
        code: String,
    },

    /// A variant branch holds a candidate count the grammar cannot resolve.
    #[error("locale `{locale}` expects {expected:?} variants but found {found}")]
    UnexpectedArity {
        /// Code of the active locale.
        locale: String,
        /// Candidate counts accepted by the grammar.
        expected: &'static [usize],
        /// Candidate count supplied by the translation.
        found: usize,
    },

    /// A variant branch with no candidates at all.
    #[error("locale `{locale}` was given an empty variant list")]
    EmptyVariants {
        /// Code of the active locale.
        locale: String,
    },

    /// No argument was available to select a variant.
    #[error("locale `{locale}` needs a count or person argument to choose a variant")]
    MissingSelector {
        /// Code of the active locale.
        locale: String,
    },

    /// The selector kind does not apply to the candidates or grammar.
    #[error("locale `{locale}` cannot choose among {candidates} variants using {selector}")]
    UnsupportedSelector {
        /// Code of the active locale.
        locale: String,
        /// Description of the selector that was supplied.
        selector: String,
        /// Candidate count at the failing level.
        candidates: usize,
    },

    /// A table entry failed validation against the locale grammar.
    #[error("translation for `{key}` is invalid: {source}")]
    InvalidEntry {
        /// Source key of the offending entry.
        key: String,
        /// The underlying grammar mismatch.
        #[source]
        source: Box<ConfigurationError>,
    },
}

/// Raised when configuration text cannot be deserialised.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML configuration failed to parse.
    #[error("invalid translator configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// A JSON translation table failed to parse.
    #[error("invalid translation table: {0}")]
    Json(#[from] serde_json::Error),

    /// The resolved configuration does not fit its locale.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
