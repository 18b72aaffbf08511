//! In-memory translation tables.
//!
//! A table maps a source string to its translation. Translations are either a
//! single template or an ordered list of variants, and variants may nest to
//! model several axes at once (for example a count of characters on a count
//! of rows). Tables deserialise from JSON or TOML where a string is a leaf and
//! an array is a branch.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::ConfigError;

/// A translation: a leaf template or a branch of variants.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Translation {
    /// A final template string.
    Text(String),
    /// Ordered candidates chosen by the locale grammar.
    Variants(Vec<Translation>),
}

impl Translation {
    /// Build a branch from any sequence of candidates.
    ///
    /// ```
    /// use parlance::Translation;
    ///
    /// let beers = Translation::variants(["%d beer", "%d beers"]);
    /// assert_eq!(beers.depth(), 1);
    /// ```
    #[must_use]
    pub fn variants<I, T>(candidates: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::Variants(candidates.into_iter().map(Into::into).collect())
    }

    /// Return the template when this translation is a leaf.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Variants(_) => None,
        }
    }

    /// Deepest nesting level below this translation; leaves report zero.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Text(_) => 0,
            Self::Variants(candidates) => {
                1 + candidates.iter().map(Self::depth).max().unwrap_or(0)
            }
        }
    }

    /// Visit every branch in depth-first order, stopping at the first error.
    pub(crate) fn try_for_each_branch<E>(
        &self,
        visit: &mut impl FnMut(&[Self]) -> Result<(), E>,
    ) -> Result<(), E> {
        if let Self::Variants(candidates) = self {
            visit(candidates)?;
            for candidate in candidates {
                candidate.try_for_each_branch(visit)?;
            }
        }
        Ok(())
    }
}

impl From<&str> for Translation {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Translation {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Translation {
    fn from(candidates: Vec<T>) -> Self {
        Self::variants(candidates)
    }
}

/// Mapping from source strings to translations for one locale.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct TranslationTable {
    entries: HashMap<String, Translation>,
}

impl TranslationTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from a JSON object of strings and nested arrays.
    ///
    /// ```
    /// use parlance::TranslationTable;
    ///
    /// let table = TranslationTable::from_json_str(r#"{"color": "colour"}"#).unwrap();
    /// assert_eq!(table.get("color").and_then(|t| t.as_text()), Some("colour"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] when the text is not an object of
    /// strings and arrays.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Insert or replace the translation for `key`.
    pub fn insert(&mut self, key: impl Into<String>, translation: impl Into<Translation>) {
        self.entries.insert(key.into(), translation.into());
    }

    /// Builder-style variant of [`Self::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, translation: impl Into<Translation>) -> Self {
        self.insert(key, translation);
        self
    }

    /// Look up the translation for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Translation> {
        self.entries.get(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, translation)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Translation)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for TranslationTable
where
    K: Into<String>,
    V: Into<Translation>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
