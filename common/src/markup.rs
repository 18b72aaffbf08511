//! Pre-escaped markup values.
//!
//! [`SafeMarkup`] marks a string as already escaped for an HTML context.
//! Producers either escape untrusted text with [`escape_html`] or vouch for a
//! literal with [`SafeMarkup::trusted`]. Consumers never escape a
//! `SafeMarkup` value a second time.

use std::fmt;

/// A string known to be safe for interpolation into HTML.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SafeMarkup(String);

impl SafeMarkup {
    /// Wrap `markup` without escaping it.
    ///
    /// Only use this for literals or for text that has already been escaped.
    ///
    /// ```
    /// use parlance_common::SafeMarkup;
    ///
    /// let bold = SafeMarkup::trusted("<b>ok</b>");
    /// assert_eq!(bold.as_str(), "<b>ok</b>");
    /// ```
    #[must_use]
    pub fn trusted(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// Escape any displayable value into safe markup.
    #[must_use]
    pub fn escape(value: &impl fmt::Display) -> Self {
        escape_html(&value.to_string())
    }

    /// Borrow the escaped markup.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper, yielding the escaped markup.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether the markup is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SafeMarkup {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl AsRef<str> for SafeMarkup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Escape `raw` for inclusion in HTML text or attribute values.
///
/// Ampersands, angle brackets, and both quote characters are replaced by
/// their entity forms.
///
/// ```
/// use parlance_common::escape_html;
///
/// assert_eq!(escape_html("<a href='x'>&</a>").as_str(), "&lt;a href=&#039;x&#039;&gt;&amp;&lt;/a&gt;");
/// ```
#[must_use]
pub fn escape_html(raw: &str) -> SafeMarkup {
    let mut escaped = String::with_capacity(raw.len());
    for character in raw.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    SafeMarkup(escaped)
}
