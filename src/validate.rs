//! Checks that a translation preserves the markup of its source string.

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

/// Tags (`<...`) and entities (`&...;`), including truncated ones.
static MARKUP_TOKEN: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"(?i)<(\S[^>]*>?)?|&(\S[^;]*;?)?"));

fn sorted_tokens<'a>(pattern: &Regex, text: &'a str) -> Vec<&'a str> {
    let mut tokens: Vec<&str> = pattern.find_iter(text).map(|found| found.as_str()).collect();
    tokens.sort_unstable();
    tokens
}

/// Whether `translation` carries the same tags and entities as `original`.
///
/// Order is ignored, so translations may move markup around, but every tag
/// and entity must appear the same number of times.
///
/// ```
/// use parlance::validate_translation;
///
/// assert!(validate_translation("<b>x</b>", "<b>y</b>"));
/// assert!(!validate_translation("<b>x</b>", "<i>y</i>"));
/// ```
#[must_use]
pub fn validate_translation(original: &str, translation: &str) -> bool {
    match MARKUP_TOKEN.as_ref() {
        Ok(pattern) => sorted_tokens(pattern, original) == sorted_tokens(pattern, translation),
        Err(error) => {
            warn!(target: "i18n::validate", "markup token pattern failed to compile: {error}");
            false
        }
    }
}
