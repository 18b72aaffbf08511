//! `**bold**` text.

use once_cell::sync::Lazy;
use parlance_common::{SafeMarkup, escape_html};
use regex::Regex;

use crate::{MarkupMode, MarkupRule, Rendered, RuleError};

static BOLD: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| Regex::new(r"(?s)\*\*(.+?)\*\*"));

/// Renders text between double asterisks as `<strong>`.
///
/// ```
/// use parlance_remarkup::{BoldRule, MarkupMode, MarkupRule};
///
/// let rendered = BoldRule.apply("**fish** & chips", MarkupMode::Html).unwrap();
/// assert_eq!(rendered.as_str(), "<strong>fish</strong> &amp; chips");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BoldRule;

impl MarkupRule for BoldRule {
    fn name(&self) -> &'static str {
        "bold"
    }

    fn priority(&self) -> f64 {
        1000.0
    }

    fn apply(&self, text: &str, mode: MarkupMode) -> Result<Rendered, RuleError> {
        if mode == MarkupMode::Text {
            return Ok(Rendered::Text(text.to_owned()));
        }

        let pattern = BOLD.as_ref().map_err(|source| RuleError::Pattern {
            rule: self.name(),
            source: source.clone(),
        })?;
        let escaped = escape_html(text);
        let html = pattern.replace_all(escaped.as_str(), "<strong>$1</strong>");
        Ok(Rendered::Html(SafeMarkup::trusted(html.into_owned())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("**bold**", "<strong>bold</strong>")]
    #[case("**a** and **b**", "<strong>a</strong> and <strong>b</strong>")]
    #[case("**two\nlines**", "<strong>two\nlines</strong>")]
    #[case("**<i>**", "<strong>&lt;i&gt;</strong>")]
    #[case("***", "***")]
    #[case("****", "****")]
    #[case("*****", "<strong>*</strong>")]
    #[case("no markup", "no markup")]
    #[case("**unterminated", "**unterminated")]
    fn renders_bold_spans_over_escaped_html(#[case] input: &str, #[case] expected: &str) {
        let rendered = BoldRule
            .apply(input, MarkupMode::Html)
            .expect("bold pattern should compile");

        assert!(rendered.is_html());
        assert_eq!(rendered.as_str(), expected);
    }

    #[rstest]
    #[case("**bold**")]
    #[case("<b>raw</b>")]
    fn text_mode_returns_input_unchanged(#[case] input: &str) {
        let rendered = BoldRule
            .apply(input, MarkupMode::Text)
            .expect("text mode never fails");

        assert_eq!(rendered, Rendered::Text(input.to_owned()));
    }

    #[rstest]
    fn runs_at_the_bold_priority() {
        assert!((BoldRule.priority() - 1000.0).abs() < f64::EPSILON);
        assert_eq!(BoldRule.name(), "bold");
    }
}
