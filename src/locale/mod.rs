//! Locales: identity, variant grammar, and post-processing of output.
//!
//! A [`Locale`] is consulted by the translator for three things: its code
//! (for diagnostics), its [`VariantGrammar`] (to choose between plural and
//! gendered phrasings), and an optional hook that rewrites every translated
//! string. [`LocaleDescriptor`] covers the built-in locales; applications
//! needing bespoke shaping implement [`Locale`] themselves.

use std::borrow::Cow;
use std::fmt;

use crate::args::Selector;
use crate::error::ConfigurationError;
use crate::grammar::{self, VariantGrammar};
use crate::interpolate::Param;
use crate::table::Translation;

mod registry;
mod selection;

pub(crate) use registry::fallback_locale;
pub use registry::{FALLBACK_LOCALE, available_locales, locale_for_code, supports_locale};
pub use selection::{LocaleChoice, LocaleRequest, LocaleSource};

/// Behaviour the translator needs from a locale.
pub trait Locale: fmt::Debug + Send + Sync {
    /// Locale code such as `en_US`.
    fn code(&self) -> &str;

    /// Human-readable name such as `English (US)`.
    fn name(&self) -> &str;

    /// Grammar used to resolve variants; `None` when the locale has none.
    fn grammar(&self) -> Option<&dyn VariantGrammar>;

    /// Whether [`Self::did_translate`] must run on every result.
    fn should_post_process(&self) -> bool {
        false
    }

    /// Rewrite an interpolated `result`.
    ///
    /// Receives the source `key`, the resolved but unsubstituted `template`,
    /// and the parameters that were substituted into it.
    fn did_translate(&self, key: &str, template: &str, params: &[Param], result: String) -> String {
        let _ = (key, template, params);
        result
    }

    /// Choose among `candidates` using this locale's grammar.
    fn choose_variant<'a>(
        &self,
        candidates: &'a [Translation],
        selector: Option<Selector>,
    ) -> Result<&'a Translation, ConfigurationError> {
        grammar::choose_variant(self.code(), self.grammar(), candidates, selector)
    }
}

/// Built-in post-processing applied by a [`LocaleDescriptor`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PostProcess {
    /// Output is returned unchanged.
    #[default]
    None,
    /// Output is upper-cased, leaving HTML entities intact.
    Uppercase,
    /// Output is replaced by the untranslated source key.
    RawKey,
}

/// A locale defined by data: code, name, grammar, and post-processing.
#[derive(Clone, Debug)]
pub struct LocaleDescriptor {
    code: Cow<'static, str>,
    name: Cow<'static, str>,
    grammar: Option<&'static dyn VariantGrammar>,
    post_process: PostProcess,
}

impl LocaleDescriptor {
    /// Describe a locale with no grammar, so only plain entries and
    /// single-candidate variants resolve until [`Self::with_grammar`] adds one.
    ///
    /// ```
    /// use parlance::grammar::SINGULAR_PLURAL;
    /// use parlance::{Locale, LocaleDescriptor};
    ///
    /// let pirate = LocaleDescriptor::new("en_P*", "English (Pirate)");
    /// assert!(pirate.grammar().is_none());
    /// assert!(pirate.with_grammar(&SINGULAR_PLURAL).grammar().is_some());
    /// ```
    #[must_use]
    pub fn new(code: impl Into<Cow<'static, str>>, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            grammar: None,
            post_process: PostProcess::None,
        }
    }

    /// Set the grammar that resolves variants.
    #[must_use]
    pub fn with_grammar(mut self, grammar: &'static dyn VariantGrammar) -> Self {
        self.grammar = Some(grammar);
        self
    }

    /// Select built-in post-processing.
    #[must_use]
    pub const fn with_post_process(mut self, post_process: PostProcess) -> Self {
        self.post_process = post_process;
        self
    }

    /// The configured post-processing.
    #[must_use]
    pub const fn post_process(&self) -> PostProcess {
        self.post_process
    }
}

impl Locale for LocaleDescriptor {
    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn grammar(&self) -> Option<&dyn VariantGrammar> {
        self.grammar
    }

    fn should_post_process(&self) -> bool {
        self.post_process != PostProcess::None
    }

    fn did_translate(&self, key: &str, _template: &str, _params: &[Param], result: String) -> String {
        match self.post_process {
            PostProcess::None => result,
            PostProcess::Uppercase => uppercase_outside_entities(&result),
            PostProcess::RawKey => key.to_owned(),
        }
    }
}

/// Upper-case `text` while copying `&name;` and `&#123;` entities verbatim.
fn uppercase_outside_entities(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('&') {
        let (before, tail) = rest.split_at(start);
        output.push_str(&before.to_uppercase());
        let entity_len = tail
            .char_indices()
            .skip(1)
            .find(|&(_, character)| !(character.is_ascii_alphanumeric() || character == '#'))
            .filter(|&(_, character)| character == ';')
            .map(|(index, _)| index + 1);
        match entity_len {
            Some(len) if len > 2 => {
                let (entity, remainder) = tail.split_at(len);
                output.push_str(entity);
                rest = remainder;
            }
            _ => {
                output.push('&');
                rest = &tail[1..];
            }
        }
    }
    output.push_str(&rest.to_uppercase());
    output
}
