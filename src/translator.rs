//! The translation engine.
//!
//! A [`Translator`] owns one locale, one translation table, and optionally an
//! [`ExternalTranslator`] that takes over lookup and variant choice. It is
//! immutable once built, so a single instance can be shared across threads;
//! switching locale produces a new instance via [`Translator::with_locale`].

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, TimeZone};
use log::warn;
use parlance_common::{SafeMarkup, escape_html};

use crate::args::{Arg, Selector};
use crate::date;
use crate::error::ConfigurationError;
use crate::grammar;
use crate::interpolate::{Param, interpolate};
use crate::locale::{Locale, LocaleRequest, fallback_locale, locale_for_code};
use crate::number::format_grouped;
use crate::table::{Translation, TranslationTable};
use crate::validate;

const INVALID_TRANSLATION_MARKER: &str = "[Invalid Translation!]";

/// A service that translates templates in place of the local table.
///
/// When configured, the translator still looks the key up locally, but hands
/// the result to this adapter instead of resolving variants itself.
pub trait ExternalTranslator: fmt::Debug + Send + Sync {
    /// Translate a single template.
    fn translate(&self, template: &str) -> String;

    /// Choose and translate one of `variants` for `selector`.
    fn plural_translate(&self, variants: &[Translation], selector: Option<Selector>) -> String;
}

/// A translated message: plain text, or markup when any argument was markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    /// Unescaped text.
    Plain(String),
    /// Escaped markup safe to embed in HTML.
    Markup(SafeMarkup),
}

impl Message {
    /// The message text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Plain(text) => text,
            Self::Markup(markup) => markup.as_str(),
        }
    }

    /// Whether the message is escaped markup.
    #[must_use]
    pub const fn is_markup(&self) -> bool {
        matches!(self, Self::Markup(_))
    }

    /// Consume the message, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            Self::Plain(text) => text,
            Self::Markup(markup) => markup.into_string(),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl AsRef<str> for Message {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Translates messages for one locale.
#[derive(Clone, Debug)]
pub struct Translator {
    locale: Arc<dyn Locale>,
    table: Arc<TranslationTable>,
    external: Option<Arc<dyn ExternalTranslator>>,
}

impl Translator {
    /// Build a translator, checking the table against the locale grammar.
    ///
    /// Without an external adapter every variant branch must have a
    /// candidate count the locale's grammar resolves; the first offending
    /// entry is reported as [`ConfigurationError::InvalidEntry`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when a table entry does not fit the
    /// locale grammar.
    pub fn configure(
        locale: Arc<dyn Locale>,
        table: TranslationTable,
        external: Option<Arc<dyn ExternalTranslator>>,
    ) -> Result<Self, ConfigurationError> {
        let translator = Self {
            locale,
            table: Arc::new(table),
            external,
        };
        translator.validate_table()?;
        Ok(translator)
    }

    /// Start building a translator for the fallback locale.
    #[must_use]
    pub fn builder() -> TranslatorBuilder {
        TranslatorBuilder::default()
    }

    /// A translator sharing this table and adapter under another locale.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when the table does not fit the new
    /// locale's grammar.
    pub fn with_locale(&self, locale: Arc<dyn Locale>) -> Result<Self, ConfigurationError> {
        let translator = Self {
            locale,
            table: Arc::clone(&self.table),
            external: self.external.clone(),
        };
        translator.validate_table()?;
        Ok(translator)
    }

    /// The active locale.
    #[must_use]
    pub fn locale(&self) -> &dyn Locale {
        self.locale.as_ref()
    }

    /// The active translation table.
    #[must_use]
    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    fn validate_table(&self) -> Result<(), ConfigurationError> {
        if self.external.is_some() {
            return Ok(());
        }
        self.table.iter().try_for_each(|(key, translation)| {
            grammar::validate_shape(self.locale.code(), self.locale.grammar(), translation)
                .map_err(|source| ConfigurationError::InvalidEntry {
                    key: key.to_owned(),
                    source: Box::new(source),
                })
        })
    }

    /// Translate `key`, substituting `args`.
    ///
    /// Keys missing from the table translate to themselves. Leading
    /// arguments select variants, one per nesting level, and every argument
    /// is substituted into the chosen template. A template that cannot be
    /// filled yields a visible `[Invalid Translation!]` diagnostic rather
    /// than an error.
    ///
    /// ```
    /// use parlance::{Arg, Translation, Translator};
    ///
    /// let translator = Translator::builder()
    ///     .translation("%d beer(s)", Translation::variants(["%d beer", "%d beers"]))
    ///     .build()
    ///     .unwrap();
    ///
    /// let one = translator.translate("%d beer(s)", &[Arg::from(1)]).unwrap();
    /// let many = translator.translate("%d beer(s)", &[Arg::from(3)]).unwrap();
    /// assert_eq!(one.as_str(), "1 beer");
    /// assert_eq!(many.as_str(), "3 beers");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when the locale cannot choose among the
    /// variants stored for `key`.
    pub fn translate(&self, key: &str, args: &[Arg]) -> Result<Message, ConfigurationError> {
        let template = self.resolve_template(key, args)?;

        let html = args.iter().any(Arg::is_markup);
        let params: Vec<Param> = args.iter().map(|arg| self.param(arg, html)).collect();

        let mut result = if params.is_empty() {
            template.to_string()
        } else {
            interpolate(&template, &params).unwrap_or_else(|error| {
                warn!(
                    target: "i18n::translate",
                    "invalid translation for `{key}` in {}: {error}",
                    self.locale.code(),
                );
                format!("{INVALID_TRANSLATION_MARKER} {template}")
            })
        };

        if self.locale.should_post_process() {
            result = self.locale.did_translate(key, &template, &params, result);
        }

        Ok(if html {
            Message::Markup(SafeMarkup::trusted(result))
        } else {
            Message::Plain(result)
        })
    }

    fn resolve_template<'a>(
        &'a self,
        key: &'a str,
        args: &[Arg],
    ) -> Result<Cow<'a, str>, ConfigurationError> {
        let translation = self.table.get(key);
        let Some(external) = &self.external else {
            return match translation {
                Some(translation) => self.choose_locally(translation, args).map(Cow::Borrowed),
                None => Ok(Cow::Borrowed(key)),
            };
        };

        Ok(Cow::Owned(match translation {
            Some(Translation::Variants(variants)) => {
                external.plural_translate(variants, args.first().and_then(Arg::selector))
            }
            Some(Translation::Text(text)) => external.translate(text),
            None => external.translate(key),
        }))
    }

    fn choose_locally<'a>(
        &self,
        translation: &'a Translation,
        args: &[Arg],
    ) -> Result<&'a str, ConfigurationError> {
        let mut selectors = args.iter().map(Arg::selector);
        let mut current = translation;
        loop {
            match current {
                Translation::Text(text) => return Ok(text),
                Translation::Variants(candidates) => {
                    let selector = selectors.next().flatten();
                    current = self.locale.choose_variant(candidates, selector)?;
                }
            }
        }
    }

    fn param(&self, arg: &Arg, html: bool) -> Param {
        let text = |raw: &str| {
            if html {
                escape_html(raw).into_string()
            } else {
                raw.to_owned()
            }
        };
        match arg {
            Arg::Text(value) => Param::Text(text(value)),
            Arg::Integer(value) => Param::Integer(*value),
            Arg::Float(value) => Param::Float(*value),
            Arg::Number(number) => {
                Param::Text(text(&self.format_number(number.value(), number.decimals())))
            }
            Arg::Person(person) => Param::Text(text(person.name())),
            Arg::Markup(markup) => Param::Text(markup.as_str().to_owned()),
        }
    }

    /// Render `value` with grouped thousands and `decimals` fractional digits.
    ///
    /// The separators are the translations of `"."` and `","` so a table can
    /// swap them for its locale.
    ///
    /// ```
    /// use parlance::Translator;
    ///
    /// let english = Translator::builder().build().unwrap();
    /// assert_eq!(english.format_number(1234.5, 2), "1,234.50");
    ///
    /// let german = Translator::builder()
    ///     .translation(".", ",")
    ///     .translation(",", ".")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(german.format_number(1234.5, 2), "1.234,50");
    /// ```
    #[must_use]
    pub fn format_number(&self, value: f64, decimals: usize) -> String {
        let decimal_point = self.separator(".");
        let thousands = self.separator(",");
        format_grouped(value, decimals, &decimal_point, &thousands)
    }

    fn separator(&self, glyph: &str) -> String {
        match self.translate(glyph, &[]) {
            Ok(message) => message.into_string(),
            Err(error) => {
                warn!(
                    target: "i18n::translate",
                    "cannot translate separator `{glyph}` in {}: {error}; using it untranslated",
                    self.locale.code(),
                );
                glyph.to_owned()
            }
        }
    }

    /// Render `datetime` with a `date()`-style `format`, translating names.
    ///
    /// Day and month names, ordinal suffixes, and meridiem markers are looked
    /// up in the table; everything else is rendered verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when a translated name maps to variants
    /// the locale cannot resolve.
    pub fn translate_date<Tz>(
        &self,
        format: &str,
        datetime: &DateTime<Tz>,
    ) -> Result<String, ConfigurationError>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        date::translate_date(self, format, datetime)
    }

    /// Check that `translation` keeps the tags and entities of `original`.
    #[must_use]
    pub fn validate_translation(&self, original: &str, translation: &str) -> bool {
        validate::validate_translation(original, translation)
    }
}

/// Incremental construction of a [`Translator`].
#[derive(Debug, Default)]
pub struct TranslatorBuilder {
    locale: Option<Arc<dyn Locale>>,
    table: TranslationTable,
    external: Option<Arc<dyn ExternalTranslator>>,
}

impl TranslatorBuilder {
    /// Use `locale`.
    #[must_use]
    pub fn locale(mut self, locale: impl Locale + 'static) -> Self {
        self.locale = Some(Arc::new(locale));
        self
    }

    /// Use an already shared locale.
    #[must_use]
    pub fn shared_locale(mut self, locale: Arc<dyn Locale>) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Use the built-in locale for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownLanguage`] when `code` is not a
    /// built-in locale.
    pub fn locale_code(self, code: &str) -> Result<Self, ConfigurationError> {
        let locale = locale_for_code(code).ok_or_else(|| ConfigurationError::UnknownLanguage {
            code: code.to_owned(),
        })?;
        Ok(self.locale(locale.clone()))
    }

    /// Use the built-in locale `request` settles on.
    ///
    /// ```
    /// use parlance::{LocaleRequest, Translator};
    ///
    /// let request = LocaleRequest::new().overridden(Some("xx_XX")).configured(Some("cs_CZ"));
    /// let translator = Translator::builder().requested_locale(&request).build().unwrap();
    /// assert_eq!(translator.locale().code(), "cs_CZ");
    /// ```
    #[must_use]
    pub fn requested_locale(self, request: &LocaleRequest) -> Self {
        let choice = request.choose();
        choice.log("i18n::translate");
        self.shared_locale(choice.shared())
    }

    /// Replace the table.
    #[must_use]
    pub fn table(mut self, table: TranslationTable) -> Self {
        self.table = table;
        self
    }

    /// Add one entry to the table.
    #[must_use]
    pub fn translation(mut self, key: impl Into<String>, translation: impl Into<Translation>) -> Self {
        self.table.insert(key, translation);
        self
    }

    /// Defer lookup and variant choice to `external`.
    #[must_use]
    pub fn external(mut self, external: impl ExternalTranslator + 'static) -> Self {
        self.external = Some(Arc::new(external));
        self
    }

    /// Build the translator, defaulting to the `en_US` locale.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when the table does not fit the locale.
    pub fn build(self) -> Result<Translator, ConfigurationError> {
        let locale = self
            .locale
            .unwrap_or_else(|| Arc::new(fallback_locale().clone()));
        Translator::configure(locale, self.table, self.external)
    }
}
