//! Picking the built-in locale a translator should use.
//!
//! Callers collect candidate codes in a [`LocaleRequest`]: an override, the
//! `PARLANCE_LOCALE` environment variable, and the configured locale. The
//! first candidate naming a built-in locale wins whatever order they were
//! added in. Candidates the registry does not know are remembered on the
//! resulting [`LocaleChoice`] so callers can report the translations they
//! could not serve.

use std::fmt;
use std::sync::Arc;

use log::{debug, warn};
use parlance_common::{LOCALE_ENV_VAR, environment_locale, normalise_locale};

use super::registry::fallback_locale;
use super::{Locale, LocaleDescriptor, locale_for_code};

/// Where a locale candidate came from, highest priority first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LocaleSource {
    /// Passed by the caller for this translator.
    Override,
    /// Read from `PARLANCE_LOCALE`.
    Environment,
    /// Named by [`crate::TranslatorConfig`].
    Configuration,
    /// No candidate named a built-in locale.
    Fallback,
}

impl fmt::Display for LocaleSource {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Override => formatter.write_str("override"),
            Self::Environment => formatter.write_str(LOCALE_ENV_VAR),
            Self::Configuration => formatter.write_str("configured locale"),
            Self::Fallback => formatter.write_str("fallback"),
        }
    }
}

/// Locale codes a translator would accept.
///
/// ```
/// use parlance::{LocaleRequest, LocaleSource};
///
/// let choice = LocaleRequest::new()
///     .configured(Some("en_GB"))
///     .overridden(Some("cs_CZ"))
///     .choose();
/// assert_eq!(choice.code(), "cs_CZ");
/// assert_eq!(choice.source(), LocaleSource::Override);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocaleRequest {
    candidates: Vec<(LocaleSource, String)>,
}

impl LocaleRequest {
    /// An empty request, which resolves to the fallback locale.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a caller override. Blank codes are ignored.
    #[must_use]
    pub fn overridden(self, code: Option<&str>) -> Self {
        self.with(LocaleSource::Override, code)
    }

    /// Add the configured locale. Blank codes are ignored.
    #[must_use]
    pub fn configured(self, code: Option<&str>) -> Self {
        self.with(LocaleSource::Configuration, code)
    }

    /// Add an environment candidate supplied by the caller.
    #[must_use]
    pub fn environment(self, code: Option<&str>) -> Self {
        self.with(LocaleSource::Environment, code)
    }

    /// Add the current value of `PARLANCE_LOCALE`.
    #[must_use]
    pub fn from_environment(self) -> Self {
        let value = environment_locale();
        self.environment(value.as_deref())
    }

    fn with(mut self, source: LocaleSource, code: Option<&str>) -> Self {
        if let Some(code) = normalise_locale(code) {
            self.candidates.push((source, code.to_owned()));
        }
        self
    }

    /// Candidates in priority order.
    pub fn candidates(&self) -> impl Iterator<Item = (LocaleSource, &str)> {
        let mut ordered: Vec<_> = self
            .candidates
            .iter()
            .map(|(source, code)| (*source, code.as_str()))
            .collect();
        ordered.sort_by_key(|(source, _)| *source);
        ordered.into_iter()
    }

    /// Pick the highest-priority built-in locale, or the fallback.
    ///
    /// Each unknown candidate passed over on the way is logged at `warn`.
    #[must_use]
    pub fn choose(&self) -> LocaleChoice {
        let mut passed_over = Vec::new();
        for (source, code) in self.candidates() {
            if let Some(locale) = locale_for_code(code) {
                return LocaleChoice {
                    locale,
                    source,
                    passed_over,
                };
            }
            warn!(
                target: "i18n::locale",
                "no built-in locale for {source} `{code}`; trying the next candidate",
            );
            passed_over.push(code.to_owned());
        }
        LocaleChoice {
            locale: fallback_locale(),
            source: LocaleSource::Fallback,
            passed_over,
        }
    }
}

/// The locale picked for a [`LocaleRequest`].
#[derive(Clone, Debug)]
pub struct LocaleChoice {
    locale: &'static LocaleDescriptor,
    source: LocaleSource,
    passed_over: Vec<String>,
}

impl LocaleChoice {
    /// The chosen locale.
    #[must_use]
    pub const fn locale(&self) -> &'static LocaleDescriptor {
        self.locale
    }

    /// The chosen locale's code.
    #[must_use]
    pub fn code(&self) -> &str {
        self.locale.code()
    }

    /// Which candidate supplied the locale.
    #[must_use]
    pub const fn source(&self) -> LocaleSource {
        self.source
    }

    /// Requested codes that name no built-in locale.
    #[must_use]
    pub fn passed_over(&self) -> &[String] {
        &self.passed_over
    }

    /// The chosen locale, ready for [`crate::TranslatorBuilder::shared_locale`].
    #[must_use]
    pub fn shared(&self) -> Arc<dyn Locale> {
        Arc::new(self.locale.clone())
    }

    pub(crate) fn log(&self, target: &str) {
        debug!(target: target, "translating into `{}` from the {}", self.code(), self.source);
    }
}
