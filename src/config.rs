//! Translator configuration loaded from TOML.
//!
//! A configuration names a preferred locale and carries the translation table
//! inline:
//!
//! ```toml
//! locale = "cs_CZ"
//!
//! [translations]
//! color = "barva"
//! "%d beer(s)" = ["%d pivo", "%d piva", "%d piv"]
//! ```
//!
//! The configured locale is only one candidate: an override and the
//! `PARLANCE_LOCALE` environment variable take precedence, as described on
//! [`crate::LocaleRequest`]. Reading the file is left to the caller.

use parlance_common::normalise_locale;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::locale::LocaleRequest;
use crate::table::TranslationTable;
use crate::translator::Translator;

/// Settings for building a [`Translator`].
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TranslatorConfig {
    /// Preferred locale when neither an override nor the environment names
    /// one. Blank values are ignored.
    pub locale: Option<String>,
    /// Translations keyed by source string.
    pub translations: TranslationTable,
}

impl TranslatorConfig {
    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] when the text is not valid TOML or does
    /// not match the configuration schema.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Returns the configured locale, if present.
    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        normalise_locale(self.locale.as_deref())
    }

    /// Build a translator, choosing the locale from `overridden`,
    /// `PARLANCE_LOCALE`, and the configured locale, in that order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Configuration`] when the translations do not
    /// fit the chosen locale.
    pub fn build(self, overridden: Option<&str>) -> Result<Translator, ConfigError> {
        let request = LocaleRequest::new().overridden(overridden).from_environment();
        self.build_for(&request)
    }

    /// Build a translator for an explicitly assembled `request`; the
    /// configured locale is added as its lowest-priority candidate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Configuration`] when the translations do not
    /// fit the chosen locale.
    pub fn build_for(self, request: &LocaleRequest) -> Result<Translator, ConfigError> {
        let request = request.clone().configured(self.locale());
        Ok(Translator::builder()
            .requested_locale(&request)
            .table(self.translations)
            .build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Arg;
    use crate::error::ConfigurationError;
    use crate::table::Translation;
    use rstest::rstest;

    const CZECH_BEERS: &str = concat!(
        "locale = \"cs_CZ\"\n",
        "[translations]\n",
        "color = \"barva\"\n",
        "\"%d beer(s)\" = [\"%d pivo\", \"%d piva\", \"%d piv\"]\n",
    );

    #[rstest]
    fn defaults_are_empty() {
        let config = TranslatorConfig::default();

        assert!(config.locale().is_none());
        assert!(config.translations.is_empty());
    }

    #[rstest]
    fn deserialises_locale_and_translations() {
        let config = TranslatorConfig::from_toml_str(CZECH_BEERS)
            .expect("expected configuration to parse successfully");

        assert_eq!(config.locale(), Some("cs_CZ"));
        assert_eq!(
            config.translations.get("%d beer(s)"),
            Some(&Translation::variants(["%d pivo", "%d piva", "%d piv"]))
        );
    }

    #[rstest]
    fn trims_whitespace_only_locale_entries() {
        let config = TranslatorConfig::from_toml_str("locale = \"  \"\n")
            .expect("expected configuration to parse successfully");

        assert!(config.locale().is_none());
    }

    #[rstest]
    #[case("unexpected = true\n")]
    #[case("locale = 3\n")]
    #[case("[translations]\ncolor = 3\n")]
    fn rejects_malformed_configuration(#[case] source: &str) {
        let outcome = TranslatorConfig::from_toml_str(source);

        assert!(matches!(outcome, Err(ConfigError::Toml(_))));
    }

    #[rstest]
    fn builds_a_translator_for_the_configured_locale() {
        let translator = TranslatorConfig::from_toml_str(CZECH_BEERS)
            .and_then(|config| config.build_for(&LocaleRequest::new()))
            .expect("configuration should build");

        assert_eq!(translator.locale().code(), "cs_CZ");
        let message = translator
            .translate("%d beer(s)", &[Arg::from(3)])
            .expect("translation should resolve");
        assert_eq!(message.as_str(), "3 piva");
    }

    #[rstest]
    fn explicit_overrides_beat_the_configuration() {
        let config = TranslatorConfig {
            locale: Some("cs_CZ".to_owned()),
            translations: TranslationTable::new().with("color", "colour"),
        };

        let request = LocaleRequest::new()
            .overridden(Some("en_GB"))
            .environment(Some("de_DE"));

        let translator = config.build_for(&request).expect("configuration should build");

        assert_eq!(translator.locale().code(), "en_GB");
    }

    #[rstest]
    fn reports_tables_that_do_not_fit_the_resolved_locale() {
        let config = TranslatorConfig::from_toml_str(CZECH_BEERS)
            .expect("expected configuration to parse successfully");

        let outcome = config.build_for(&LocaleRequest::new().overridden(Some("en_US")));

        assert!(matches!(
            outcome,
            Err(ConfigError::Configuration(ConfigurationError::InvalidEntry { ref key, .. }))
                if key == "%d beer(s)"
        ));
    }
}
