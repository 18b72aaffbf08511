//! Building translators from TOML configuration and the process environment.

use parlance::{Arg, ConfigError, ConfigurationError, LocaleRequest, TranslationTable, TranslatorConfig};
use parlance_common::test_support::LocaleOverride;
use rstest::rstest;
use serial_test::serial;

const BILINGUAL: &str = r#"
locale = "en_GB"

[translations]
"%d file(s)" = ["%d file", "%d files"]
"." = ","
"," = "."
"#;

fn config() -> TranslatorConfig {
    TranslatorConfig::from_toml_str(BILINGUAL)
        .unwrap_or_else(|error| panic!("configuration should parse: {error}"))
}

#[rstest]
#[serial]
fn configuration_locale_applies_without_environment() {
    let _guard = LocaleOverride::clear();

    let translator = config()
        .build(None)
        .unwrap_or_else(|error| panic!("configuration should build: {error}"));

    assert_eq!(translator.locale().code(), "en_GB");
    assert_eq!(translator.format_number(9876.5, 1), "9.876,5");
}

#[rstest]
#[serial]
fn environment_overrides_the_configuration() {
    let _guard = LocaleOverride::set("en_A*");

    let translator = config()
        .build(None)
        .unwrap_or_else(|error| panic!("configuration should build: {error}"));

    assert_eq!(translator.locale().code(), "en_A*");
    let message = translator
        .translate("%d file(s)", &[Arg::from(1)])
        .unwrap_or_else(|error| panic!("translation should resolve: {error}"));
    assert_eq!(message.as_str(), "1 FILE");
}

#[rstest]
#[serial]
fn unknown_environment_locales_defer_to_the_configuration() {
    let _guard = LocaleOverride::set("tlh_QO");

    let translator = config()
        .build(None)
        .unwrap_or_else(|error| panic!("configuration should build: {error}"));

    assert_eq!(translator.locale().code(), "en_GB");
}

#[rstest]
#[serial]
fn override_beats_the_environment() {
    let _guard = LocaleOverride::set("en_A*");

    let translator = config()
        .build(Some("en_US"))
        .unwrap_or_else(|error| panic!("configuration should build: {error}"));

    assert_eq!(translator.locale().code(), "en_US");
}

#[rstest]
#[serial]
fn tables_are_checked_against_the_environment_locale() {
    let _guard = LocaleOverride::set("cs_CZ");

    let outcome = config().build(None);

    assert!(
        matches!(outcome, Err(ConfigError::Configuration(_))),
        "two English forms cannot serve Czech counts"
    );
}

#[rstest]
#[serial]
fn german_cannot_serve_variant_tables() {
    let _guard = LocaleOverride::set("de_DE");

    let outcome = config().build(None);

    assert!(
        matches!(
            outcome,
            Err(ConfigError::Configuration(ConfigurationError::InvalidEntry { ref source, .. }))
                if **source == ConfigurationError::UnknownLanguage { code: "de_DE".to_owned() }
        ),
        "german has no variant grammar"
    );
}

#[rstest]
fn json_tables_can_be_embedded_in_code() {
    let table = TranslationTable::from_json_str(r#"{"%d file(s)": ["%d soubor", "%d soubory", "%d souborů"]}"#)
        .unwrap_or_else(|error| panic!("table should parse: {error}"));
    let config = TranslatorConfig {
        locale: Some("cs_CZ".to_owned()),
        translations: table,
    };

    let translator = config
        .build_for(&LocaleRequest::new())
        .unwrap_or_else(|error| panic!("configuration should build: {error}"));
    let message = translator
        .translate("%d file(s)", &[Arg::from(22)])
        .unwrap_or_else(|error| panic!("translation should resolve: {error}"));

    assert_eq!(message.as_str(), "22 souborů");
}
