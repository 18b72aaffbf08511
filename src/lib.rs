//! Message translation with locale-specific plural and gender variants.
//!
//! A [`Translator`] maps a source string to its translation for one locale,
//! chooses between variant phrasings using the locale's grammar, and
//! substitutes printf-style arguments. Missing translations fall back to the
//! source string and broken templates render a visible diagnostic, so
//! translation never blanks out a message.
//!
//! ```
//! use parlance::{Arg, Person, Sex, Translation, Translator};
//!
//! let translator = Translator::builder()
//!     .locale_code("cs_CZ")?
//!     .translation("%d beer(s)", Translation::variants(["%d pivo", "%d piva", "%d piv"]))
//!     .translation("%s wrote.", Translation::variants(["%s napsal.", "%s napsala."]))
//!     .build()?;
//!
//! assert_eq!(translator.translate("%d beer(s)", &[Arg::from(3)])?.as_str(), "3 piva");
//! let eva = Arg::from(Person::new("Eva", Sex::Female));
//! assert_eq!(translator.translate("%s wrote.", &[eva])?.as_str(), "Eva napsala.");
//! # Ok::<(), parlance::ConfigurationError>(())
//! ```

pub mod args;
pub mod config;
pub mod date;
pub mod error;
pub mod grammar;
pub mod interpolate;
pub mod locale;
pub mod number;
pub mod table;
pub mod translator;
pub mod validate;

pub use args::{Arg, Number, Person, Selector, Sex};
pub use config::TranslatorConfig;
pub use error::{ConfigError, ConfigurationError};
pub use grammar::VariantGrammar;
pub use locale::{
    FALLBACK_LOCALE, Locale, LocaleChoice, LocaleDescriptor, LocaleRequest, LocaleSource,
    PostProcess, available_locales, locale_for_code, supports_locale,
};
pub use parlance_common::{LOCALE_ENV_VAR, SafeMarkup, escape_html};
pub use table::{Translation, TranslationTable};
pub use translator::{ExternalTranslator, Message, Translator, TranslatorBuilder};
pub use validate::validate_translation;
