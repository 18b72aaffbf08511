//! Shared infrastructure for Parlance crates: HTML-safe markup values,
//! escaping, and locale candidate normalisation.

pub mod locale;
pub mod markup;
pub mod test_support;

pub use locale::{LOCALE_ENV_VAR, environment_locale, normalise_locale};
pub use markup::{SafeMarkup, escape_html};
