//! Locale candidate helpers shared by the engine and its configuration.

use std::env;

use log::debug;

/// Environment variable consulted for a process-wide locale override.
pub const LOCALE_ENV_VAR: &str = "PARLANCE_LOCALE";

/// Trim whitespace and discard empty locale candidates.
///
/// ```
/// use parlance_common::normalise_locale;
///
/// assert_eq!(normalise_locale(Some(" cs_CZ ")), Some("cs_CZ"));
/// assert_eq!(normalise_locale(Some("   ")), None);
/// ```
#[must_use]
pub fn normalise_locale(input: Option<&str>) -> Option<&str> {
    input
        .map(str::trim)
        .and_then(|value| if value.is_empty() { None } else { Some(value) })
}

/// Read the locale override from [`LOCALE_ENV_VAR`].
///
/// Values that are not valid Unicode are ignored.
#[must_use]
pub fn environment_locale() -> Option<String> {
    let raw = env::var_os(LOCALE_ENV_VAR)?;
    match raw.into_string() {
        Ok(value) => Some(value),
        Err(value) => {
            debug!(
                target: "i18n::selection",
                "ignoring non-Unicode {LOCALE_ENV_VAR} value {value:?}",
            );
            None
        }
    }
}
