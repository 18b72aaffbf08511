//! Built-in locale enumeration and lookup.

use once_cell::sync::Lazy;

use super::{Locale, LocaleDescriptor, PostProcess};
use crate::grammar::{CZECH, SINGULAR_PLURAL};

/// Locale used when no supported locale is requested.
pub const FALLBACK_LOCALE: &str = "en_US";

fn english(code: &'static str, name: &'static str) -> LocaleDescriptor {
    LocaleDescriptor::new(code, name).with_grammar(&SINGULAR_PLURAL)
}

static FALLBACK: Lazy<LocaleDescriptor> = Lazy::new(|| english(FALLBACK_LOCALE, "English (US)"));

// German has no variant grammar yet, so only its plain entries translate.
static BUILT_IN: Lazy<Vec<LocaleDescriptor>> = Lazy::new(|| {
    let mut locales = vec![
        FALLBACK.clone(),
        english("en_GB", "English (GB)"),
        english("en_W*", "English (Whimsical)"),
        english("en_R*", "English (Raw Strings)").with_post_process(PostProcess::RawKey),
        english("en_A*", "English (All Caps)").with_post_process(PostProcess::Uppercase),
        LocaleDescriptor::new("cs_CZ", "Czech (CZ)").with_grammar(&CZECH),
        LocaleDescriptor::new("de_DE", "German (DE)"),
    ];
    locales.sort_unstable_by(|left, right| left.code().cmp(right.code()));
    locales
});

/// Return the built-in locales sorted by code.
#[must_use]
pub fn available_locales() -> &'static [LocaleDescriptor] {
    BUILT_IN.as_slice()
}

/// The locale used when resolution finds no supported candidate.
pub(crate) fn fallback_locale() -> &'static LocaleDescriptor {
    &FALLBACK
}

/// Find the built-in locale for `code`.
///
/// ```
/// use parlance::{Locale, locale_for_code};
///
/// let czech = locale_for_code("cs_CZ").unwrap();
/// assert_eq!(czech.name(), "Czech (CZ)");
/// assert!(locale_for_code("xx_XX").is_none());
/// ```
#[must_use]
pub fn locale_for_code(code: &str) -> Option<&'static LocaleDescriptor> {
    BUILT_IN
        .binary_search_by(|candidate| candidate.code().cmp(code))
        .ok()
        .and_then(|index| BUILT_IN.get(index))
}

/// Check whether `code` names a built-in locale.
#[must_use]
pub fn supports_locale(code: &str) -> bool {
    locale_for_code(code).is_some()
}
