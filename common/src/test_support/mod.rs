//! Shared test helpers for Parlance crates.
//!
//! The helpers in this module are intended for use from unit and integration
//! tests so repeated boilerplate (such as locale overrides) can live in one
//! place with the necessary safety documentation.

use std::ffi::OsString;

use crate::locale::LOCALE_ENV_VAR;

/// Guard that overrides `PARLANCE_LOCALE` for the lifetime of the instance.
///
/// The guard captures any existing value and restores it when dropped. Tests
/// that use it must run under `serial_test::serial` so the unsafe environment
/// access remains race-free.
///
/// # Examples
///
/// ```ignore
/// use parlance_common::test_support::LocaleOverride;
/// use serial_test::serial;
///
/// #[test]
/// #[serial]
/// fn reads_the_override() {
///     let _guard = LocaleOverride::set("cs_CZ");
///     // Build a translator from the environment here.
/// }
/// ```
pub struct LocaleOverride {
    previous: Option<OsString>,
}

impl LocaleOverride {
    /// Sets `PARLANCE_LOCALE` to `locale`, returning a guard that will
    /// restore the prior value (if any) when dropped.
    pub fn set(locale: &str) -> Self {
        let previous = std::env::var_os(LOCALE_ENV_VAR);
        // SAFETY: Callers mark the surrounding test `#[serial]`, so no two
        // threads mutate the environment concurrently.
        unsafe {
            std::env::set_var(LOCALE_ENV_VAR, locale);
        }
        Self { previous }
    }

    /// Removes `PARLANCE_LOCALE`, returning a guard that reinstates the prior
    /// value (if any) when dropped.
    pub fn clear() -> Self {
        let previous = std::env::var_os(LOCALE_ENV_VAR);
        // SAFETY: Serialised execution means removal cannot race with other
        // threads.
        unsafe {
            std::env::remove_var(LOCALE_ENV_VAR);
        }
        Self { previous }
    }
}

impl Drop for LocaleOverride {
    fn drop(&mut self) {
        if let Some(value) = &self.previous {
            // SAFETY: The guard only lives within a serialised test, so
            // restoring the prior value cannot race with another thread.
            unsafe {
                std::env::set_var(LOCALE_ENV_VAR, value);
            }
        } else {
            // SAFETY: Serialised execution also guarantees removal has no
            // concurrent callers.
            unsafe {
                std::env::remove_var(LOCALE_ENV_VAR);
            }
        }
    }
}
