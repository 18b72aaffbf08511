//! Property-based invariants for variant selection and translation.
//!
//! 1. English-family locales: exactly 1 picks the singular, anything else the plural
//! 2. Czech: exactly 1 singular, 2 to 4 inclusive paucal, everything else plural
//! 3. Czech persons: only the sex decides between male and female forms
//! 4. A single candidate is chosen for every selector
//! 5. Keys missing from the table translate to themselves
//! 6. Locales without a grammar never guess among several candidates
//! 7. Grouped numbers round-trip through their separators

use parlance::grammar::{CZECH, SINGULAR_PLURAL, choose_variant};
use parlance::{Arg, ConfigurationError, Selector, Sex, Translation, Translator};
use proptest::prelude::*;

fn english_codes() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["en_US", "en_GB", "en_W*", "en_R*", "en_A*"])
}

fn counts() -> impl Strategy<Value = f64> {
    prop_oneof![
        (-1_000i32..1_000).prop_map(f64::from),
        (-1_000i32..1_000, 1u8..10).prop_map(|(whole, tenths)| f64::from(whole) + f64::from(tenths) / 10.0),
    ]
}

fn sexes() -> impl Strategy<Value = Sex> {
    prop::sample::select(vec![Sex::Male, Sex::Female, Sex::Unknown])
}

fn selectors() -> impl Strategy<Value = Selector> {
    prop_oneof![
        counts().prop_map(Selector::Count),
        sexes().prop_map(Selector::Person),
    ]
}

fn text(value: &Translation) -> &str {
    value.as_text().unwrap_or("<branch>")
}

proptest! {
    #[test]
    fn english_family_splits_singular_from_plural(code in english_codes(), count in counts()) {
        let candidates = [Translation::from("singular"), Translation::from("plural")];

        let chosen = choose_variant(code, Some(&SINGULAR_PLURAL), &candidates, Some(Selector::Count(count)));

        let expected = if count.total_cmp(&1.0).is_eq() { "singular" } else { "plural" };
        prop_assert_eq!(chosen.map(text), Ok(expected));
    }

    #[test]
    fn czech_counts_use_three_forms(count in counts()) {
        let candidates = [
            Translation::from("singular"),
            Translation::from("paucal"),
            Translation::from("plural"),
        ];

        let chosen = choose_variant("cs_CZ", Some(&CZECH), &candidates, Some(Selector::Count(count)));

        let expected = if count.total_cmp(&1.0).is_eq() {
            "singular"
        } else if (2.0..=4.0).contains(&count) {
            "paucal"
        } else {
            "plural"
        };
        prop_assert_eq!(chosen.map(text), Ok(expected));
    }

    #[test]
    fn czech_persons_depend_only_on_sex(sex in sexes()) {
        let candidates = [Translation::from("male"), Translation::from("female")];

        let chosen = choose_variant("cs_CZ", Some(&CZECH), &candidates, Some(Selector::Person(sex)));

        let expected = if sex == Sex::Female { "female" } else { "male" };
        prop_assert_eq!(chosen.map(text), Ok(expected));
    }

    #[test]
    fn single_candidates_short_circuit(selector in proptest::option::of(selectors())) {
        let candidates = [Translation::from("only")];

        prop_assert_eq!(choose_variant("zz_ZZ", None, &candidates, selector).map(text), Ok("only"));
        prop_assert_eq!(
            choose_variant("cs_CZ", Some(&CZECH), &candidates, selector).map(text),
            Ok("only")
        );
    }

    #[test]
    fn missing_keys_translate_to_themselves(key in "[A-Za-z ,.!?]{0,40}") {
        let translator = Translator::builder()
            .build()
            .map_err(|error| TestCaseError::fail(error.to_string()))?;

        let message = translator
            .translate(&key, &[])
            .map_err(|error| TestCaseError::fail(error.to_string()))?;

        prop_assert_eq!(message.as_str(), key.as_str());
    }

    #[test]
    fn unknown_languages_refuse_to_choose(count in counts(), code in "[a-z]{2}_[A-Z]{2}") {
        let candidates = [Translation::from("a"), Translation::from("b")];

        let chosen = choose_variant(&code, None, &candidates, Some(Selector::Count(count)));

        prop_assert_eq!(chosen, Err(ConfigurationError::UnknownLanguage { code: code.clone() }));
    }

    #[test]
    fn grouped_numbers_keep_their_digits(value in -1_000_000_000i64..1_000_000_000, decimals in 0usize..4) {
        let translator = Translator::builder()
            .build()
            .map_err(|error| TestCaseError::fail(error.to_string()))?;

        let rendered = translator.format_number(value as f64, decimals);
        let digits: String = rendered.chars().filter(|c| *c != ',').collect();
        let expected = if decimals == 0 {
            value.to_string()
        } else {
            format!("{value}.{}", "0".repeat(decimals))
        };

        prop_assert_eq!(digits, expected);
    }

    #[test]
    fn integer_selectors_match_arguments(count in any::<i32>()) {
        prop_assert_eq!(Arg::from(count).selector(), Some(Selector::Count(f64::from(count))));
    }

    #[test]
    fn fractional_counts_are_never_singular(whole in -1_000i32..1_000, tenths in 1u8..10) {
        let count = f64::from(whole) + f64::from(tenths) / 10.0;
        let candidates = [Translation::from("singular"), Translation::from("plural")];

        let chosen = choose_variant("en_US", Some(&SINGULAR_PLURAL), &candidates, Some(Selector::Count(count)));

        prop_assert_eq!(chosen.map(text), Ok("plural"));
    }
}
