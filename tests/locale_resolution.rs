//! Behaviour-driven tests covering how the translator's locale is chosen.

use std::cell::RefCell;
use std::str::FromStr;

mod support;

use parlance::{
    Arg, ConfigurationError, LocaleChoice, LocaleRequest, LocaleSource, Translation,
    TranslationTable, Translator,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use support::step::StepText;

#[derive(Default)]
struct LocaleWorld {
    request: RefCell<LocaleRequest>,
    table: RefCell<TranslationTable>,
    choice: RefCell<Option<LocaleChoice>>,
    built: RefCell<Option<Result<Translator, ConfigurationError>>>,
}

impl LocaleWorld {
    fn extend(&self, add: impl FnOnce(LocaleRequest) -> LocaleRequest) {
        let request = self.request.take();
        *self.request.borrow_mut() = add(request);
    }

    fn choice(&self) -> LocaleChoice {
        self.choice
            .borrow()
            .clone()
            .unwrap_or_else(|| panic!("the translator should have been built"))
    }

    fn translator(&self) -> Translator {
        match self.built.borrow().clone() {
            Some(Ok(translator)) => translator,
            Some(Err(error)) => panic!("the translator failed to build: {error}"),
            None => panic!("the translator should have been built"),
        }
    }
}

#[fixture]
fn world() -> LocaleWorld {
    LocaleWorld::default()
}

#[derive(Debug)]
struct StepSource(LocaleSource);

impl FromStr for StepSource {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim() {
            "override" => Ok(Self(LocaleSource::Override)),
            "environment" => Ok(Self(LocaleSource::Environment)),
            "configuration" => Ok(Self(LocaleSource::Configuration)),
            "fallback" => Ok(Self(LocaleSource::Fallback)),
            other => Err(format!("unknown locale source '{other}'")),
        }
    }
}

#[given("the override {code}")]
fn given_override(world: &LocaleWorld, code: StepText) {
    let code = code.into_inner();
    world.extend(|request| request.overridden(Some(&code)));
}

#[given("PARLANCE_LOCALE holds {code}")]
fn given_environment(world: &LocaleWorld, code: StepText) {
    let code = code.into_inner();
    world.extend(|request| request.environment(Some(&code)));
}

#[given("the configured locale {code}")]
fn given_configured(world: &LocaleWorld, code: StepText) {
    let code = code.into_inner();
    world.extend(|request| request.configured(Some(&code)));
}

#[given("the translation {key} is {value}")]
fn given_translation(world: &LocaleWorld, key: StepText, value: StepText) {
    world
        .table
        .borrow_mut()
        .insert(key.into_inner(), value.into_inner());
}

#[given("the variants for {key} are {forms}")]
fn given_variants(world: &LocaleWorld, key: StepText, forms: StepText) {
    let forms = forms.into_inner();
    world
        .table
        .borrow_mut()
        .insert(key.into_inner(), Translation::variants(forms.split('|')));
}

#[when("the translator is built")]
fn build(world: &LocaleWorld) {
    let request = world.request.borrow().clone();
    let built = Translator::builder()
        .requested_locale(&request)
        .table(world.table.borrow().clone())
        .build();
    *world.choice.borrow_mut() = Some(request.choose());
    *world.built.borrow_mut() = Some(built);
}

#[then("translations use {code}")]
fn assert_locale(world: &LocaleWorld, code: StepText) {
    assert_eq!(world.translator().locale().code(), code.into_inner());
}

#[then("the locale came from the {source}")]
fn assert_source(world: &LocaleWorld, source: StepSource) {
    assert_eq!(world.choice().source(), source.0);
}

#[then("{code} was passed over")]
fn assert_passed_over(world: &LocaleWorld, code: StepText) {
    let code = code.into_inner();
    assert!(
        world.choice().passed_over().contains(&code),
        "expected `{code}` among {:?}",
        world.choice().passed_over()
    );
}

#[then("the key {key} translates to {text}")]
fn assert_translation(world: &LocaleWorld, key: StepText, text: StepText) {
    let message = world
        .translator()
        .translate(&key.into_inner(), &[])
        .unwrap_or_else(|error| panic!("translation should resolve: {error}"));
    assert_eq!(message.as_str(), text.into_inner());
}

#[then("counting {count} the key {key} translates to {text}")]
fn assert_counted_translation(world: &LocaleWorld, count: i64, key: StepText, text: StepText) {
    let message = world
        .translator()
        .translate(&key.into_inner(), &[Arg::from(count)])
        .unwrap_or_else(|error| panic!("translation should resolve: {error}"));
    assert_eq!(message.as_str(), text.into_inner());
}

#[then("building fails for {key}")]
fn assert_rejected(world: &LocaleWorld, key: StepText) {
    let expected = key.into_inner();
    match world.built.borrow().as_ref() {
        Some(Err(ConfigurationError::InvalidEntry { key, .. })) => assert_eq!(*key, expected),
        Some(Err(error)) => panic!("expected an invalid entry, got {error}"),
        Some(Ok(_)) => panic!("expected `{expected}` to be rejected"),
        None => panic!("the translator should have been built"),
    }
}

#[scenario("tests/features/locale_resolution.feature", index = 0)]
fn scenario_fallback(world: LocaleWorld) {
    let _ = world;
}

#[scenario("tests/features/locale_resolution.feature", index = 1)]
fn scenario_environment(world: LocaleWorld) {
    let _ = world;
}

#[scenario("tests/features/locale_resolution.feature", index = 2)]
fn scenario_override(world: LocaleWorld) {
    let _ = world;
}

#[scenario("tests/features/locale_resolution.feature", index = 3)]
fn scenario_passed_over(world: LocaleWorld) {
    let _ = world;
}

#[scenario("tests/features/locale_resolution.feature", index = 4)]
fn scenario_german_variants(world: LocaleWorld) {
    let _ = world;
}
