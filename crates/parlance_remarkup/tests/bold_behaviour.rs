//! Behaviour-driven tests for the bold remarkup rule.

use std::cell::RefCell;

use parlance_remarkup::{BoldRule, MarkupMode, MarkupRule, Rendered};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Default)]
struct BoldWorld {
    input: RefCell<String>,
    mode: RefCell<MarkupMode>,
    output: RefCell<Option<Rendered>>,
}

impl BoldWorld {
    fn output(&self) -> Rendered {
        self.output
            .borrow()
            .clone()
            .unwrap_or_else(|| panic!("the rule should have been applied"))
    }
}

fn unquote(value: &str) -> String {
    value.trim().trim_matches('"').to_owned()
}

#[fixture]
fn world() -> BoldWorld {
    BoldWorld::default()
}

#[given("the input {text}")]
fn given_input(world: &BoldWorld, text: String) {
    *world.input.borrow_mut() = unquote(&text);
}

#[given("the engine renders HTML")]
fn given_html_mode(world: &BoldWorld) {
    *world.mode.borrow_mut() = MarkupMode::Html;
}

#[given("the engine renders text")]
fn given_text_mode(world: &BoldWorld) {
    *world.mode.borrow_mut() = MarkupMode::Text;
}

#[when("the bold rule is applied")]
fn when_applied(world: &BoldWorld) {
    let rendered = BoldRule
        .apply(&world.input.borrow(), *world.mode.borrow())
        .unwrap_or_else(|error| panic!("bold rule failed: {error}"));
    world.output.borrow_mut().replace(rendered);
}

#[then("the rendered text is {text}")]
fn then_output(world: &BoldWorld, text: String) {
    assert_eq!(world.output().as_str(), unquote(&text));
}

#[then("the output is marked as HTML")]
fn then_html(world: &BoldWorld) {
    assert!(world.output().is_html());
}

#[then("the output is not marked as HTML")]
fn then_text(world: &BoldWorld) {
    assert!(!world.output().is_html());
}

#[scenario("tests/features/bold.feature", index = 0)]
fn scenario_bold_spans(world: BoldWorld) {
    let _ = world;
}

#[scenario("tests/features/bold.feature", index = 1)]
fn scenario_escaping(world: BoldWorld) {
    let _ = world;
}

#[scenario("tests/features/bold.feature", index = 2)]
fn scenario_text_mode(world: BoldWorld) {
    let _ = world;
}
