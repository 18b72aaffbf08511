//! Arguments accepted by [`crate::Translator::translate`].
//!
//! Arguments serve two roles. Leading arguments select variants for nested
//! translations, and every argument is substituted into the final template.

use std::fmt;

use parlance_common::SafeMarkup;

use crate::interpolate::leading_number;

/// Grammatical sex reported by a [`Person`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sex {
    /// Masculine forms.
    Male,
    /// Feminine forms.
    Female,
    /// No preference; grammars use their default form.
    #[default]
    Unknown,
}

impl fmt::Display for Sex {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => formatter.write_str("male"),
            Self::Female => formatter.write_str("female"),
            Self::Unknown => formatter.write_str("unknown"),
        }
    }
}

/// A named person whose sex selects gendered variants.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Person {
    name: String,
    sex: Sex,
}

impl Person {
    /// Create a person rendered as `name` in templates.
    #[must_use]
    pub fn new(name: impl Into<String>, sex: Sex) -> Self {
        Self {
            name: name.into(),
            sex,
        }
    }

    /// Display name substituted into templates.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Grammatical sex used for variant selection.
    #[must_use]
    pub const fn sex(&self) -> Sex {
        self.sex
    }
}

/// A number rendered with the locale's separators.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Number {
    value: f64,
    decimals: usize,
}

impl Number {
    /// Wrap `value`, rendered without decimals by default.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self { value, decimals: 0 }
    }

    /// Render with `decimals` digits after the decimal point.
    #[must_use]
    pub const fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// The wrapped value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Digits rendered after the decimal point.
    #[must_use]
    pub const fn decimals(&self) -> usize {
        self.decimals
    }
}

impl From<i64> for Number {
    #[expect(
        clippy::cast_precision_loss,
        reason = "counts beyond 2^53 lose precision only in their rendering"
    )]
    fn from(value: i64) -> Self {
        Self::new(value as f64)
    }
}

/// Runtime value used to choose between variants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Selector {
    /// A count compared exactly against the locale's plural rules, so `1.5`
    /// is not singular.
    Count(f64),
    /// A person's sex, for gendered variants.
    Person(Sex),
}

impl fmt::Display for Selector {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(count) => write!(formatter, "count {count}"),
            Self::Person(sex) => write!(formatter, "{sex} person"),
        }
    }
}

/// A single translation argument.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    /// Plain text, escaped when the result is markup.
    Text(String),
    /// An integer substituted as-is.
    Integer(i64),
    /// A float substituted as-is.
    Float(f64),
    /// A number formatted with the locale's separators.
    Number(Number),
    /// A person, substituted by name.
    Person(Person),
    /// Pre-escaped markup; its presence turns the result into markup.
    Markup(SafeMarkup),
}

impl Arg {
    /// Interpret the argument as a variant selector.
    ///
    /// Text counts as its leading number, so non-numeric text is zero and
    /// picks the plural. Markup never selects a variant.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "counts beyond 2^53 select the plural either way"
    )]
    pub fn selector(&self) -> Option<Selector> {
        match self {
            Self::Text(text) => Some(Selector::Count(leading_number(text))),
            Self::Integer(value) => Some(Selector::Count(*value as f64)),
            Self::Float(value) => Some(Selector::Count(*value)),
            Self::Number(number) => Some(Selector::Count(number.value())),
            Self::Person(person) => Some(Selector::Person(person.sex())),
            Self::Markup(_) => None,
        }
    }

    /// Whether the argument carries pre-escaped markup.
    #[must_use]
    pub const fn is_markup(&self) -> bool {
        matches!(self, Self::Markup(_))
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Arg {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for Arg {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<usize> for Arg {
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or_else(|_| Self::Text(value.to_string()), Self::Integer)
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Number> for Arg {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<Person> for Arg {
    fn from(value: Person) -> Self {
        Self::Person(value)
    }
}

impl From<SafeMarkup> for Arg {
    fn from(value: SafeMarkup) -> Self {
        Self::Markup(value)
    }
}
