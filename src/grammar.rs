//! Variant grammars: choosing one phrasing among locale-specific candidates.
//!
//! Each locale owns a [`VariantGrammar`] describing how many candidates its
//! variants carry and which one a selector picks. There is no generic
//! fallback rule: a locale without a grammar cannot resolve variants, and a
//! candidate list of the wrong size is rejected rather than guessed at.

use std::fmt;

use crate::args::{Selector, Sex};
use crate::error::ConfigurationError;
use crate::table::Translation;

/// Why a grammar refused a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrammarMismatch {
    /// The candidate count is not one the grammar resolves.
    Arity,
    /// The selector kind does not apply to this candidate count.
    Selector,
}

/// Plural and gender rules for one language.
pub trait VariantGrammar: fmt::Debug + Send + Sync {
    /// Candidate counts this grammar resolves, beyond the single-candidate case.
    fn arities(&self) -> &'static [usize];

    /// Index of the candidate chosen by `selector` among `candidates` entries.
    fn select(&self, candidates: usize, selector: Selector) -> Result<usize, GrammarMismatch>;
}

/// Two forms: singular for exactly one, plural for everything else.
///
/// Used by the English locales.
#[derive(Clone, Copy, Debug, Default)]
pub struct SingularPlural;

impl VariantGrammar for SingularPlural {
    fn arities(&self) -> &'static [usize] {
        &[2]
    }

    fn select(&self, candidates: usize, selector: Selector) -> Result<usize, GrammarMismatch> {
        if candidates != 2 {
            return Err(GrammarMismatch::Arity);
        }
        match selector {
            Selector::Count(count) if is_one(count) => Ok(0),
            Selector::Count(_) => Ok(1),
            Selector::Person(_) => Err(GrammarMismatch::Selector),
        }
    }
}

/// Czech: singular, paucal (two to four), and plural; or male and female
/// forms when selected by a person.
#[derive(Clone, Copy, Debug, Default)]
pub struct Czech;

impl VariantGrammar for Czech {
    fn arities(&self) -> &'static [usize] {
        &[2, 3]
    }

    fn select(&self, candidates: usize, selector: Selector) -> Result<usize, GrammarMismatch> {
        match (selector, candidates) {
            (Selector::Person(Sex::Female), 2) => Ok(1),
            (Selector::Person(_), 2) => Ok(0),
            (Selector::Count(count), 3) if is_one(count) => Ok(0),
            (Selector::Count(count), 3) if (2.0..=4.0).contains(&count) => Ok(1),
            (Selector::Count(_), 3) => Ok(2),
            (Selector::Person(_), 3) | (Selector::Count(_), 2) => Err(GrammarMismatch::Selector),
            _ => Err(GrammarMismatch::Arity),
        }
    }
}

/// Shared singular/plural grammar.
pub static SINGULAR_PLURAL: SingularPlural = SingularPlural;
/// Shared Czech grammar.
pub static CZECH: Czech = Czech;

fn is_one(count: f64) -> bool {
    count.total_cmp(&1.0).is_eq()
}

/// Choose one candidate for `selector` under the grammar of locale `code`.
///
/// A single candidate is returned unconditionally, even without a grammar or
/// selector. Anything else needs both, and a candidate list the grammar
/// cannot resolve is an error.
pub fn choose_variant<'a>(
    code: &str,
    grammar: Option<&dyn VariantGrammar>,
    candidates: &'a [Translation],
    selector: Option<Selector>,
) -> Result<&'a Translation, ConfigurationError> {
    match candidates {
        [] => {
            return Err(ConfigurationError::EmptyVariants {
                locale: code.to_owned(),
            });
        }
        [only] => return Ok(only),
        _ => {}
    }

    let grammar = grammar.ok_or_else(|| ConfigurationError::UnknownLanguage {
        code: code.to_owned(),
    })?;
    let selector = selector.ok_or_else(|| ConfigurationError::MissingSelector {
        locale: code.to_owned(),
    })?;

    let index = grammar
        .select(candidates.len(), selector)
        .map_err(|mismatch| match mismatch {
            GrammarMismatch::Arity => ConfigurationError::UnexpectedArity {
                locale: code.to_owned(),
                expected: grammar.arities(),
                found: candidates.len(),
            },
            GrammarMismatch::Selector => ConfigurationError::UnsupportedSelector {
                locale: code.to_owned(),
                selector: selector.to_string(),
                candidates: candidates.len(),
            },
        })?;

    candidates
        .get(index)
        .ok_or_else(|| ConfigurationError::UnexpectedArity {
            locale: code.to_owned(),
            expected: grammar.arities(),
            found: candidates.len(),
        })
}

/// Check every branch of `translation` against `grammar` ahead of use.
pub(crate) fn validate_shape(
    code: &str,
    grammar: Option<&dyn VariantGrammar>,
    translation: &Translation,
) -> Result<(), ConfigurationError> {
    translation.try_for_each_branch(&mut |candidates: &[Translation]| {
        match (candidates.len(), grammar) {
            (0, _) => Err(ConfigurationError::EmptyVariants {
                locale: code.to_owned(),
            }),
            (1, _) => Ok(()),
            (_, None) => Err(ConfigurationError::UnknownLanguage {
                code: code.to_owned(),
            }),
            (found, Some(grammar)) if grammar.arities().contains(&found) => Ok(()),
            (found, Some(grammar)) => Err(ConfigurationError::UnexpectedArity {
                locale: code.to_owned(),
                expected: grammar.arities(),
                found,
            }),
        }
    })
}
