use std::convert::Infallible;
use std::str::FromStr;

/// A step parameter with one pair of matching quotes removed.
///
/// Only the outermost pair is stripped, so templates such as `"%s's file"`
/// keep their apostrophes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepText(String);

impl FromStr for StepText {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let unquoted = ['"', '\'']
            .into_iter()
            .find_map(|quote| trimmed.strip_prefix(quote)?.strip_suffix(quote))
            .unwrap_or(trimmed);

        Ok(Self(unquoted.to_owned()))
    }
}

impl StepText {
    /// Consumes the step value, yielding the unquoted string.
    pub fn into_inner(self) -> String {
        self.0
    }
}
