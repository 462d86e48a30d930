use std::fmt::{Display, Formatter};

use crate::domain::rates::CanonicalRates;

/// Start value for the draw generator: the operator number followed
/// immediately by the canonical rate string.
///
/// The composition is plain concatenation, so the boundary between the two
/// parts is not recoverable from the seed itself: operator number "1" with
/// rates "23456" yields the same seed as operator number "12" with rates
/// "3456". This matches how seeds have always been composed for these
/// ceremonies; the (number, date) pair stays the authoritative record of an
/// individual draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed(String);

impl Seed {
    pub fn compose(operator_number: &str, rates: &CanonicalRates) -> Self {
        Self(format!("{}{}", operator_number, rates.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Seed {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
