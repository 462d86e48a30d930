use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use crate::error::RateError;

/// One day of exchange-rate observations, keyed by currency code.
///
/// Holds exactly one raw value string per code; a repeated code is rejected
/// at construction. The table does not fix how many codes it holds: the
/// provider adapter enforces the expected cardinality before building one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    rates: BTreeMap<String, String>,
}

impl RateTable {
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, RateError> {
        let mut rates = BTreeMap::new();
        for (code, value) in pairs {
            if rates.insert(code.clone(), value).is_some() {
                return Err(RateError::DuplicateCode { code });
            }
        }
        Ok(Self { rates })
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.rates.get(code).map(String::as_str)
    }

    /// Reduce the table to its canonical string: value strings joined in
    /// ascending code order with every decimal point removed.
    ///
    /// The result depends only on table content, never on the order pairs
    /// arrived in. Digits keep full provider precision, so "8.1234"
    /// contributes "81234".
    pub fn canonical(&self) -> CanonicalRates {
        let joined: String = self
            .rates
            .values()
            .flat_map(|value| value.chars())
            .filter(|c| *c != '.')
            .collect();
        CanonicalRates::new(joined)
    }
}

/// Canonical rate string: the deterministic reduction of one day of
/// observations, as produced by [`RateTable::canonical`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRates(String);

impl CanonicalRates {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for CanonicalRates {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
