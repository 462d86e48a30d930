use thiserror::Error;

/// Validation and contract errors exposed by `fxdraw-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ticket list cannot be empty")]
    EmptyRoster,
    #[error("name '{name}' appears more than once in the ticket list")]
    DuplicateEntry { name: String },

    #[error("invalid reference date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },
}

/// Coarse classification of rate retrieval failures.
///
/// `Unavailable` covers everything between us and the provider (network,
/// timeout, non-2xx status). `Integrity` covers responses that arrived but do
/// not line up with the expected currency set or the documented SDMX layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateErrorKind {
    Unavailable,
    Integrity,
}

/// Errors raised while retrieving or canonicalizing daily exchange rates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RateError {
    #[error("could not retrieve exchange rates for {date}: {reason}")]
    Unavailable { date: String, reason: String },

    #[error("response for {date} does not match the expected SDMX layout: {detail}")]
    MalformedResponse { date: String, detail: String },

    #[error("only {actual} currency codes received for {date}, expected {expected}")]
    CodeCount {
        date: String,
        actual: usize,
        expected: usize,
    },

    #[error("only {actual} rate values received for {date}, expected {expected}")]
    ValueCount {
        date: String,
        actual: usize,
        expected: usize,
    },

    #[error("currency '{code}' appears more than once in the rate data")]
    DuplicateCode { code: String },
}

impl RateError {
    pub const fn kind(&self) -> RateErrorKind {
        match self {
            Self::Unavailable { .. } => RateErrorKind::Unavailable,
            Self::MalformedResponse { .. }
            | Self::CodeCount { .. }
            | Self::ValueCount { .. }
            | Self::DuplicateCode { .. } => RateErrorKind::Integrity,
        }
    }
}

/// Top-level error type for draw operations.
#[derive(Debug, Error)]
pub enum DrawError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Rates(#[from] RateError),
}
