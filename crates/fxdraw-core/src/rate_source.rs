use std::future::Future;
use std::pin::Pin;

use crate::domain::{CanonicalRates, RateDate};
use crate::error::RateError;

/// Source of canonical daily rate strings.
///
/// The production implementation queries the Norges Bank SDMX API; tests
/// substitute scripted sources so draws replay against known rate data.
pub trait RateSource: Send + Sync {
    fn canonical_rates<'a>(
        &'a self,
        date: RateDate,
    ) -> Pin<Box<dyn Future<Output = Result<CanonicalRates, RateError>> + Send + 'a>>;
}
