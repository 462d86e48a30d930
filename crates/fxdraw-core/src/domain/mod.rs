pub mod currency;
pub mod date;
pub mod rates;
pub mod roster;
pub mod seed;

pub use currency::CURRENCIES;
pub use date::RateDate;
pub use rates::{CanonicalRates, RateTable};
pub use roster::Roster;
pub use seed::Seed;
