use std::fmt::{Display, Formatter};

use time::format_description::FormatItem;
use time::macros::format_description;
use time::Date;

use crate::error::ValidationError;

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Reference date for a rate lookup, guaranteed to be a real `YYYY-MM-DD`
/// calendar date.
///
/// Whether the provider actually published rates on the date is not known
/// until the lookup runs; a day without observations fails the count gates in
/// the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RateDate(Date);

impl RateDate {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Date::parse(input, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate {
                value: input.to_owned(),
            })
    }

    pub fn into_inner(self) -> Date {
        self.0
    }

    pub fn format_iso(self) -> String {
        self.0
            .format(DATE_FORMAT)
            .expect("RateDate must be YYYY-MM-DD formattable")
    }
}

impl Display for RateDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso())
    }
}
