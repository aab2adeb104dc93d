//! Date source for templated content.

use chrono::{Local, NaiveDate};

use crate::paths::DATE_FORMAT;

/// Supplies "today" to the scaffolder.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date from the wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Today's date as `YYYY-MM-DD`.
pub fn render_date(clock: &dyn Clock) -> String {
    clock.today().format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` date as given on the command line or in settings.
pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
}
