use crate::api::HolidayCalendar;
use crate::libs::{error::FillError, range::DateRange};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Public holidays, keyed by date, for every year a range touches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    days: BTreeMap<NaiveDate, String>,
}

impl HolidaySet {
    /// Fetches each year of `range` once and unions the results.
    ///
    /// Any failed year aborts the whole lookup.
    pub async fn fetch<H: HolidayCalendar>(calendar: &H, range: &DateRange) -> Result<Self, FillError> {
        let mut set = Self::default();
        for year in range.years() {
            let holidays = calendar
                .holidays(year)
                .await
                .map_err(|source| FillError::HolidayLookup { year, source })?;
            tracing::debug!(year, count = holidays.len(), "holidays loaded");
            set.extend(holidays);
        }
        Ok(set)
    }

    pub fn name(&self, date: NaiveDate) -> Option<&str> {
        self.days.get(&date).map(String::as_str)
    }
}

impl Extend<(NaiveDate, String)> for HolidaySet {
    fn extend<I: IntoIterator<Item = (NaiveDate, String)>>(&mut self, iter: I) {
        self.days.extend(iter);
    }
}

impl FromIterator<(NaiveDate, String)> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, String)>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}
