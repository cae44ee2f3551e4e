//! Calendar arithmetic: inclusive date ranges, weekday rules and the
//! conversion of local clock times to UTC instants.

use crate::libs::error::FillError;
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;
use std::ops::RangeInclusive;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Years accepted on the command line.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1..=9999;

/// Longest range a single run may cover (ten years).
pub const MAX_RANGE_DAYS: i64 = 3653;

/// Inclusive range of calendar days.
///
/// Explicit ranges are always non-empty. An inferred range may be empty
/// (`start > end`) when everything up to this week's Friday is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, FillError> {
        if start > end {
            return Err(FillError::Validation(format!(
                "start date {} is after end date {}",
                start, end
            )));
        }
        if (end - start).num_days() >= MAX_RANGE_DAYS {
            return Err(FillError::Validation(format!(
                "range {} to {} is longer than ten years",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// Parses `--from` / `--to` values.
    pub fn parse(from: &str, to: &str) -> Result<Self, FillError> {
        Self::new(parse_date("--from", from)?, parse_date("--to", to)?)
    }

    /// Weekly range: the day after `last_logged` through the Friday of the
    /// week containing `today`.
    pub fn after_last_logged(last_logged: NaiveDate, today: NaiveDate) -> Result<Self, FillError> {
        Ok(Self {
            start: add_days(last_logged, 1)?,
            end: friday_of_week(today)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }

    /// Every calendar year the range touches.
    pub fn years(&self) -> RangeInclusive<i32> {
        self.start.year()..=self.end.year()
    }

    /// UTC instants covering the whole range in `tz`: local midnight of the
    /// first day to the last second of the last day.
    pub fn utc_bounds(&self, tz: Tz) -> Result<(DateTime<Utc>, DateTime<Utc>), FillError> {
        let after_end = add_days(self.end, 1)?;
        let start = local_to_utc(tz, self.start, NaiveTime::MIN).ok_or_else(|| out_of_range(self.start))?;
        let end = local_to_utc(tz, after_end, NaiveTime::MIN)
            .and_then(|instant| instant.checked_sub_signed(Duration::seconds(1)))
            .ok_or_else(|| out_of_range(self.end))?;
        Ok((start, end))
    }
}

pub fn parse_date(flag: &str, raw: &str) -> Result<NaiveDate, FillError> {
    let date = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| FillError::Validation(format!("{} '{}' is not a date in YYYY-MM-DD format", flag, raw)))?;
    if !SUPPORTED_YEARS.contains(&date.year()) {
        return Err(FillError::Validation(format!(
            "{} '{}' must be between years {} and {}",
            flag,
            raw,
            SUPPORTED_YEARS.start(),
            SUPPORTED_YEARS.end()
        )));
    }
    Ok(date)
}

/// `date` shifted by `days`, or a validation error past chrono's calendar.
pub fn add_days(date: NaiveDate, days: i64) -> Result<NaiveDate, FillError> {
    date.checked_add_signed(Duration::days(days)).ok_or_else(|| out_of_range(date))
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Friday of the ISO week (Monday to Sunday) containing `date`.
///
/// On Saturday and Sunday this is the Friday that just passed.
pub fn friday_of_week(date: NaiveDate) -> Result<NaiveDate, FillError> {
    let offset = Weekday::Fri.num_days_from_monday() as i64 - date.weekday().num_days_from_monday() as i64;
    add_days(date, offset)
}

/// The instant `time` on `date` in `tz`, or `None` when that local time is
/// skipped by a DST transition. Ambiguous times resolve to the earlier one.
pub fn local_instant(tz: Tz, date: NaiveDate, time: NaiveTime) -> Option<DateTime<Utc>> {
    tz.from_local_datetime(&date.and_time(time))
        .earliest()
        .map(|instant| instant.with_timezone(&Utc))
}

/// Current calendar date in `tz`.
pub fn today(tz: Tz) -> NaiveDate {
    local_date(tz, Utc::now())
}

/// Calendar date of `instant` as seen in `tz`.
pub fn local_date(tz: Tz, instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

fn local_to_utc(tz: Tz, date: NaiveDate, time: NaiveTime) -> Option<DateTime<Utc>> {
    if let Some(instant) = local_instant(tz, date, time) {
        return Some(instant);
    }
    // Midnight skipped by DST: shift by the offset in force an hour later.
    let later = date.and_time(time).checked_add_signed(Duration::hours(1))?;
    match tz.from_local_datetime(&later).earliest() {
        Some(instant) => instant.with_timezone(&Utc).checked_sub_signed(Duration::hours(1)),
        None => Some(Utc.from_utc_datetime(&date.and_time(time))),
    }
}

fn out_of_range(date: NaiveDate) -> FillError {
    FillError::Validation(format!("date {} is outside the supported calendar", date))
}
