//! Turns a date range into the list of entries to create.
//!
//! A day is planned when it is inside the range, is not a weekend day (unless
//! weekends are included) and has no entry yet in the resolved project.
//! Holidays get the fixed [`HOLIDAY_DESCRIPTION`] and the holiday tag.

use crate::api::{NewTimeEntry, TimeEntry};
use crate::libs::{
    config::Config,
    error::FillError,
    holidays::HolidaySet,
    lookup::ResolvedIds,
    range::{self, DateRange},
};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use std::collections::BTreeSet;

pub const HOLIDAY_DESCRIPTION: &str = "Holiday";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedDay {
    pub date: NaiveDate,
    /// Holiday name when the day is a public holiday.
    pub holiday: Option<String>,
    pub description: String,
    pub tag_id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl PlannedDay {
    pub fn is_holiday(&self) -> bool {
        self.holiday.is_some()
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn to_entry(&self, project_id: &str, billable: bool) -> NewTimeEntry {
        NewTimeEntry {
            start: self.start,
            end: self.end,
            billable,
            description: self.description.clone(),
            project_id: project_id.to_string(),
            tag_ids: vec![self.tag_id.clone()],
        }
    }
}

/// Ordered plan for a run, identical in dry-run and real mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub range: DateRange,
    pub description: String,
    pub include_weekends: bool,
    pub days: Vec<PlannedDay>,
}

impl Plan {
    pub fn build(
        config: &Config,
        ids: &ResolvedIds,
        range: DateRange,
        description: &str,
        holidays: &HolidaySet,
        logged: &BTreeSet<NaiveDate>,
        include_weekends: bool,
    ) -> Result<Self, FillError> {
        let mut days = Vec::new();
        for date in range.days() {
            if !include_weekends && range::is_weekend(date) {
                continue;
            }
            if logged.contains(&date) {
                tracing::debug!(%date, "already logged, skipping");
                continue;
            }

            let holiday = holidays.name(date).map(str::to_string);
            let (description, tag_id) = match holiday {
                Some(_) => (HOLIDAY_DESCRIPTION.to_string(), ids.holiday_tag_id.clone()),
                None => (description.to_string(), ids.tag_id.clone()),
            };

            days.push(PlannedDay {
                date,
                holiday,
                description,
                tag_id,
                start: instant(config, date, config.start_time)?,
                end: instant(config, date, config.end_time)?,
            });
        }

        Ok(Self {
            range,
            description: description.to_string(),
            include_weekends,
            days,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn holiday_count(&self) -> usize {
        self.days.iter().filter(|day| day.is_holiday()).count()
    }

    pub fn work_count(&self) -> usize {
        self.len() - self.holiday_count()
    }

    pub fn total_duration(&self) -> Duration {
        self.days.iter().fold(Duration::zero(), |total, day| total + day.duration())
    }
}

/// Local dates (in `tz`) that already carry an entry of `project_id`.
pub fn logged_dates(entries: &[TimeEntry], project_id: &str, tz: Tz) -> BTreeSet<NaiveDate> {
    entries
        .iter()
        .filter(|entry| entry.project_id.as_deref() == Some(project_id))
        .filter_map(|entry| entry.time_interval.start)
        .map(|start| range::local_date(tz, start))
        .collect()
}

fn instant(config: &Config, date: NaiveDate, time: chrono::NaiveTime) -> Result<DateTime<Utc>, FillError> {
    range::local_instant(config.timezone, date, time).ok_or_else(|| {
        FillError::Validation(format!(
            "{} {} does not exist in {}",
            date,
            time.format("%H:%M"),
            config.timezone
        ))
    })
}
