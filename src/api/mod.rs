//! Remote services clockfill talks to.
//!
//! Two seams keep the rest of the crate independent from HTTP:
//!
//! - [`TimeTracker`]: the Clockify resources (workspaces, projects, tags,
//!   the current user, time entries).
//! - [`HolidayCalendar`]: the public-holiday list for a given year.
//!
//! [`clockify::Clockify`] and [`holidays::ArgentinaHolidays`] are the real
//! implementations; tests substitute in-memory fakes.

use chrono::{DateTime, NaiveDate, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod clockify;
pub mod holidays;

pub use clockify::Clockify;
pub use holidays::ArgentinaHolidays;

/// Failure of a single remote call.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} timed out after {seconds}s")]
    Timeout { url: String, seconds: u64 },

    #[error("{url} responded with {status}: {body}")]
    Status { url: String, status: StatusCode, body: String },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected response from {url}: {reason}")]
    Decode { url: String, reason: String },

    /// The last page allowed was still full, so the listing is incomplete.
    #[error("{url} returned more than {pages} pages of time entries; use a shorter date range")]
    TooManyPages { url: String, pages: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Workspace {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeInterval {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

/// A time entry as returned by Clockify.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub tag_ids: Option<Vec<String>>,
    #[serde(default)]
    pub time_interval: TimeInterval,
}

/// Body of the create-time-entry call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTimeEntry {
    #[serde(serialize_with = "serialize_instant")]
    pub start: DateTime<Utc>,
    #[serde(serialize_with = "serialize_instant")]
    pub end: DateTime<Utc>,
    pub billable: bool,
    pub description: String,
    pub project_id: String,
    pub tag_ids: Vec<String>,
}

/// Clockify wants second precision with a literal `Z`.
pub const INSTANT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

fn serialize_instant<S>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&instant.format(INSTANT_FORMAT).to_string())
}

/// Access to the time-tracking service.
#[allow(async_fn_in_trait)]
pub trait TimeTracker {
    /// The user owning the API key.
    async fn current_user(&self) -> Result<User, ApiError>;

    async fn workspaces(&self) -> Result<Vec<Workspace>, ApiError>;

    async fn projects(&self, workspace_id: &str) -> Result<Vec<Project>, ApiError>;

    async fn tags(&self, workspace_id: &str) -> Result<Vec<Tag>, ApiError>;

    /// Entries of `user_id` in `project_id` whose start lies in `[start, end]`.
    async fn time_entries(
        &self,
        workspace_id: &str,
        user_id: &str,
        project_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<TimeEntry>, ApiError>;

    async fn create_time_entry(&self, workspace_id: &str, entry: &NewTimeEntry) -> Result<TimeEntry, ApiError>;
}

/// Source of public-holiday dates.
#[allow(async_fn_in_trait)]
pub trait HolidayCalendar {
    /// Holidays of `year` as `(date, name)` pairs.
    async fn holidays(&self, year: i32) -> Result<Vec<(NaiveDate, String)>, ApiError>;
}
