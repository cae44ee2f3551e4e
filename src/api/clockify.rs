//! Clockify REST client (API v1).
//!
//! Authenticates every request with the `X-Api-Key` header.
//!
//! ```rust,no_run
//! use clockfill::api::{Clockify, TimeTracker};
//! use clockfill::libs::config::Config;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! let clockify = Clockify::new(&config)?;
//! for workspace in clockify.workspaces().await? {
//!     println!("{} ({})", workspace.name, workspace.id);
//! }
//! # Ok(())
//! # }
//! ```

use super::{ApiError, NewTimeEntry, Project, Tag, TimeEntry, TimeTracker, User, Workspace, INSTANT_FORMAT};
use crate::libs::{
    config::{Config, API_KEY_VAR},
    error::FillError,
    http::Http,
};
use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

const API_KEY_HEADER: &str = "X-Api-Key";
const LIST_PAGE_SIZE: &str = "5000";
const NO_QUERY: &[(&str, &str)] = &[];
/// Time entries are walked page by page, stopping at the first short page.
pub const ENTRIES_PAGE_SIZE: usize = 500;
pub const MAX_ENTRY_PAGES: usize = 50;

#[derive(Debug, Clone)]
pub struct Clockify {
    http: Http,
    api_url: String,
}

impl Clockify {
    pub fn new(config: &Config) -> Result<Self, FillError> {
        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| FillError::Configuration(format!("{} is not a valid header value", API_KEY_VAR)))?;
        headers.insert(API_KEY_HEADER, api_key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(Self {
            http: Http::new(config.http_timeout, config.http_attempts, headers)?,
            api_url: config.api_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }
}

impl TimeTracker for Clockify {
    async fn current_user(&self) -> Result<User, ApiError> {
        self.http.get_json(&self.url("user"), NO_QUERY).await
    }

    async fn workspaces(&self) -> Result<Vec<Workspace>, ApiError> {
        self.http.get_json(&self.url("workspaces"), NO_QUERY).await
    }

    async fn projects(&self, workspace_id: &str) -> Result<Vec<Project>, ApiError> {
        let url = self.url(&format!("workspaces/{}/projects", workspace_id));
        self.http.get_json(&url, &[("page-size", LIST_PAGE_SIZE)]).await
    }

    async fn tags(&self, workspace_id: &str) -> Result<Vec<Tag>, ApiError> {
        let url = self.url(&format!("workspaces/{}/tags", workspace_id));
        self.http.get_json(&url, &[("page-size", LIST_PAGE_SIZE)]).await
    }

    async fn time_entries(
        &self,
        workspace_id: &str,
        user_id: &str,
        project_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<TimeEntry>, ApiError> {
        let url = self.url(&format!("workspaces/{}/user/{}/time-entries", workspace_id, user_id));
        let start = start.format(INSTANT_FORMAT).to_string();
        let end = end.format(INSTANT_FORMAT).to_string();
        let page_size = ENTRIES_PAGE_SIZE.to_string();

        let mut entries = Vec::new();
        for page in 1..=MAX_ENTRY_PAGES {
            let page = page.to_string();
            let query = [
                ("start", start.as_str()),
                ("end", end.as_str()),
                ("project", project_id),
                ("page", page.as_str()),
                ("page-size", page_size.as_str()),
            ];
            let batch: Vec<TimeEntry> = self.http.get_json(&url, &query).await?;
            let last_page = batch.len() < ENTRIES_PAGE_SIZE;
            entries.extend(batch);
            if last_page {
                return Ok(entries);
            }
        }
        Err(ApiError::TooManyPages {
            url,
            pages: MAX_ENTRY_PAGES,
        })
    }

    async fn create_time_entry(&self, workspace_id: &str, entry: &NewTimeEntry) -> Result<TimeEntry, ApiError> {
        let url = self.url(&format!("workspaces/{}/time-entries", workspace_id));
        self.http.post_json(&url, entry).await
    }
}
