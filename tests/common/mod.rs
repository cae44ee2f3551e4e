#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use clockfill::api::{
    ApiError, HolidayCalendar, NewTimeEntry, Project, Tag, TimeEntry, TimeInterval, TimeTracker, User, Workspace,
};
use clockfill::libs::config::Config;
use reqwest::StatusCode;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Mutex;

pub const WORKSPACE_ID: &str = "ws-1";
pub const PROJECT_ID: &str = "proj-nexstar";
pub const OTHER_PROJECT_ID: &str = "proj-other";
pub const TAG_ID: &str = "tag-php";
pub const HOLIDAY_TAG_ID: &str = "tag-holiday";
pub const USER_ID: &str = "user-1";

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Config with defaults and a fake API key, overridden by `pairs`.
pub fn config_with(pairs: &[(&str, &str)]) -> Config {
    let mut vars: HashMap<String, String> = HashMap::new();
    vars.insert("CLOCKIFY_API_KEY".to_string(), "test-key".to_string());
    for (key, value) in pairs {
        vars.insert(key.to_string(), value.to_string());
    }
    Config::from_lookup(|key| vars.get(key).cloned()).unwrap()
}

pub fn test_config() -> Config {
    config_with(&[])
}

/// Entry of `project_id` starting at 13:00 UTC (08:00 in Bogota) on `day`.
pub fn entry_on(day: NaiveDate, project_id: &str) -> TimeEntry {
    let start = day.and_hms_opt(13, 0, 0).unwrap().and_utc();
    let end = day.and_hms_opt(21, 0, 0).unwrap().and_utc();
    TimeEntry {
        id: format!("entry-{}", day),
        description: Some("existing".to_string()),
        project_id: Some(project_id.to_string()),
        tag_ids: Some(vec![TAG_ID.to_string()]),
        time_interval: TimeInterval {
            start: Some(start),
            end: Some(end),
        },
    }
}

/// In-memory Clockify. Time-entry queries honour the time window only, so
/// entries of other projects come back too.
pub struct FakeTracker {
    pub workspaces: Vec<Workspace>,
    pub projects: Vec<Project>,
    pub tags: Vec<Tag>,
    pub entries: Mutex<Vec<TimeEntry>>,
    pub created: Mutex<Vec<NewTimeEntry>>,
    pub create_attempts: Mutex<usize>,
    /// UTC start dates whose creation fails.
    pub fail_on: HashSet<NaiveDate>,
}

impl Default for FakeTracker {
    fn default() -> Self {
        Self {
            workspaces: vec![Workspace {
                id: WORKSPACE_ID.to_string(),
                name: "Main".to_string(),
            }],
            projects: vec![
                Project {
                    id: PROJECT_ID.to_string(),
                    name: "NexStar".to_string(),
                },
                Project {
                    id: OTHER_PROJECT_ID.to_string(),
                    name: "Other".to_string(),
                },
            ],
            tags: vec![
                Tag {
                    id: TAG_ID.to_string(),
                    name: "PHP".to_string(),
                },
                Tag {
                    id: HOLIDAY_TAG_ID.to_string(),
                    name: "Vacation/Holiday".to_string(),
                },
            ],
            entries: Mutex::new(Vec::new()),
            created: Mutex::new(Vec::new()),
            create_attempts: Mutex::new(0),
            fail_on: HashSet::new(),
        }
    }
}

impl FakeTracker {
    pub fn with_entries(entries: Vec<TimeEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            ..Self::default()
        }
    }

    pub fn created(&self) -> Vec<NewTimeEntry> {
        self.created.lock().unwrap().clone()
    }

    pub fn create_attempts(&self) -> usize {
        *self.create_attempts.lock().unwrap()
    }
}

impl TimeTracker for FakeTracker {
    async fn current_user(&self) -> Result<User, ApiError> {
        Ok(User {
            id: USER_ID.to_string(),
            name: "Tester".to_string(),
        })
    }

    async fn workspaces(&self) -> Result<Vec<Workspace>, ApiError> {
        Ok(self.workspaces.clone())
    }

    async fn projects(&self, _workspace_id: &str) -> Result<Vec<Project>, ApiError> {
        Ok(self.projects.clone())
    }

    async fn tags(&self, _workspace_id: &str) -> Result<Vec<Tag>, ApiError> {
        Ok(self.tags.clone())
    }

    async fn time_entries(
        &self,
        _workspace_id: &str,
        _user_id: &str,
        _project_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<TimeEntry>, ApiError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|entry| matches!(entry.time_interval.start, Some(s) if s >= start && s <= end))
            .cloned()
            .collect())
    }

    async fn create_time_entry(&self, _workspace_id: &str, entry: &NewTimeEntry) -> Result<TimeEntry, ApiError> {
        *self.create_attempts.lock().unwrap() += 1;

        if self.fail_on.contains(&entry.start.date_naive()) {
            return Err(ApiError::Status {
                url: "http://fake/time-entries".to_string(),
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: "boom".to_string(),
            });
        }

        let mut entries = self.entries.lock().unwrap();
        let created = TimeEntry {
            id: format!("new-{}", entries.len() + 1),
            description: Some(entry.description.clone()),
            project_id: Some(entry.project_id.clone()),
            tag_ids: Some(entry.tag_ids.clone()),
            time_interval: TimeInterval {
                start: Some(entry.start),
                end: Some(entry.end),
            },
        };
        entries.push(created.clone());
        self.created.lock().unwrap().push(entry.clone());
        Ok(created)
    }
}

/// In-memory holiday service.
#[derive(Default)]
pub struct FakeCalendar {
    pub holidays: BTreeMap<NaiveDate, String>,
    pub failing_years: HashSet<i32>,
    pub requested: Mutex<Vec<i32>>,
}

impl FakeCalendar {
    pub fn with(holidays: &[(NaiveDate, &str)]) -> Self {
        Self {
            holidays: holidays.iter().map(|(d, n)| (*d, n.to_string())).collect(),
            ..Self::default()
        }
    }

    pub fn failing(year: i32) -> Self {
        Self {
            failing_years: [year].into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn requested(&self) -> Vec<i32> {
        self.requested.lock().unwrap().clone()
    }
}

impl HolidayCalendar for FakeCalendar {
    async fn holidays(&self, year: i32) -> Result<Vec<(NaiveDate, String)>, ApiError> {
        self.requested.lock().unwrap().push(year);
        if self.failing_years.contains(&year) {
            return Err(ApiError::Status {
                url: format!("http://fake/feriados/{}", year),
                status: StatusCode::SERVICE_UNAVAILABLE,
                body: String::new(),
            });
        }
        Ok(self
            .holidays
            .iter()
            .filter(|(d, _)| chrono::Datelike::year(*d) == year)
            .map(|(d, n)| (*d, n.clone()))
            .collect())
    }
}
