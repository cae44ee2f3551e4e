//! Run configuration.
//!
//! Settings come from environment variables, optionally populated from a
//! `.env` file in the working directory (variables already set in the
//! environment win). Everything except the API key has a compiled-in default.
//!
//! | variable | default |
//! |---|---|
//! | `CLOCKIFY_API_KEY` | required |
//! | `CLOCKIFY_WORKSPACE` | first workspace of the account |
//! | `CLOCKIFY_PROJECT` | `NexStar` |
//! | `CLOCKIFY_TAG` | `PHP` |
//! | `CLOCKIFY_HOLIDAY_TAG` | `Vacation/Holiday` |
//! | `CLOCKIFY_TIMEZONE` | `America/Bogota` |
//! | `CLOCKIFY_START_TIME` | `08:00` |
//! | `CLOCKIFY_END_TIME` | `16:00` |
//! | `CLOCKIFY_BILLABLE` | `true` |
//! | `CLOCKIFY_API_URL` | `https://api.clockify.me/api/v1` |
//! | `HOLIDAYS_API_URL` | `https://api.argentinadatos.com/v1/feriados` |
//! | `CLOCKFILL_HTTP_TIMEOUT` | `10` (seconds) |
//! | `CLOCKFILL_HTTP_ATTEMPTS` | `2` (GET requests only) |
//!
//! ```rust,no_run
//! use clockfill::libs::config::Config;
//!
//! let config = Config::from_env()?;
//! println!("Logging to project {}", config.project);
//! # Ok::<(), clockfill::libs::error::FillError>(())
//! ```

use crate::libs::error::FillError;
use chrono::{Duration, NaiveTime};
use chrono_tz::Tz;
use reqwest::header::HeaderValue;
use std::path::Path;
use std::time::Duration as StdDuration;

pub const API_KEY_VAR: &str = "CLOCKIFY_API_KEY";
pub const WORKSPACE_VAR: &str = "CLOCKIFY_WORKSPACE";
pub const PROJECT_VAR: &str = "CLOCKIFY_PROJECT";
pub const TAG_VAR: &str = "CLOCKIFY_TAG";
pub const HOLIDAY_TAG_VAR: &str = "CLOCKIFY_HOLIDAY_TAG";
pub const TIMEZONE_VAR: &str = "CLOCKIFY_TIMEZONE";
pub const START_TIME_VAR: &str = "CLOCKIFY_START_TIME";
pub const END_TIME_VAR: &str = "CLOCKIFY_END_TIME";
pub const BILLABLE_VAR: &str = "CLOCKIFY_BILLABLE";
pub const API_URL_VAR: &str = "CLOCKIFY_API_URL";
pub const HOLIDAYS_URL_VAR: &str = "HOLIDAYS_API_URL";
pub const HTTP_TIMEOUT_VAR: &str = "CLOCKFILL_HTTP_TIMEOUT";
pub const HTTP_ATTEMPTS_VAR: &str = "CLOCKFILL_HTTP_ATTEMPTS";

pub const DEFAULT_PROJECT: &str = "NexStar";
pub const DEFAULT_TAG: &str = "PHP";
pub const DEFAULT_HOLIDAY_TAG: &str = "Vacation/Holiday";
pub const DEFAULT_TIMEZONE: &str = "America/Bogota";
pub const DEFAULT_START_TIME: &str = "08:00";
pub const DEFAULT_END_TIME: &str = "16:00";
pub const DEFAULT_API_URL: &str = "https://api.clockify.me/api/v1";
pub const DEFAULT_HOLIDAYS_URL: &str = "https://api.argentinadatos.com/v1/feriados";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
const DEFAULT_HTTP_ATTEMPTS: u32 = 2;

/// Value shipped in old setups in place of a real key.
const API_KEY_PLACEHOLDER: &str = "PON_AQUI_TU_API_KEY";

const CLOCK_FORMAT: &str = "%H:%M";

/// Immutable settings for a single run.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_key: String,
    /// `None` selects the first workspace of the account.
    pub workspace: Option<String>,
    pub project: String,
    pub tag: String,
    pub holiday_tag: String,
    pub timezone: Tz,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub billable: bool,
    pub api_url: String,
    pub holidays_url: String,
    pub http_timeout: StdDuration,
    pub http_attempts: u32,
}

impl Config {
    /// Loads `.env` from the working directory if present, then reads the
    /// process environment.
    pub fn from_env() -> Result<Self, FillError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`] but reads the dotenv file at `path`.
    pub fn from_env_file(path: &Path) -> Result<Self, FillError> {
        dotenv::from_path(path).map_err(|e| FillError::Configuration(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, FillError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let or_default = |key: &str, default: &str| value(key).unwrap_or_else(|| default.to_string());

        let api_key = value(API_KEY_VAR)
            .filter(|key| key != API_KEY_PLACEHOLDER)
            .ok_or_else(|| FillError::Configuration(format!("{} is not set", API_KEY_VAR)))?;
        if HeaderValue::from_str(&api_key).is_err() {
            return Err(FillError::Configuration(format!(
                "{} contains characters that cannot be sent in an HTTP header",
                API_KEY_VAR
            )));
        }

        let timezone_name = or_default(TIMEZONE_VAR, DEFAULT_TIMEZONE);
        let timezone: Tz = timezone_name
            .parse()
            .map_err(|_| invalid(TIMEZONE_VAR, &timezone_name, "expected an IANA timezone such as America/Bogota"))?;

        let start_time = parse_clock(START_TIME_VAR, &or_default(START_TIME_VAR, DEFAULT_START_TIME))?;
        let end_time = parse_clock(END_TIME_VAR, &or_default(END_TIME_VAR, DEFAULT_END_TIME))?;
        if end_time <= start_time {
            return Err(FillError::Configuration(format!(
                "{} ({}) must be later than {} ({})",
                END_TIME_VAR,
                end_time.format(CLOCK_FORMAT),
                START_TIME_VAR,
                start_time.format(CLOCK_FORMAT)
            )));
        }

        let billable = match value(BILLABLE_VAR) {
            None => true,
            Some(raw) => parse_bool(&raw).ok_or_else(|| invalid(BILLABLE_VAR, &raw, "expected true or false"))?,
        };

        let http_timeout = match value(HTTP_TIMEOUT_VAR) {
            None => DEFAULT_HTTP_TIMEOUT_SECS,
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| invalid(HTTP_TIMEOUT_VAR, &raw, "expected a positive number of seconds"))?,
        };

        let http_attempts = match value(HTTP_ATTEMPTS_VAR) {
            None => DEFAULT_HTTP_ATTEMPTS,
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|attempts| *attempts > 0)
                .ok_or_else(|| invalid(HTTP_ATTEMPTS_VAR, &raw, "expected a positive integer"))?,
        };

        Ok(Self {
            api_key,
            workspace: value(WORKSPACE_VAR),
            project: or_default(PROJECT_VAR, DEFAULT_PROJECT),
            tag: or_default(TAG_VAR, DEFAULT_TAG),
            holiday_tag: or_default(HOLIDAY_TAG_VAR, DEFAULT_HOLIDAY_TAG),
            timezone,
            start_time,
            end_time,
            billable,
            api_url: or_default(API_URL_VAR, DEFAULT_API_URL).trim_end_matches('/').to_string(),
            holidays_url: or_default(HOLIDAYS_URL_VAR, DEFAULT_HOLIDAYS_URL)
                .trim_end_matches('/')
                .to_string(),
            http_timeout: StdDuration::from_secs(http_timeout),
            http_attempts,
        })
    }

    /// Length of one logged workday.
    pub fn workday(&self) -> Duration {
        self.end_time - self.start_time
    }

    /// `"08:00"`-style rendering of the daily window.
    pub fn schedule(&self) -> (String, String) {
        (
            self.start_time.format(CLOCK_FORMAT).to_string(),
            self.end_time.format(CLOCK_FORMAT).to_string(),
        )
    }
}

fn parse_clock(key: &str, raw: &str) -> Result<NaiveTime, FillError> {
    NaiveTime::parse_from_str(raw, CLOCK_FORMAT).map_err(|_| invalid(key, raw, "expected HH:MM"))
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

fn invalid(key: &str, raw: &str, expected: &str) -> FillError {
    FillError::Configuration(format!("invalid {} '{}': {}", key, raw, expected))
}
