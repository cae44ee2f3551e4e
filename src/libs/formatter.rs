//! Duration formatting for summaries.
//!
//! Durations render as `HH:MM`; hours are not capped at 24 so totals over a
//! month read naturally (`176:00`). Negative durations render as `00:00`.
//!
//! ```rust
//! use clockfill::libs::formatter::{format_duration, format_hours};
//! use chrono::Duration;
//!
//! let day = Duration::hours(8) + Duration::minutes(30);
//! assert_eq!(format_duration(&day), "08:30");
//! assert_eq!(format_hours(&day), "8.50h");
//! ```

use chrono::Duration;

pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Decimal hours with two places, as Clockify reports them.
pub fn format_hours(duration: &Duration) -> String {
    let hours = duration.num_minutes().max(0) as f64 / 60.0;
    format!("{:.2}h", hours)
}
