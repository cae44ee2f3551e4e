//! Display implementation for clockfill messages.
//!
//! All user-facing text is produced here so command handlers only deal with
//! `Message` variants and their typed parameters.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === LISTING MESSAGES ===
            Message::WorkspacesHeader => "🔍 Available workspaces:".to_string(),
            Message::NoWorkspacesFound => "No workspaces found in your account.".to_string(),
            Message::ProjectsHeader(workspace) => format!("📁 Projects in '{}':", workspace),
            Message::NoProjectsFound => "No projects.".to_string(),
            Message::ProjectsFetchFailed(error) => format!("Failed to fetch projects: {}", error),
            Message::TagsHeader(workspace) => format!("🏷️  Tags in '{}':", workspace),
            Message::NoTagsFound => "No tags.".to_string(),
            Message::TagsFetchFailed(error) => format!("Failed to fetch tags: {}", error),
            Message::ListConfigHint => [
                "💡 Copy the names you need into your environment or .env file:",
                "   CLOCKIFY_WORKSPACE=<workspace name>   # leave unset to use the first one",
                "   CLOCKIFY_PROJECT=<project name>",
                "   CLOCKIFY_TAG=<tag name>",
                "   CLOCKIFY_HOLIDAY_TAG=<holiday tag name>   # e.g. Vacation/Holiday",
            ]
            .join("\n"),

            // === HOLIDAY TAG CHECK ===
            Message::HolidayTagFound(name) => format!("Holiday tag '{}' found.", name),
            Message::HolidayTagMissing(name) => format!("Holiday tag '{}' does NOT exist.", name),
            Message::HolidayTagMissingHint => {
                "Create a tag with that name in Clockify or set CLOCKIFY_HOLIDAY_TAG.".to_string()
            }

            // === WEEKLY MODE ===
            Message::WeeklyModeIntro => {
                "📅 Weekly mode: logging hours from the last logged day through this week's Friday.".to_string()
            }
            Message::WeeklyModeRules => {
                "   (Mon-Fri only; days that already have hours are skipped; AR holidays are logged as Holiday.)".to_string()
            }
            Message::PromptDescription => "What did you work on?".to_string(),
            Message::LastLoggedDay(date) => format!("Last day with hours: {}", date),
            Message::NoPendingWorkdays => "No pending workdays in this range. Nothing to do.".to_string(),

            // === SUMMARY ===
            Message::SummaryHeader => "📅 Summary:".to_string(),
            Message::SummaryRange(start, end) => format!("   Range: {} → {}", start, end),
            Message::SummaryDays { total, work, holidays } => {
                format!("   Days to create: {} ({} work + {} AR holidays)", total, work, holidays)
            }
            Message::SummaryDescription(description) => format!("   Description (work): {}", description),
            Message::SummarySchedule(start, end) => format!("   Schedule: {} - {}", start, end),
            Message::SummaryHoursPerDay(duration) => format!("   Hours per day: {}", duration),
            Message::SummaryTotalHours(duration) => format!("   Total hours: {}", duration),
            Message::SummaryWeekends(included) => {
                format!("   Weekends included: {}", if *included { "yes" } else { "no" })
            }
            Message::AllDaysAlreadyLogged => {
                "Every workday in the range already has hours. Nothing to create.".to_string()
            }

            // === CONFIRMATION ===
            Message::ConfirmCreateEntries => "Create these entries?".to_string(),
            Message::OperationCancelled => "Cancelled. No entries were created.".to_string(),

            // === CREATION ===
            Message::DryRunEntry {
                date,
                schedule,
                description,
            } => format!("[DRY-RUN] {} | {} | {}", date, schedule, description),
            Message::EntryCreated { date, id, description } => {
                format!("[ok] {} created id={} ({})", date, id, description)
            }
            Message::EntryCreateFailed { date, error } => format!("[failed] {}: {}", date, error),
            Message::DryRunCompleted { count, total } => {
                format!("Done. Dry-run entries: {} | Total hours: {}", count, total)
            }
            Message::FillCompleted { created, failed, total } => {
                format!("Done. Entries created: {} | Failed: {} | Total hours: {}", created, failed, total)
            }
            Message::FailedDates(dates) => format!(
                "Failed dates: {}",
                dates.iter().map(|d| d.to_string()).collect::<Vec<_>>().join(", ")
            ),
        };

        write!(f, "{}", text)
    }
}
