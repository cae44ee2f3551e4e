//! The fill run: resolve IDs, derive the range, plan, confirm, create.
//!
//! Nothing is created until the summary has been printed and, outside
//! dry-run, the user has confirmed. Failures before that point abort the run;
//! a failed entry during creation is recorded and the remaining days are
//! still attempted.

use crate::api::{ApiError, HolidayCalendar, TimeTracker};
use crate::libs::{
    config::Config,
    error::FillError,
    formatter::{format_duration, format_hours},
    holidays::HolidaySet,
    lookup::{self, ResolvedIds},
    messages::Message,
    plan::{self, Plan},
    prompt::Prompter,
    range::{self, DateRange},
    view::View,
};
use crate::{msg_error, msg_info, msg_print, msg_success, msg_warning};
use chrono::{Duration, NaiveDate};

/// Used when the weekly prompt is answered with an empty line.
pub const DEFAULT_DESCRIPTION: &str = "Work";

/// How far back weekly mode looks for the last logged day.
const HISTORY_LOOKBACK_DAYS: i64 = 400;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// `--from`, `--to` and `--desc` given.
    Explicit { range: DateRange, description: String },
    /// No range flags: continue after the last logged day.
    Weekly,
}

impl Mode {
    /// Picks the mode from the range flags: all three set means explicit,
    /// none set means weekly, anything in between is rejected.
    pub fn from_flags(from: Option<&str>, to: Option<&str>, desc: Option<&str>) -> Result<Self, FillError> {
        match (from, to, desc) {
            (None, None, None) => Ok(Mode::Weekly),
            (Some(from), Some(to), Some(desc)) => {
                let description = desc.trim();
                if description.is_empty() {
                    return Err(FillError::Validation("--desc must not be empty".to_string()));
                }
                Ok(Mode::Explicit {
                    range: DateRange::parse(from, to)?,
                    description: description.to_string(),
                })
            }
            _ => {
                let missing: Vec<&str> = [("--from", from), ("--to", to), ("--desc", desc)]
                    .iter()
                    .filter(|(_, value)| value.is_none())
                    .map(|(flag, _)| *flag)
                    .collect();
                Err(FillError::Validation(format!(
                    "{} required to create entries (or pass none of --from/--to/--desc for weekly mode)",
                    missing.join(", ")
                )))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillOptions {
    pub dry_run: bool,
    pub include_weekends: bool,
}

#[derive(Debug)]
pub struct CreationFailure {
    pub date: NaiveDate,
    pub error: ApiError,
}

#[derive(Debug)]
pub enum FillOutcome {
    /// Empty range or every day already logged.
    NothingToDo,
    /// The user did not confirm; nothing was created.
    Declined(Plan),
    DryRun(Plan),
    Completed {
        created: Vec<NaiveDate>,
        failed: Vec<CreationFailure>,
    },
}

pub struct Filler<'a, T, H, P> {
    config: &'a Config,
    tracker: &'a T,
    calendar: &'a H,
    prompter: &'a P,
}

impl<'a, T, H, P> Filler<'a, T, H, P>
where
    T: TimeTracker,
    H: HolidayCalendar,
    P: Prompter,
{
    pub fn new(config: &'a Config, tracker: &'a T, calendar: &'a H, prompter: &'a P) -> Self {
        Self {
            config,
            tracker,
            calendar,
            prompter,
        }
    }

    /// Runs one fill. `today` is the current date in the configured timezone.
    pub async fn run(&self, mode: Mode, options: FillOptions, today: NaiveDate) -> Result<FillOutcome, FillError> {
        let ids = lookup::resolve(self.tracker, self.config).await?;
        let user = self.tracker.current_user().await?;

        let (range, description, last_logged) = match mode {
            Mode::Explicit { range, description } => (range, description, None),
            Mode::Weekly => {
                msg_print!(Message::WeeklyModeIntro);
                msg_print!(Message::WeeklyModeRules);

                let last = self.last_logged_date(&ids, &user.id, today).await?.ok_or(FillError::NoHistory)?;

                let range = DateRange::after_last_logged(last, today)?;
                if range.is_empty() {
                    msg_info!(Message::NoPendingWorkdays);
                    return Ok(FillOutcome::NothingToDo);
                }

                let description = self
                    .prompter
                    .input(&Message::PromptDescription.to_string(), DEFAULT_DESCRIPTION)?;
                (range, description, Some(last))
            }
        };

        let plan = self.plan(&ids, &user.id, range, &description, options.include_weekends).await?;
        self.print_summary(&plan, last_logged);

        if plan.is_empty() {
            msg_info!(Message::AllDaysAlreadyLogged);
            return Ok(FillOutcome::NothingToDo);
        }

        if options.dry_run {
            let (start, end) = self.config.schedule();
            for day in &plan.days {
                msg_print!(Message::DryRunEntry {
                    date: day.date,
                    schedule: format!("{}-{}", start, end),
                    description: day.description.clone(),
                });
            }
            msg_print!(
                Message::DryRunCompleted {
                    count: plan.len(),
                    total: total_label(&plan.total_duration()),
                },
                true
            );
            return Ok(FillOutcome::DryRun(plan));
        }

        if !self.prompter.confirm(&Message::ConfirmCreateEntries.to_string())? {
            msg_info!(Message::OperationCancelled);
            return Ok(FillOutcome::Declined(plan));
        }

        Ok(self.create(&ids, &plan).await)
    }

    /// Plans `range` against the existing entries and the holiday calendar.
    pub async fn plan(
        &self,
        ids: &ResolvedIds,
        user_id: &str,
        range: DateRange,
        description: &str,
        include_weekends: bool,
    ) -> Result<Plan, FillError> {
        let tz = self.config.timezone;
        let (start, end) = range.utc_bounds(tz)?;
        let existing = self
            .tracker
            .time_entries(&ids.workspace_id, user_id, &ids.project_id, start, end)
            .await?;
        let logged = plan::logged_dates(&existing, &ids.project_id, tz);
        tracing::debug!(entries = existing.len(), days = logged.len(), "existing entries loaded");

        let holidays = HolidaySet::fetch(self.calendar, &range).await?;

        Plan::build(self.config, ids, range, description, &holidays, &logged, include_weekends)
    }

    /// Latest local date with an entry in the project, looking back from the
    /// end of this week's Friday.
    async fn last_logged_date(
        &self,
        ids: &ResolvedIds,
        user_id: &str,
        today: NaiveDate,
    ) -> Result<Option<NaiveDate>, FillError> {
        let tz = self.config.timezone;
        let friday = range::friday_of_week(today)?;
        let window = DateRange::new(range::add_days(friday, -HISTORY_LOOKBACK_DAYS)?, friday)?;
        let (start, end) = window.utc_bounds(tz)?;

        let entries = self
            .tracker
            .time_entries(&ids.workspace_id, user_id, &ids.project_id, start, end)
            .await?;
        Ok(plan::logged_dates(&entries, &ids.project_id, tz).into_iter().next_back())
    }

    async fn create(&self, ids: &ResolvedIds, plan: &Plan) -> FillOutcome {
        let mut created = Vec::new();
        let mut failed = Vec::new();

        for day in &plan.days {
            let entry = day.to_entry(&ids.project_id, self.config.billable);
            match self.tracker.create_time_entry(&ids.workspace_id, &entry).await {
                Ok(time_entry) => {
                    msg_success!(Message::EntryCreated {
                        date: day.date,
                        id: time_entry.id,
                        description: day.description.clone(),
                    });
                    created.push(day.date);
                }
                Err(error) => {
                    msg_error!(Message::EntryCreateFailed {
                        date: day.date,
                        error: error.to_string(),
                    });
                    failed.push(CreationFailure { date: day.date, error });
                }
            }
        }

        let created_total = plan
            .days
            .iter()
            .filter(|day| created.contains(&day.date))
            .fold(Duration::zero(), |total, day| total + day.duration());
        msg_print!(
            Message::FillCompleted {
                created: created.len(),
                failed: failed.len(),
                total: total_label(&created_total),
            },
            true
        );
        if !failed.is_empty() {
            msg_warning!(Message::FailedDates(failed.iter().map(|failure| failure.date).collect()));
        }

        FillOutcome::Completed { created, failed }
    }

    fn print_summary(&self, plan: &Plan, last_logged: Option<NaiveDate>) {
        let (start, end) = self.config.schedule();

        msg_print!(Message::SummaryHeader, true);
        if let Some(last) = last_logged {
            msg_print!(format!("   {}", Message::LastLoggedDay(last)));
        }
        msg_print!(Message::SummaryRange(plan.range.start, plan.range.end));
        msg_print!(Message::SummaryDays {
            total: plan.len(),
            work: plan.work_count(),
            holidays: plan.holiday_count(),
        });
        msg_print!(Message::SummaryDescription(plan.description.clone()));
        msg_print!(Message::SummarySchedule(start, end));
        msg_print!(Message::SummaryHoursPerDay(format_duration(&self.config.workday())));
        msg_print!(Message::SummaryTotalHours(total_label(&plan.total_duration())));
        msg_print!(Message::SummaryWeekends(plan.include_weekends));

        if !plan.is_empty() {
            println!();
            View::plan(plan, self.config.timezone);
        }
        println!();
    }
}

fn total_label(duration: &Duration) -> String {
    format!("{} ({})", format_duration(duration), format_hours(duration))
}
