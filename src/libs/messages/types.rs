use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub enum Message {
    // === LISTING MESSAGES ===
    WorkspacesHeader,
    NoWorkspacesFound,
    ProjectsHeader(String),
    NoProjectsFound,
    ProjectsFetchFailed(String),
    TagsHeader(String),
    NoTagsFound,
    TagsFetchFailed(String),
    ListConfigHint,

    // === HOLIDAY TAG CHECK ===
    HolidayTagFound(String),
    HolidayTagMissing(String),
    HolidayTagMissingHint,

    // === WEEKLY MODE ===
    WeeklyModeIntro,
    WeeklyModeRules,
    PromptDescription,
    LastLoggedDay(NaiveDate),
    NoPendingWorkdays,

    // === SUMMARY ===
    SummaryHeader,
    SummaryRange(NaiveDate, NaiveDate),
    SummaryDays { total: usize, work: usize, holidays: usize },
    SummaryDescription(String),
    SummarySchedule(String, String),
    SummaryHoursPerDay(String),
    SummaryTotalHours(String),
    SummaryWeekends(bool),
    AllDaysAlreadyLogged,

    // === CONFIRMATION ===
    ConfirmCreateEntries,
    OperationCancelled,

    // === CREATION ===
    DryRunEntry { date: NaiveDate, schedule: String, description: String },
    EntryCreated { date: NaiveDate, id: String, description: String },
    EntryCreateFailed { date: NaiveDate, error: String },
    DryRunCompleted { count: usize, total: String },
    FillCompleted { created: usize, failed: usize, total: String },
    FailedDates(Vec<NaiveDate>),
}
