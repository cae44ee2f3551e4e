mod common;

#[cfg(test)]
mod tests {
    use super::common::*;
    use chrono::{Duration, TimeZone, Utc};
    use clockfill::api::{TimeEntry, TimeInterval};
    use clockfill::libs::holidays::HolidaySet;
    use clockfill::libs::lookup::ResolvedIds;
    use clockfill::libs::plan::{self, Plan, HOLIDAY_DESCRIPTION};
    use clockfill::libs::prompt::{is_affirmative, Prompter, ScriptedPrompter};
    use clockfill::libs::range::DateRange;
    use std::collections::BTreeSet;

    fn ids() -> ResolvedIds {
        ResolvedIds {
            workspace_id: WORKSPACE_ID.to_string(),
            project_id: PROJECT_ID.to_string(),
            tag_id: TAG_ID.to_string(),
            holiday_tag_id: HOLIDAY_TAG_ID.to_string(),
        }
    }

    #[test]
    fn test_build_marks_holidays_and_skips_logged_days() {
        let config = test_config();
        let range = DateRange::new(date(2025, 5, 1), date(2025, 5, 9)).unwrap();
        let holidays: HolidaySet = [
            (date(2025, 5, 1), "Día del Trabajador".to_string()),
            (date(2025, 5, 3), "Sábado festivo".to_string()),
        ]
        .into_iter()
        .collect();
        let logged: BTreeSet<_> = [date(2025, 5, 6)].into_iter().collect();

        let plan = Plan::build(&config, &ids(), range, "Backlog", &holidays, &logged, false).unwrap();

        let dates: Vec<_> = plan.days.iter().map(|d| d.date).collect();
        assert_eq!(
            dates,
            vec![date(2025, 5, 1), date(2025, 5, 2), date(2025, 5, 5), date(2025, 5, 7), date(2025, 5, 8), date(2025, 5, 9)]
        );
        assert_eq!(plan.holiday_count(), 1);
        assert_eq!(plan.work_count(), 5);
        assert_eq!(plan.total_duration(), Duration::hours(48));

        let may_day = &plan.days[0];
        assert!(may_day.is_holiday());
        assert_eq!(may_day.description, HOLIDAY_DESCRIPTION);
        assert_eq!(may_day.tag_id, HOLIDAY_TAG_ID);
        assert_eq!(may_day.holiday.as_deref(), Some("Día del Trabajador"));

        let friday = &plan.days[1];
        assert!(!friday.is_holiday());
        assert_eq!(friday.description, "Backlog");
        assert_eq!(friday.tag_id, TAG_ID);
        assert_eq!(friday.start, Utc.with_ymd_and_hms(2025, 5, 2, 13, 0, 0).unwrap());
    }

    #[test]
    fn test_holiday_on_weekend_is_planned_only_with_weekends() {
        let config = test_config();
        let range = DateRange::new(date(2025, 5, 3), date(2025, 5, 4)).unwrap();
        let holidays: HolidaySet = [(date(2025, 5, 3), "Feriado".to_string())].into_iter().collect();
        let logged = BTreeSet::new();

        let weekdays_only = Plan::build(&config, &ids(), range, "X", &holidays, &logged, false).unwrap();
        assert!(weekdays_only.is_empty());

        let with_weekends = Plan::build(&config, &ids(), range, "X", &holidays, &logged, true).unwrap();
        assert_eq!(with_weekends.len(), 2);
        assert_eq!(with_weekends.holiday_count(), 1);
    }

    #[test]
    fn test_to_entry() {
        let config = test_config();
        let range = DateRange::new(date(2025, 1, 2), date(2025, 1, 2)).unwrap();
        let plan = Plan::build(&config, &ids(), range, "X", &HolidaySet::default(), &BTreeSet::new(), false).unwrap();

        let entry = plan.days[0].to_entry(PROJECT_ID, false);
        assert_eq!(entry.project_id, PROJECT_ID);
        assert_eq!(entry.tag_ids, vec![TAG_ID.to_string()]);
        assert!(!entry.billable);
        assert_eq!(entry.end - entry.start, Duration::hours(8));
    }

    #[test]
    fn test_skipped_local_time_is_rejected() {
        let config = config_with(&[
            ("CLOCKIFY_TIMEZONE", "America/New_York"),
            ("CLOCKIFY_START_TIME", "02:30"),
            ("CLOCKIFY_END_TIME", "10:30"),
        ]);
        let range = DateRange::new(date(2025, 3, 7), date(2025, 3, 10)).unwrap();
        let result = Plan::build(&config, &ids(), range, "X", &HolidaySet::default(), &BTreeSet::new(), true);
        assert!(result.is_err());
    }

    #[test]
    fn test_logged_dates_use_the_local_calendar() {
        let late_evening = TimeEntry {
            id: "late".to_string(),
            description: None,
            project_id: Some(PROJECT_ID.to_string()),
            tag_ids: None,
            // 23:30 in Bogota on Jan 2.
            time_interval: TimeInterval {
                start: Some(Utc.with_ymd_and_hms(2025, 1, 3, 4, 30, 0).unwrap()),
                end: None,
            },
        };
        let no_start = TimeEntry {
            id: "running".to_string(),
            time_interval: TimeInterval::default(),
            ..late_evening.clone()
        };
        let other_project = entry_on(date(2025, 1, 6), OTHER_PROJECT_ID);
        let no_project = TimeEntry {
            project_id: None,
            ..entry_on(date(2025, 1, 7), PROJECT_ID)
        };

        let logged = plan::logged_dates(
            &[late_evening, no_start, other_project, no_project, entry_on(date(2025, 1, 8), PROJECT_ID)],
            PROJECT_ID,
            chrono_tz::America::Bogota,
        );
        assert_eq!(logged.into_iter().collect::<Vec<_>>(), vec![date(2025, 1, 2), date(2025, 1, 8)]);
    }

    #[test]
    fn test_affirmative_answers() {
        for answer in ["y", "Y", "yes", " YES ", "s", "si", "Sí"] {
            assert!(is_affirmative(answer), "{}", answer);
        }
        for answer in ["", "n", "no", "nope", "sure"] {
            assert!(!is_affirmative(answer), "{}", answer);
        }
    }

    #[test]
    fn test_scripted_prompter() {
        let prompter = ScriptedPrompter::new(["  Code review ", "si"]);
        assert_eq!(prompter.input("What?", "Work").unwrap(), "Code review");
        assert!(prompter.confirm("Go?").unwrap());
        // Script exhausted.
        assert_eq!(prompter.input("Again?", "Work").unwrap(), "Work");
        assert!(!prompter.confirm("Go again?").unwrap());
        assert_eq!(prompter.asked(), vec!["What?", "Go?", "Again?", "Go again?"]);
    }
}
