use crate::api::{Project, Tag, Workspace};
use crate::libs::{formatter::format_duration, plan::Plan};
use chrono_tz::Tz;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn workspaces(workspaces: &[Workspace]) {
        let mut table = Table::new();

        table.add_row(row!["#", "WORKSPACE", "ID"]);
        for (index, workspace) in workspaces.iter().enumerate() {
            table.add_row(row![index + 1, workspace.name, workspace.id]);
        }
        table.printstd();
    }

    pub fn projects(projects: &[Project]) {
        let mut table = Table::new();

        table.add_row(row!["#", "PROJECT", "ID"]);
        for (index, project) in projects.iter().enumerate() {
            table.add_row(row![index + 1, project.name, project.id]);
        }
        table.printstd();
    }

    /// Tags table; the row named `highlight` gets a marker.
    pub fn tags(tags: &[Tag], highlight: Option<&str>) {
        let mut table = Table::new();

        table.add_row(row!["#", "TAG", "ID", ""]);
        for (index, tag) in tags.iter().enumerate() {
            let mark = if highlight == Some(tag.name.as_str()) { "← holidays" } else { "" };
            table.add_row(row![index + 1, tag.name, tag.id, mark]);
        }
        table.printstd();
    }

    /// Planned days with their local schedule in `tz`.
    pub fn plan(plan: &Plan, tz: Tz) {
        let mut table = Table::new();

        table.add_row(row!["DATE", "DAY", "SCHEDULE", "DURATION", "DESCRIPTION", "HOLIDAY"]);
        for day in &plan.days {
            table.add_row(row![
                day.date,
                day.date.format("%a"),
                format!(
                    "{} - {}",
                    day.start.with_timezone(&tz).format("%H:%M"),
                    day.end.with_timezone(&tz).format("%H:%M")
                ),
                format_duration(&day.duration()),
                day.description,
                day.holiday.as_deref().unwrap_or("")
            ]);
        }
        table.printstd();
    }
}
