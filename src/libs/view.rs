use super::worklog::WorklogEntry;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn worklogs(entries: &[WorklogEntry]) {
        let mut table = Table::new();

        table.add_row(row!["WORKLOG ID", "TICKET", "DATE", "START", "HOURS"]);
        for entry in entries {
            let worklog_id = entry.tempo_worklog_id.map_or_else(|| "-".to_string(), |id| id.to_string());
            table.add_row(row![
                worklog_id,
                entry.issue_key,
                entry.start_date,
                entry.start_time,
                format!("{:.2}", entry.hours())
            ]);
        }
        table.printstd();
    }
}
