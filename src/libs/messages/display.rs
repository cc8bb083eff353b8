//! Display implementation for workbook application messages.
//!
//! All user-facing text lives in this one match so that wording stays
//! consistent between `populate` and `dump`.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === WORKBOOK MESSAGES ===
            Message::WorkbookLoaded { path, days } => format!("Loaded {} day(s) from {}", days, path),
            Message::WorkbookEmpty(path) => format!("No days declared in {}, nothing to do.", path),

            // === POPULATE MESSAGES ===
            Message::NoDifferences(date) => format!("No differences found for {}", date),
            Message::DifferencesFound(date) => format!("Differences found in worklog for date {}", date),
            Message::WorklogDeleted { id, ticket } => format!("Deleted worklog {} ({})", id, ticket),
            Message::WorklogCreated { ticket, start, hours } => {
                format!("Created worklog {} at {} ({:.2}h)", ticket, start, hours)
            }
            Message::PopulateCompleted { unchanged, changed } => {
                format!("Worklogs are in sync: {} day(s) unchanged, {} day(s) updated", unchanged, changed)
            }

            // === DRY RUN MESSAGES ===
            Message::DryRunEnabled => "Dry run: no worklog will be deleted or created".to_string(),
            Message::DryRunHeader(date) => format!("Planned changes for {}", date),
            Message::DryRunWouldDelete(count) => format!("Would delete {} worklog(s):", count),
            Message::DryRunWouldCreate(count) => format!("Would create {} worklog(s):", count),
            Message::DryRunNothingToDelete => "Nothing to delete".to_string(),
            Message::DryRunNothingToCreate => "Nothing to create".to_string(),
            Message::DryRunCompleted(count) => format!("Dry run finished: {} day(s) would change", count),

            // === DUMP MESSAGES ===
            Message::DumpStarted { start, end } => format!("Dumping worklogs from {} until {} (exclusive)", start, end),
            Message::DumpEmptyRange => "Start and end date are equal, the range holds no days".to_string(),
            Message::DumpCompleted(count) => format!("Dumped {} day(s) with worklogs", count),

            // === ERROR MESSAGES ===
            Message::RunAborted => "Run aborted, changes made to earlier days are kept".to_string(),
        };
        write!(f, "{}", text)
    }
}
