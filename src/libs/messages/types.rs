#[derive(Debug, Clone)]
pub enum Message {
    // === WORKBOOK MESSAGES ===
    WorkbookLoaded { path: String, days: usize },
    WorkbookEmpty(String), // path

    // === POPULATE MESSAGES ===
    NoDifferences(String),    // date
    DifferencesFound(String), // date
    WorklogDeleted {
        id: u64,
        ticket: String,
    },
    WorklogCreated {
        ticket: String,
        start: String,
        hours: f64,
    },
    PopulateCompleted {
        unchanged: usize,
        changed: usize,
    },

    // === DRY RUN MESSAGES ===
    DryRunEnabled,
    DryRunHeader(String), // date
    DryRunWouldDelete(usize),
    DryRunWouldCreate(usize),
    DryRunNothingToDelete,
    DryRunNothingToCreate,
    DryRunCompleted(usize), // days that differ

    // === DUMP MESSAGES ===
    DumpStarted { start: String, end: String },
    DumpEmptyRange,
    DumpCompleted(usize), // days with worklogs

    // === ERROR MESSAGES ===
    RunAborted,
}
