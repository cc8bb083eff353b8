//! API client modules for the remote time-tracking service.
//!
//! The reconciliation engine and the exporter only see the [`TimeTracking`]
//! trait. [`tempo::Tempo`] implements it over the Tempo REST API; tests
//! substitute an in-memory implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use workbook::api::{TempoConfig, tempo::Tempo, TimeTracking};
//! use chrono::NaiveDate;
//!
//! # async fn run() -> workbook::libs::error::Result<()> {
//! let tempo = Tempo::new(&TempoConfig::new("token", "account-id"))?;
//! let entries = tempo.find_worklogs(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()).await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::error::Result;
use crate::libs::worklog::WorklogEntry;
use chrono::NaiveDate;

pub mod tempo;

pub use tempo::TempoConfig;

/// Remote worklog operations needed to converge one day.
///
/// Implementations are bound to a single account: every call acts on the
/// worklogs of the account they were configured with.
#[allow(async_fn_in_trait)]
pub trait TimeTracking {
    /// Returns every worklog of the account on `date`, each carrying its
    /// remote identifier. No worklogs is an empty list, never an error.
    async fn find_worklogs(&self, date: NaiveDate) -> Result<Vec<WorklogEntry>>;

    /// Creates a worklog from a locally built entry.
    async fn create_worklog(&self, entry: &WorklogEntry) -> Result<()>;

    /// Deletes a worklog by its remote identifier.
    async fn delete_worklog(&self, worklog_id: u64) -> Result<()>;
}
