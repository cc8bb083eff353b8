//! Worklog entries and the per-day plans built from a workbook.
//!
//! A [`DayPlan`] is the desired state of one calendar day: the declared items
//! turned into [`WorklogEntry`] values laid out back to back from midnight in
//! declaration order. Entries fetched from Tempo use the same type and carry
//! their `tempo_worklog_id`, which is ignored when the two are compared.
//!
//! ## Schedule
//!
//! ```text
//! 2024-01-01:              startTime   timeSpentSeconds
//!   - {ticket: AB-1, time: 2}   00:00:00    7200
//!   - {ticket: AB-2, time: 1}   02:00:00    3600
//! ```

use super::error::{Result, WorkbookError};
use super::workbook::WorkbookDay;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

pub const SECONDS_PER_HOUR: f64 = 3600.0;
pub const SECONDS_PER_DAY: u64 = 86_400;

/// A single worklog, either declared locally or fetched from Tempo.
///
/// Serializes to the body Tempo expects when creating a worklog; the remote
/// identifier is only emitted when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorklogEntry {
    pub issue_key: String,
    pub time_spent_seconds: u64,
    pub start_date: NaiveDate,
    pub start_time: NaiveTime,
    pub author_account_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tempo_worklog_id: Option<u64>,
}

impl WorklogEntry {
    /// Copy of the entry with the remote identifier stripped.
    pub fn without_worklog_id(&self) -> Self {
        Self {
            tempo_worklog_id: None,
            ..self.clone()
        }
    }

    pub fn hours(&self) -> f64 {
        seconds_to_hours(self.time_spent_seconds)
    }
}

/// Converts decimal hours to whole seconds, rounding to the nearest second.
///
/// Returns `None` for negative or non-finite input.
pub fn hours_to_seconds(hours: f64) -> Option<u64> {
    if !hours.is_finite() || hours < 0.0 {
        return None;
    }
    Some((hours * SECONDS_PER_HOUR).round() as u64)
}

pub fn seconds_to_hours(seconds: u64) -> f64 {
    seconds as f64 / SECONDS_PER_HOUR
}

/// The desired worklogs of one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPlan {
    pub date: NaiveDate,
    pub entries: Vec<WorklogEntry>,
}

impl DayPlan {
    /// Builds the plan for a declared day.
    ///
    /// Every item must have both a ticket and a time. Start times advance by
    /// each entry's duration, starting at midnight, and the day may not hold
    /// more than 24 hours.
    pub fn build(day: &WorkbookDay, account_id: &str) -> Result<Self> {
        let mut entries = Vec::with_capacity(day.items.len());
        let mut elapsed: u64 = 0;

        for item in &day.items {
            let (ticket, time) = match (&item.ticket, item.time) {
                (Some(ticket), Some(time)) => (ticket, time),
                _ => return Err(WorkbookError::MissingField { date: day.date }),
            };

            let seconds = hours_to_seconds(time).ok_or_else(|| {
                WorkbookError::Validation(format!("invalid time {} for {} on {}", time, ticket, day.date))
            })?;

            let start_time = u32::try_from(elapsed)
                .ok()
                .and_then(|secs| NaiveTime::from_num_seconds_from_midnight_opt(secs, 0))
                .ok_or_else(|| day_overflow(day.date))?;

            entries.push(WorklogEntry {
                issue_key: ticket.clone(),
                time_spent_seconds: seconds,
                start_date: day.date,
                start_time,
                author_account_id: account_id.to_string(),
                tempo_worklog_id: None,
            });

            elapsed = elapsed.checked_add(seconds).ok_or_else(|| day_overflow(day.date))?;
        }

        if elapsed > SECONDS_PER_DAY {
            return Err(day_overflow(day.date));
        }

        Ok(Self { date: day.date, entries })
    }

    /// Exact comparison against the entries found remotely.
    ///
    /// Same count, same order, every field equal once the remote identifier
    /// is stripped.
    pub fn matches(&self, actual: &[WorklogEntry]) -> bool {
        self.entries.len() == actual.len()
            && self
                .entries
                .iter()
                .zip(actual)
                .all(|(desired, actual)| *desired == actual.without_worklog_id())
    }

    pub fn total_seconds(&self) -> u64 {
        self.entries.iter().map(|e| e.time_spent_seconds).sum()
    }
}

fn day_overflow(date: NaiveDate) -> WorkbookError {
    WorkbookError::Validation(format!("worklog items for {} add up to more than 24 hours", date))
}
