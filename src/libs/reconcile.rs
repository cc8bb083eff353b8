//! Convergence of remote worklogs towards the declared day plans.
//!
//! For every [`DayPlan`], in order:
//!
//! 1. fetch the day's worklogs from the service,
//! 2. compare them with the plan (exact match, remote ids ignored),
//! 3. if they differ, delete every remote worklog of the day and then create
//!    every planned one.
//!
//! The first failing call ends the run. Days already converged stay as they
//! are. In dry-run mode step 3 is replaced by a preview sent to the journal.

use super::error::{Result, WorkbookError};
use super::journal::Journal;
use super::worklog::{DayPlan, WorklogEntry};
use crate::api::TimeTracking;
use chrono::NaiveDate;

/// What happened to a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOutcome {
    /// Remote state already matched the plan.
    Unchanged,
    /// Remote worklogs were replaced.
    Converged { deleted: usize, created: usize },
    /// Dry run: the day differs, nothing was touched.
    Planned { to_delete: usize, to_create: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub days: Vec<(NaiveDate, DayOutcome)>,
}

impl RunSummary {
    pub fn unchanged(&self) -> usize {
        self.days.iter().filter(|(_, outcome)| *outcome == DayOutcome::Unchanged).count()
    }

    pub fn changed(&self) -> usize {
        self.days.len() - self.unchanged()
    }
}

pub struct Reconciler<'a, S> {
    service: &'a S,
    dry_run: bool,
}

impl<'a, S: TimeTracking> Reconciler<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service, dry_run: false }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub async fn run<J: Journal>(&self, plans: &[DayPlan], journal: &mut J) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        for plan in plans {
            let outcome = self.reconcile_day(plan, journal).await?;
            summary.days.push((plan.date, outcome));
        }
        Ok(summary)
    }

    pub async fn reconcile_day<J: Journal>(&self, plan: &DayPlan, journal: &mut J) -> Result<DayOutcome> {
        let actual = self.service.find_worklogs(plan.date).await?;

        if plan.matches(&actual) {
            journal.no_differences(plan.date);
            return Ok(DayOutcome::Unchanged);
        }

        journal.differences_found(plan.date);

        if self.dry_run {
            journal.planned(plan.date, &actual, &plan.entries);
            return Ok(DayOutcome::Planned {
                to_delete: actual.len(),
                to_create: plan.entries.len(),
            });
        }

        for entry in &actual {
            let worklog_id = entry.tempo_worklog_id.ok_or_else(|| missing_id(entry))?;
            self.service.delete_worklog(worklog_id).await?;
            journal.deleted(entry);
        }

        for entry in &plan.entries {
            self.service.create_worklog(entry).await?;
            journal.created(entry);
        }

        Ok(DayOutcome::Converged {
            deleted: actual.len(),
            created: plan.entries.len(),
        })
    }
}

fn missing_id(entry: &WorklogEntry) -> WorkbookError {
    WorkbookError::Validation(format!(
        "remote worklog {} on {} at {} has no identifier and cannot be deleted",
        entry.issue_key, entry.start_date, entry.start_time
    ))
}
