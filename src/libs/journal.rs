//! Progress reporting for reconciliation runs.
//!
//! The [`Reconciler`](super::reconcile::Reconciler) never prints. It tells a
//! [`Journal`] what it found and what it did, and the journal decides how to
//! present it. The CLI uses [`ConsoleJournal`]; tests record the calls.

use super::messages::Message;
use super::view::View;
use super::worklog::WorklogEntry;
use crate::{msg_info, msg_success};
use chrono::NaiveDate;

pub trait Journal {
    fn no_differences(&mut self, date: NaiveDate);

    fn differences_found(&mut self, date: NaiveDate);

    fn deleted(&mut self, entry: &WorklogEntry);

    fn created(&mut self, entry: &WorklogEntry);

    /// Dry-run preview of a day that differs from the remote state.
    fn planned(&mut self, date: NaiveDate, to_delete: &[WorklogEntry], to_create: &[WorklogEntry]);
}

/// Writes progress to the terminal through the message macros.
#[derive(Debug, Default)]
pub struct ConsoleJournal;

impl Journal for ConsoleJournal {
    fn no_differences(&mut self, date: NaiveDate) {
        msg_info!(Message::NoDifferences(date.to_string()));
    }

    fn differences_found(&mut self, date: NaiveDate) {
        msg_info!(Message::DifferencesFound(date.to_string()));
    }

    fn deleted(&mut self, entry: &WorklogEntry) {
        msg_success!(Message::WorklogDeleted {
            id: entry.tempo_worklog_id.unwrap_or_default(),
            ticket: entry.issue_key.clone(),
        });
    }

    fn created(&mut self, entry: &WorklogEntry) {
        msg_success!(Message::WorklogCreated {
            ticket: entry.issue_key.clone(),
            start: entry.start_time.to_string(),
            hours: entry.hours(),
        });
    }

    fn planned(&mut self, date: NaiveDate, to_delete: &[WorklogEntry], to_create: &[WorklogEntry]) {
        msg_info!(Message::DryRunHeader(date.to_string()), true);
        if to_delete.is_empty() {
            msg_info!(Message::DryRunNothingToDelete);
        } else {
            msg_info!(Message::DryRunWouldDelete(to_delete.len()));
            View::worklogs(to_delete);
        }
        if to_create.is_empty() {
            msg_info!(Message::DryRunNothingToCreate);
        } else {
            msg_info!(Message::DryRunWouldCreate(to_create.len()));
            View::worklogs(to_create);
        }
    }
}
