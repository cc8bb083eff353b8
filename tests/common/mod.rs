#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};
use reqwest::StatusCode;
use std::sync::Mutex;
use workbook::api::TimeTracking;
use workbook::libs::error::{Result, WorkbookError};
use workbook::libs::journal::Journal;
use workbook::libs::worklog::WorklogEntry;

pub const ACCOUNT: &str = "acc-1";

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).unwrap()
}

pub fn entry(ticket: &str, seconds: u64, date: NaiveDate, start: NaiveTime) -> WorklogEntry {
    WorklogEntry {
        issue_key: ticket.to_string(),
        time_spent_seconds: seconds,
        start_date: date,
        start_time: start,
        author_account_id: ACCOUNT.to_string(),
        tempo_worklog_id: None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Find(NaiveDate),
    Create(WorklogEntry),
    Delete(u64),
}

#[derive(Default)]
struct FakeState {
    worklogs: Vec<WorklogEntry>,
    next_id: u64,
    calls: Vec<Call>,
    failing_delete: Option<u64>,
    failing_create: Option<String>,
}

/// In-memory Tempo account that records every call made against it.
#[derive(Default)]
pub struct FakeTempo {
    state: Mutex<FakeState>,
}

impl FakeTempo {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeState {
                next_id: 100,
                ..FakeState::default()
            }),
        }
    }

    /// Stores a worklog as if it had been created remotely; returns its id.
    pub fn seed(&self, entry: WorklogEntry) -> u64 {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id;
        state.next_id += 1;
        state.worklogs.push(WorklogEntry {
            tempo_worklog_id: Some(id),
            ..entry
        });
        id
    }

    pub fn fail_delete(&self, worklog_id: u64) {
        self.state.lock().unwrap().failing_delete = Some(worklog_id);
    }

    pub fn fail_create(&self, ticket: &str) {
        self.state.lock().unwrap().failing_create = Some(ticket.to_string());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls().into_iter().filter(|call| !matches!(call, Call::Find(_))).collect()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    pub fn worklogs_on(&self, date: NaiveDate) -> Vec<WorklogEntry> {
        let state = self.state.lock().unwrap();
        let mut entries: Vec<_> = state.worklogs.iter().filter(|e| e.start_date == date).cloned().collect();
        entries.sort_by_key(|e| e.start_time);
        entries
    }
}

impl TimeTracking for FakeTempo {
    async fn find_worklogs(&self, date: NaiveDate) -> Result<Vec<WorklogEntry>> {
        self.state.lock().unwrap().calls.push(Call::Find(date));
        Ok(self.worklogs_on(date))
    }

    async fn create_worklog(&self, entry: &WorklogEntry) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Create(entry.clone()));
        if state.failing_create.as_deref() == Some(entry.issue_key.as_str()) {
            return Err(WorkbookError::remote(
                format!("creating worklog {}", entry.issue_key),
                StatusCode::BAD_REQUEST,
                r#"{"errors":[{"message":"Issue does not exist"}]}"#,
            ));
        }
        let id = state.next_id;
        state.next_id += 1;
        state.worklogs.push(WorklogEntry {
            tempo_worklog_id: Some(id),
            ..entry.clone()
        });
        Ok(())
    }

    async fn delete_worklog(&self, worklog_id: u64) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Delete(worklog_id));
        if state.failing_delete == Some(worklog_id) {
            return Err(WorkbookError::remote(
                format!("deleting worklog {}", worklog_id),
                StatusCode::NOT_FOUND,
                r#"{"errors":[{"message":"Worklog not found"}]}"#,
            ));
        }
        state.worklogs.retain(|e| e.tempo_worklog_id != Some(worklog_id));
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    NoDifferences(NaiveDate),
    DifferencesFound(NaiveDate),
    Deleted(String),
    Created(String),
    Planned {
        date: NaiveDate,
        to_delete: Vec<WorklogEntry>,
        to_create: Vec<WorklogEntry>,
    },
}

/// Journal that keeps everything it is told.
#[derive(Debug, Default)]
pub struct RecordingJournal {
    pub events: Vec<Event>,
}

impl Journal for RecordingJournal {
    fn no_differences(&mut self, date: NaiveDate) {
        self.events.push(Event::NoDifferences(date));
    }

    fn differences_found(&mut self, date: NaiveDate) {
        self.events.push(Event::DifferencesFound(date));
    }

    fn deleted(&mut self, entry: &WorklogEntry) {
        self.events.push(Event::Deleted(entry.issue_key.clone()));
    }

    fn created(&mut self, entry: &WorklogEntry) {
        self.events.push(Event::Created(entry.issue_key.clone()));
    }

    fn planned(&mut self, date: NaiveDate, to_delete: &[WorklogEntry], to_create: &[WorklogEntry]) {
        self.events.push(Event::Planned {
            date,
            to_delete: to_delete.to_vec(),
            to_create: to_create.to_vec(),
        });
    }
}
