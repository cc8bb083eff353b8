//! Error model shared by the workbook loader, the Tempo client and the
//! reconciliation engine.
//!
//! Every variant is fatal for the run: nothing is retried and nothing is
//! swallowed. The command layer converts these into `anyhow` errors and
//! `main` turns any of them into exit code 1.

use chrono::NaiveDate;
use reqwest::StatusCode;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WorkbookError>;

#[derive(Debug, Error)]
pub enum WorkbookError {
    /// The workbook file could not be opened or read.
    #[error("could not open workbook file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The workbook is not valid YAML or does not have the expected shape.
    #[error("could not parse workbook{}: {message}", location_suffix(.line, .column))]
    Parse {
        line: Option<usize>,
        column: Option<usize>,
        message: String,
    },

    /// A declared item lacks its ticket or its time.
    #[error("missing ticket or time in one of the worklog items for {date}")]
    MissingField { date: NaiveDate },

    /// Any other semantic problem with user-supplied values.
    #[error("{0}")]
    Validation(String),

    /// The remote service answered with a non-success status.
    #[error("{action} failed with {status}: {body}")]
    RemoteCall {
        action: String,
        status: StatusCode,
        body: String,
    },

    /// Required command-line parameters were not supplied.
    #[error("missing required parameters: {}", .0.join(", "))]
    Usage(Vec<String>),

    #[error("network error: {0}")]
    Network(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

fn location_suffix(line: &Option<usize>, column: &Option<usize>) -> String {
    match (*line, *column) {
        (Some(line), Some(column)) => format!(" at line {} column {}", line, column),
        (Some(line), None) => format!(" at line {}", line),
        _ => String::new(),
    }
}

impl WorkbookError {
    pub fn remote(action: impl Into<String>, status: StatusCode, body: impl Into<String>) -> Self {
        WorkbookError::RemoteCall {
            action: action.into(),
            status,
            body: body.into(),
        }
    }
}

impl From<reqwest::Error> for WorkbookError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            WorkbookError::Serialization(err.to_string())
        } else {
            WorkbookError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for WorkbookError {
    fn from(err: serde_json::Error) -> Self {
        WorkbookError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for WorkbookError {
    /// Keeps the 1-based location serde_yaml reports, when it has one.
    fn from(err: serde_yaml::Error) -> Self {
        let message = err.to_string();
        match err.location() {
            Some(location) => {
                let suffix = format!(" at line {} column {}", location.line(), location.column());
                WorkbookError::Parse {
                    line: Some(location.line()),
                    column: Some(location.column()),
                    message: message.strip_suffix(&suffix).unwrap_or(&message).to_string(),
                }
            }
            None => WorkbookError::Parse {
                line: None,
                column: None,
                message,
            },
        }
    }
}
