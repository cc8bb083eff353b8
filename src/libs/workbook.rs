//! YAML workbook: the local declaration of worked hours.
//!
//! A workbook maps ISO dates to the tickets worked on that day:
//!
//! ```yaml
//! 2024-01-01:
//!   - ticket: AB-1
//!     time: 2
//!   - ticket: AB-2
//!     time: 1.5
//! 2024-01-02: []
//! ```
//!
//! Days keep the order in which they appear in the file. `populate` reads
//! workbooks and `dump` writes them, so both directions live here.

use super::error::{Result, WorkbookError};
use super::worklog::DayPlan;
use chrono::NaiveDate;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::fmt;
use std::fs;
use std::path::Path;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One declared item. Both fields are optional at this level so that a
/// missing one is reported against its date instead of as a parse error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkbookItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkbookDay {
    pub date: NaiveDate,
    pub items: Vec<WorkbookItem>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    pub days: Vec<WorkbookDay>,
}

impl Workbook {
    /// Reads and parses a workbook file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| WorkbookError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&source)
    }

    /// Parses a workbook from YAML text.
    ///
    /// Items are read straight from the text so that shape errors inside a
    /// day keep their line and column.
    pub fn from_yaml(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }

        let DeclaredDays(declared) = serde_yaml::from_str(source)?;

        let mut days: Vec<WorkbookDay> = Vec::with_capacity(declared.len());
        for (key, items) in declared {
            let date = parse_date_key(&key)?;
            if days.iter().any(|day| day.date == date) {
                return Err(parse_error(&format!("{} is declared more than once", date)));
            }
            let items = items.ok_or_else(|| WorkbookError::Validation(format!("no worklog items declared for {}", date)))?;
            days.push(WorkbookDay { date, items });
        }

        Ok(Self { days })
    }

    /// Renders the workbook as YAML, one key per day in order.
    pub fn to_yaml(&self) -> Result<String> {
        let mut mapping = Mapping::new();
        for day in &self.days {
            let items = serde_yaml::to_value(&day.items)?;
            mapping.insert(Value::String(day.date.format(DATE_FORMAT).to_string()), items);
        }
        Ok(serde_yaml::to_string(&mapping)?)
    }

    /// Builds the plan of every day, failing on the first invalid one.
    pub fn plans(&self, account_id: &str) -> Result<Vec<DayPlan>> {
        self.days.iter().map(|day| DayPlan::build(day, account_id)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Raw top-level mapping, in file order. A `None` value is a date with
/// nothing after the colon.
struct DeclaredDays(Vec<(Value, Option<Vec<WorkbookItem>>)>);

impl<'de> Deserialize<'de> for DeclaredDays {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(DeclaredDaysVisitor)
    }
}

struct DeclaredDaysVisitor;

impl<'de> Visitor<'de> for DeclaredDaysVisitor {
    type Value = DeclaredDays;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a mapping of dates to lists of worklog items")
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(DeclaredDays(Vec::new()))
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(DeclaredDays(Vec::new()))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
        let mut days = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(entry) = map.next_entry::<Value, Option<Vec<WorkbookItem>>>()? {
            days.push(entry);
        }
        Ok(DeclaredDays(days))
    }
}

fn parse_date_key(key: &Value) -> Result<NaiveDate> {
    let text = match key {
        Value::String(text) => text.clone(),
        other => serde_yaml::to_string(other)?.trim().to_string(),
    };
    NaiveDate::parse_from_str(&text, DATE_FORMAT)
        .map_err(|_| parse_error(&format!("'{}' is not a date in YYYY-MM-DD format", text)))
}

fn parse_error(message: &str) -> WorkbookError {
    WorkbookError::Parse {
        line: None,
        column: None,
        message: message.to_string(),
    }
}
