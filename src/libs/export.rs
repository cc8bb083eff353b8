//! Export of remote worklogs back into the workbook shape.
//!
//! Each date of a [`DateRange`] is fetched on its own and every worklog
//! becomes a `{ticket, time}` item, with `time` in decimal hours. Start times
//! and remote identifiers are dropped: a later `populate` recomputes the
//! start times from the item order.

use super::error::{Result, WorkbookError};
use super::workbook::{Workbook, WorkbookDay, WorkbookItem};
use crate::api::TimeTracking;
use crate::msg_debug;
use chrono::NaiveDate;

/// Calendar dates from `start` (inclusive) to `end` (exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(WorkbookError::Validation(format!(
                "end date {} is before start date {}",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |date| *date < end)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

pub struct Exporter<'a, S> {
    service: &'a S,
}

impl<'a, S: TimeTracking> Exporter<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// Fetches every date of the range. Dates without worklogs are left out.
    pub async fn export(&self, range: &DateRange) -> Result<Workbook> {
        let mut workbook = Workbook::default();

        for date in range.days() {
            msg_debug!(format!("Fetching worklogs for {}", date));
            let entries = self.service.find_worklogs(date).await?;
            if entries.is_empty() {
                continue;
            }

            let items = entries
                .iter()
                .map(|entry| WorkbookItem {
                    ticket: Some(entry.issue_key.clone()),
                    time: Some(entry.hours()),
                })
                .collect();
            workbook.days.push(WorkbookDay { date, items });
        }

        Ok(workbook)
    }
}
