//! Core library modules for the workbook application.
//!
//! ## Features
//!
//! - **Workbook**: Loading and rendering of the YAML declaration of hours
//! - **Worklogs**: Day plans with back-to-back start times
//! - **Reconciliation**: Per-day comparison and delete-then-create convergence
//! - **Export**: Remote worklogs back into workbook form
//! - **Reporting**: Journal sink, message catalogue, console tables
//!
//! ## Usage
//!
//! ```rust,no_run
//! use workbook::libs::workbook::Workbook;
//! use std::path::Path;
//!
//! let workbook = Workbook::load(Path::new("hours.yaml"))?;
//! let plans = workbook.plans("account-id")?;
//! # Ok::<(), workbook::libs::error::WorkbookError>(())
//! ```

pub mod error;
pub mod export;
pub mod journal;
pub mod messages;
pub mod reconcile;
pub mod view;
pub mod workbook;
pub mod worklog;
