//! # Workbook - declarative Tempo worklogs
//!
//! A command-line utility that keeps the Tempo worklogs of one account in
//! line with a YAML file of daily hours, and exports existing worklogs back
//! into that same format.
//!
//! ## Features
//!
//! - **Populate**: Converge every declared day, deleting and recreating worklogs where they differ
//! - **Dry Run**: Preview the deletions and creations without touching Tempo
//! - **Dump**: Export a range of days as a workbook on standard output
//!
//! ## Usage
//!
//! ```rust,no_run
//! use workbook::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
