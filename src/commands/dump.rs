use super::ConnectionArgs;
use crate::{
    api::tempo::Tempo,
    libs::{
        error::WorkbookError,
        export::{DateRange, Exporter},
        messages::Message,
    },
    msg_debug,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use std::io::{self, Write};

#[derive(Debug, Args)]
pub struct DumpArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// First date to dump (YYYY-MM-DD, inclusive)
    #[arg(long = "startdate")]
    pub start_date: Option<NaiveDate>,

    /// Date to stop at (YYYY-MM-DD, exclusive)
    #[arg(long = "enddate")]
    pub end_date: Option<NaiveDate>,
}

/// Writes the workbook to stdout. Progress only shows up in debug mode so
/// that the output can be redirected straight into a file.
pub async fn cmd(args: DumpArgs) -> Result<()> {
    let mut extra = Vec::new();
    if args.start_date.is_none() {
        extra.push("--startdate".to_string());
    }
    if args.end_date.is_none() {
        extra.push("--enddate".to_string());
    }
    let config = args.connection.into_config(extra.clone())?;
    let (start, end) = args
        .start_date
        .zip(args.end_date)
        .ok_or(WorkbookError::Usage(extra))?;

    let range = DateRange::new(start, end)?;
    msg_debug!(Message::DumpStarted {
        start: range.start().to_string(),
        end: range.end().to_string(),
    });
    if range.is_empty() {
        msg_debug!(Message::DumpEmptyRange);
    }

    let tempo = Tempo::new(&config)?;
    let workbook = Exporter::new(&tempo).export(&range).await?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(workbook.to_yaml()?.as_bytes())?;
    stdout.flush()?;

    msg_debug!(Message::DumpCompleted(workbook.days.len()));
    Ok(())
}
