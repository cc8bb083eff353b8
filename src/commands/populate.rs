use super::ConnectionArgs;
use crate::{
    api::tempo::Tempo,
    libs::{error::WorkbookError, journal::ConsoleJournal, messages::Message, reconcile::Reconciler, workbook::Workbook},
    msg_info, msg_success, msg_warning,
};
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PopulateArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Workbook file mapping dates to ticket/time items
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Show what would be deleted and created without changing anything
    #[arg(long = "dryrun")]
    pub dry_run: bool,
}

pub async fn cmd(args: PopulateArgs) -> Result<()> {
    let extra = match args.input {
        Some(_) => Vec::new(),
        None => vec!["--input".to_string()],
    };
    let config = args.connection.into_config(extra.clone())?;
    let input = args.input.ok_or(WorkbookError::Usage(extra))?;
    let path = input.display().to_string();

    let workbook = Workbook::load(&input)?;
    if workbook.is_empty() {
        msg_warning!(Message::WorkbookEmpty(path));
        return Ok(());
    }
    msg_info!(Message::WorkbookLoaded {
        path,
        days: workbook.days.len()
    });

    // Every day is validated before the first remote call.
    let plans = workbook.plans(&config.account_id)?;

    let tempo = Tempo::new(&config)?;
    if args.dry_run {
        msg_info!(Message::DryRunEnabled);
    }

    let summary = Reconciler::new(&tempo)
        .dry_run(args.dry_run)
        .run(&plans, &mut ConsoleJournal)
        .await
        .with_context(|| Message::RunAborted.to_string())?;

    if args.dry_run {
        msg_info!(Message::DryRunCompleted(summary.changed()), true);
    } else {
        msg_success!(
            Message::PopulateCompleted {
                unchanged: summary.unchanged(),
                changed: summary.changed(),
            },
            true
        );
    }

    Ok(())
}
