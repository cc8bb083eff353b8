//! Command-line interface of the workbook application.
//!
//! Both subcommands talk to the same Tempo account, so the connection
//! options are shared through [`ConnectionArgs`]. Required values are
//! declared optional to clap and checked here instead: every missing
//! parameter is reported at once and the process exits with code 1, while
//! genuinely malformed invocations are left to clap (exit code 2).

pub mod dump;
pub mod populate;

use crate::api::tempo::{TempoConfig, DEFAULT_API_URL};
use crate::libs::error::{Result, WorkbookError};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Bring Tempo worklogs in line with a workbook file")]
    Populate(populate::PopulateArgs),
    #[command(about = "Write the worklogs of a date range as a workbook to stdout")]
    Dump(dump::DumpArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> anyhow::Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Populate(args) => populate::cmd(args).await,
            Commands::Dump(args) => dump::cmd(args).await,
        }
    }
}

/// Tempo connection options shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct ConnectionArgs {
    /// Tempo API token, sent as a bearer token
    #[arg(short = 'k', long = "apikey", env = "TEMPO_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Atlassian account id whose worklogs are managed
    #[arg(short = 'a', long = "accountid", env = "TEMPO_ACCOUNT_ID")]
    pub account_id: Option<String>,

    /// Base URL of the Tempo REST API
    #[arg(long = "apiurl", env = "TEMPO_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

impl ConnectionArgs {
    /// Names of the connection parameters that were not supplied.
    pub fn missing(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if is_blank(&self.api_key) {
            missing.push("--apikey".to_string());
        }
        if is_blank(&self.account_id) {
            missing.push("--accountid".to_string());
        }
        missing
    }

    /// Builds the Tempo configuration, or a usage error naming every
    /// missing parameter, including the `extra` ones found by the caller.
    pub fn into_config(self, extra: Vec<String>) -> Result<TempoConfig> {
        let mut missing = self.missing();
        missing.extend(extra);
        match (self.api_key, self.account_id) {
            (Some(api_key), Some(account_id)) if missing.is_empty() => {
                Ok(TempoConfig::new(api_key, account_id).with_api_url(self.api_url))
            }
            _ => Err(WorkbookError::Usage(missing)),
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connection(api_key: Option<&str>, account_id: Option<&str>) -> ConnectionArgs {
        ConnectionArgs {
            api_key: api_key.map(String::from),
            account_id: account_id.map(String::from),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    #[test]
    fn test_complete_connection_builds_config() {
        let config = connection(Some("token"), Some("acc-1")).into_config(Vec::new()).unwrap();
        assert_eq!(config, TempoConfig::new("token", "acc-1"));
    }

    #[test]
    fn test_every_missing_parameter_is_named() {
        let err = connection(None, Some("  ")).into_config(vec!["--input".to_string()]).unwrap_err();
        match err {
            WorkbookError::Usage(missing) => assert_eq!(missing, vec!["--apikey", "--accountid", "--input"]),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_extra_missing_parameter_fails_complete_connection() {
        let err = connection(Some("token"), Some("acc-1"))
            .into_config(vec!["--startdate".to_string()])
            .unwrap_err();
        assert!(matches!(err, WorkbookError::Usage(_)));
    }

    #[test]
    fn test_cli_parses_populate() {
        let cli = Cli::try_parse_from(["workbook", "populate", "-k", "token", "-a", "acc-1", "-i", "hours.yaml", "--dryrun"]).unwrap();
        match cli.command {
            Commands::Populate(args) => {
                assert!(args.dry_run);
                assert_eq!(args.input.unwrap().to_str(), Some("hours.yaml"));
            }
            _ => panic!("expected populate"),
        }
    }

    #[test]
    fn test_cli_rejects_malformed_date() {
        let err = Cli::try_parse_from(["workbook", "dump", "--startdate", "01/02/2024"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
