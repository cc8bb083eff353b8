use dotenv::dotenv;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use workbook::{commands::Cli, libs::messages::macros::is_debug_mode, msg_error};

/// Logs go to stderr and are only set up in debug mode; normal runs print
/// plain messages through the message macros instead.
fn init_tracing() {
    if !is_debug_mode() {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("workbook=debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if it exists
    let _ = dotenv();
    init_tracing();

    match Cli::menu().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            msg_error!(format!("{:#}", err));
            ExitCode::from(1)
        }
    }
}
