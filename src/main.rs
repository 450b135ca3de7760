mod app;
mod channels;
mod config;
mod data;
mod error;
mod logging;
mod tasks;
mod ui;

#[cfg(test)]
mod testing;

use color_eyre::eyre::WrapErr;
use config::AppConfig;
use crossterm::event::EventStream;
use data::TradesApi;
use tracing::{error, info};
use ui::{TerminalGuard, TerminalSink};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = AppConfig::from_env();
    if let Err(err) = logging::init_logging(&config.log_file) {
        eprintln!("Warning: continuing without logging: {err:#}");
    }
    info!(base_url = %config.base_url, symbols = config.watchlist.len(), "tickerchart starting");

    let source = TradesApi::new(&config.base_url).wrap_err("failed to build HTTP client")?;
    let (guard, terminal) = TerminalGuard::acquire().wrap_err("failed to initialise terminal")?;

    let outcome = app::run(&config, source, TerminalSink::new(terminal), EventStream::new()).await;
    drop(guard);

    match &outcome {
        Ok(()) => info!("tickerchart exited"),
        Err(err) => error!(error = %err, "tickerchart aborted"),
    }
    outcome
}
