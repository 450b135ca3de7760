use crate::channels;
use crate::config::AppConfig;
use crate::data::PriceSource;
use crate::tasks::{AcquisitionTask, DisplayTask, InputTask};
use crate::ui::{MenuView, RenderSink};
use color_eyre::eyre::{eyre, WrapErr};
use crossterm::event::Event;
use futures_util::Stream;
use std::io;
use tokio::task::JoinSet;
use tracing::info;

/// Wires the three tasks together and waits for the first terminal outcome.
///
/// `Ok(())` means the user quit. Keyboard failures and render failures come
/// back as errors. Background tasks are aborted before this returns, so
/// nothing is drawn once exit has begun.
pub async fn run<P, S, E>(config: &AppConfig, source: P, sink: S, events: E) -> color_eyre::Result<()>
where
    P: PriceSource + 'static,
    S: RenderSink + 'static,
    E: Stream<Item = io::Result<Event>>,
{
    let (input_ports, acquisition_ports, display_ports) = channels::wire();

    let mut display = DisplayTask::new(sink, MenuView::new(config.watchlist.clone()), display_ports);
    display.show_menu().wrap_err("failed to draw the menu")?;

    let acquisition = AcquisitionTask::new(source, acquisition_ports);
    let input = InputTask::new(config.watchlist.clone(), input_ports);

    let mut tasks = JoinSet::new();
    tasks.spawn(async move {
        acquisition.run().await;
        Ok::<(), io::Error>(())
    });
    tasks.spawn(display.run());
    info!("tasks started");

    let outcome = tokio::select! {
        res = input.run(events) => res.wrap_err("keyboard input failed"),
        Some(joined) = tasks.join_next() => match joined {
            Ok(Ok(())) => Err(eyre!("background task stopped unexpectedly")),
            Ok(Err(err)) => Err(err).wrap_err("terminal output failed"),
            Err(err) => Err(err).wrap_err("background task panicked"),
        },
    };

    tasks.shutdown().await;
    outcome
}
