use crate::channels::{AcquisitionPorts, SelectionChange};
use crate::config::FETCH_INTERVAL;
use crate::data::{PriceSource, Symbol};
use std::ops::ControlFlow;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

pub struct AcquisitionTask<P> {
    source: P,
    ports: AcquisitionPorts,
    last_selected: Option<Symbol>,
}

impl<P: PriceSource> AcquisitionTask<P> {
    pub fn new(source: P, ports: AcquisitionPorts) -> Self {
        Self {
            source,
            ports,
            last_selected: None,
        }
    }

    pub async fn run(mut self) {
        let mut ticker = interval(FETCH_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            if self.poll_once().await.is_break() {
                info!("series receiver closed, stopping acquisition");
                return;
            }
        }
    }

    /// Breaks only when the display side has gone away.
    pub async fn poll_once(&mut self) -> ControlFlow<()> {
        if let Some(SelectionChange { symbol }) = self.ports.selections.take() {
            debug!(symbol = %symbol, "selection applied");
            self.last_selected = Some(symbol);
        }

        let Some(symbol) = self.last_selected.clone() else {
            return ControlFlow::Continue(());
        };

        let series = match self.source.fetch(&symbol).await {
            Ok(series) => series,
            Err(err) => {
                warn!(symbol = %symbol, error = %err, "Error fetching data");
                return ControlFlow::Continue(());
            }
        };

        if series.symbol() != &symbol {
            warn!(requested = %symbol, received = %series.symbol(), "dropping series for another symbol");
            return ControlFlow::Continue(());
        }

        debug!(symbol = %symbol, points = series.len(), "publishing series");
        match self.ports.series.send(series).await {
            Ok(()) => ControlFlow::Continue(()),
            Err(_) => ControlFlow::Break(()),
        }
    }
}
