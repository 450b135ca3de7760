use crate::channels::{DisplayMode, DisplayPorts, ModeChange, SelectionChange};
use crate::config::DISPLAY_INTERVAL;
use crate::data::Symbol;
use crate::ui::{ChartView, MenuView, RenderSink, View};
use chrono::Local;
use std::io;
use tokio::time::{interval, MissedTickBehavior};
use tracing::debug;

pub struct DisplayTask<S> {
    sink: S,
    menu: MenuView,
    ports: DisplayPorts,
    mode: DisplayMode,
    selected: Option<Symbol>,
}

impl<S: RenderSink> DisplayTask<S> {
    pub fn new(sink: S, menu: MenuView, ports: DisplayPorts) -> Self {
        Self {
            sink,
            menu,
            ports,
            mode: DisplayMode::Menu,
            selected: None,
        }
    }

    /// Enters `Menu` and draws it. Called once before input is read.
    pub fn show_menu(&mut self) -> io::Result<()> {
        self.mode = DisplayMode::Menu;
        self.sink.draw(&View::Menu(self.menu.clone()))
    }

    pub async fn run(mut self) -> io::Result<()> {
        let mut ticker = interval(DISPLAY_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            self.step()?;
        }
    }

    pub fn step(&mut self) -> io::Result<()> {
        // Input publishes the selection before the mode, so reading the mode
        // first guarantees its selection is already visible.
        let change = self.ports.modes.take();
        if let Some(SelectionChange { symbol }) = self.ports.selections.take() {
            self.selected = Some(symbol);
        }

        match change {
            Some(ModeChange { mode }) if mode != self.mode => {
                debug!(from = ?self.mode, to = ?mode, "display mode changed");
                match mode {
                    DisplayMode::Menu => self.show_menu(),
                    DisplayMode::Chart => {
                        self.mode = DisplayMode::Chart;
                        self.show_latest_series()
                    }
                }
            }
            // repeated mode: nothing to redraw
            Some(_) => Ok(()),
            None if self.mode == DisplayMode::Chart => self.show_latest_series(),
            None => Ok(()),
        }
    }

    fn show_latest_series(&mut self) -> io::Result<()> {
        let Ok(series) = self.ports.series.try_recv() else {
            return Ok(());
        };

        if let Some(selected) = &self.selected {
            if series.symbol() != selected {
                debug!(symbol = %series.symbol(), selected = %selected, "dropping stale series");
                return Ok(());
            }
        }

        if series.is_empty() {
            debug!(symbol = %series.symbol(), "skipping empty series");
            return Ok(());
        }

        match ChartView::new(&series, Local::now()) {
            Some(view) => self.sink.draw(&View::Chart(view)),
            None => Ok(()),
        }
    }
}
