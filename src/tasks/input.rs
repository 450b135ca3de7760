use crate::channels::{DisplayMode, InputPorts, ModeChange, SelectionChange};
use crate::config::INPUT_INTERVAL;
use crate::data::Symbol;
use crate::error::InputError;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures_util::{Stream, StreamExt};
use std::io;
use std::ops::ControlFlow;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Select(usize),
    Menu,
    Quit,
    Ignore,
}

pub fn map_key(key: &KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        // raw mode swallows SIGINT
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char('h') if ctrl => KeyAction::Menu,
        KeyCode::Backspace => KeyAction::Menu,
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char(digit @ '1'..='9') => KeyAction::Select(digit as usize - '1' as usize),
        _ => KeyAction::Ignore,
    }
}

pub struct InputTask {
    watchlist: Vec<Symbol>,
    ports: InputPorts,
}

impl InputTask {
    pub fn new(watchlist: Vec<Symbol>, ports: InputPorts) -> Self {
        Self { watchlist, ports }
    }

    /// Returns `Ok(())` when the user quits. Any read failure or the end of
    /// the event stream is fatal.
    pub async fn run<E>(self, events: E) -> Result<(), InputError>
    where
        E: Stream<Item = io::Result<Event>>,
    {
        futures_util::pin_mut!(events);
        let mut ticker = interval(INPUT_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            let event = match events.next().await {
                Some(event) => event?,
                None => return Err(InputError::Closed),
            };
            if self.handle(&event).is_break() {
                return Ok(());
            }
        }
    }

    pub fn handle(&self, event: &Event) -> ControlFlow<()> {
        let Event::Key(key) = event else {
            return ControlFlow::Continue(());
        };

        match map_key(key) {
            KeyAction::Select(index) => match self.watchlist.get(index) {
                Some(symbol) => {
                    info!(symbol = %symbol, "symbol selected");
                    self.ports.selections.publish(SelectionChange {
                        symbol: symbol.clone(),
                    });
                    self.ports.modes.publish(ModeChange {
                        mode: DisplayMode::Chart,
                    });
                }
                None => debug!(index, "no watchlist entry for key"),
            },
            KeyAction::Menu => {
                self.ports.modes.publish(ModeChange {
                    mode: DisplayMode::Menu,
                });
            }
            KeyAction::Quit => {
                info!("quit requested");
                return ControlFlow::Break(());
            }
            KeyAction::Ignore => {}
        }
        ControlFlow::Continue(())
    }
}
