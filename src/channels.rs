//! Control events (selection, mode) use an overwrite-oldest [`slot`] that
//! never blocks. Price series use a bounded `mpsc` of capacity one, so the
//! producer waits until the previous series has been taken.

use crate::data::{PriceSeries, Symbol};
use tokio::sync::{mpsc, watch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Menu,
    Chart,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    pub symbol: Symbol,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeChange {
    pub mode: DisplayMode,
}

pub const SERIES_CAPACITY: usize = 1;

pub fn slot<T>() -> (SlotSender<T>, SlotReceiver<T>) {
    let (tx, rx) = watch::channel(None);
    (SlotSender(tx), SlotReceiver(rx))
}

#[derive(Debug)]
pub struct SlotSender<T>(watch::Sender<Option<T>>);

impl<T> SlotSender<T> {
    pub fn publish(&self, value: T) {
        self.0.send_replace(Some(value));
    }
}

/// Cloning yields an independent reader with its own notion of "already seen".
#[derive(Debug, Clone)]
pub struct SlotReceiver<T>(watch::Receiver<Option<T>>);

impl<T: Clone> SlotReceiver<T> {
    pub fn take(&mut self) -> Option<T> {
        match self.0.has_changed() {
            Ok(true) => self.0.borrow_and_update().clone(),
            _ => None,
        }
    }
}

pub struct InputPorts {
    pub selections: SlotSender<SelectionChange>,
    pub modes: SlotSender<ModeChange>,
}

pub struct AcquisitionPorts {
    pub selections: SlotReceiver<SelectionChange>,
    pub series: mpsc::Sender<PriceSeries>,
}

pub struct DisplayPorts {
    pub selections: SlotReceiver<SelectionChange>,
    pub modes: SlotReceiver<ModeChange>,
    pub series: mpsc::Receiver<PriceSeries>,
}

pub fn wire() -> (InputPorts, AcquisitionPorts, DisplayPorts) {
    let (selection_tx, selection_rx) = slot();
    let (mode_tx, mode_rx) = slot();
    let (series_tx, series_rx) = mpsc::channel(SERIES_CAPACITY);

    (
        InputPorts {
            selections: selection_tx,
            modes: mode_tx,
        },
        AcquisitionPorts {
            selections: selection_rx.clone(),
            series: series_tx,
        },
        DisplayPorts {
            selections: selection_rx,
            modes: mode_rx,
            series: series_rx,
        },
    )
}
