//! Fakes shared by the task tests.

use crate::data::{PriceSeries, PriceSource, Symbol};
use crate::error::FetchError;
use crate::ui::{RenderSink, View};
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

/// Serves prices from a script; `None` entries and an exhausted script fail.
#[derive(Clone, Default)]
pub struct ScriptedSource {
    script: Arc<Mutex<VecDeque<Option<Vec<f64>>>>>,
    calls: Arc<Mutex<Vec<Symbol>>>,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = Option<Vec<f64>>>) -> Self {
        Self {
            script: Arc::new(Mutex::new(script.into_iter().collect())),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<Symbol> {
        self.calls.lock().unwrap().clone()
    }
}

impl PriceSource for ScriptedSource {
    async fn fetch(&self, symbol: &Symbol) -> Result<PriceSeries, FetchError> {
        self.calls.lock().unwrap().push(symbol.clone());
        let next = self.script.lock().unwrap().pop_front().flatten();
        next.map(|prices| PriceSeries::new(symbol.clone(), prices))
            .ok_or(FetchError::Status(StatusCode::SERVICE_UNAVAILABLE))
    }
}

#[derive(Clone, Default)]
pub struct RecordingSink {
    frames: Arc<Mutex<Vec<View>>>,
}

impl RecordingSink {
    pub fn frames(&self) -> Vec<View> {
        self.frames.lock().unwrap().clone()
    }

    pub fn headlines(&self) -> Vec<String> {
        self.frames()
            .iter()
            .map(|view| view.lines().into_iter().next().unwrap_or_default())
            .collect()
    }
}

impl RenderSink for RecordingSink {
    fn draw(&mut self, view: &View) -> io::Result<()> {
        self.frames.lock().unwrap().push(view.clone());
        Ok(())
    }
}

pub struct BrokenSink;

impl RenderSink for BrokenSink {
    fn draw(&mut self, _view: &View) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"))
    }
}

pub fn symbol(code: &str) -> Symbol {
    Symbol::new(code).unwrap()
}
