use crate::error::SymbolError;
use std::fmt;

/// Trading pair code such as `BTC_USD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(code: impl Into<String>) -> Result<Self, SymbolError> {
        let code = code.into().trim().to_string();
        if code.is_empty() {
            return Err(SymbolError::Empty);
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Prices from one successful fetch, oldest first.
///
/// The symbol is the one the fetch was issued for and cannot be changed
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    symbol: Symbol,
    prices: Vec<f64>,
}

impl PriceSeries {
    pub fn new(symbol: Symbol, prices: Vec<f64>) -> Self {
        Self { symbol, prices }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn last_price(&self) -> Option<f64> {
        self.prices.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }
}
