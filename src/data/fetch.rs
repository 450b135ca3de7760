use crate::data::{PriceSeries, Symbol};
use crate::error::FetchError;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// One-shot price lookup for a trading pair.
///
/// Implementations make a single attempt per call and report failures as-is;
/// retrying is the caller's concern.
pub trait PriceSource: Send + Sync {
    fn fetch(
        &self,
        symbol: &Symbol,
    ) -> impl Future<Output = Result<PriceSeries, FetchError>> + Send;
}

#[derive(Debug, Clone, Deserialize)]
pub struct Trade {
    #[serde(default)]
    pub trade_id: i64,
    pub price: String,
    #[serde(default)]
    pub timestamp: i64,
}

/// `GET {base_url}/trades?pair={symbol}` against an EXMO-style trades endpoint.
#[derive(Debug, Clone)]
pub struct TradesApi {
    client: Client,
    base_url: String,
}

impl TradesApi {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl PriceSource for TradesApi {
    async fn fetch(&self, symbol: &Symbol) -> Result<PriceSeries, FetchError> {
        let url = format!("{}/trades", self.base_url);
        let res = self
            .client
            .get(&url)
            .query(&[("pair", symbol.as_str())])
            .send()
            .await?;

        let status = res.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status));
        }

        let body = res.text().await?;
        parse_trades(symbol, &body)
    }
}

/// Either every price parses or the whole body is rejected.
pub fn parse_trades(symbol: &Symbol, body: &str) -> Result<PriceSeries, FetchError> {
    let mut response: HashMap<String, Vec<Trade>> = serde_json::from_str(body)?;
    let mut trades = response
        .remove(symbol.as_str())
        .ok_or_else(|| FetchError::UnknownSymbol(symbol.to_string()))?;

    if trades.is_empty() {
        return Err(FetchError::EmptySeries(symbol.to_string()));
    }

    trades.sort_by_key(|t| (t.timestamp, t.trade_id));

    let prices = trades
        .iter()
        .map(|t| match t.price.trim().parse::<f64>() {
            Ok(price) if price.is_finite() => Ok(price),
            _ => Err(FetchError::InvalidPrice {
                value: t.price.clone(),
            }),
        })
        .collect::<Result<Vec<f64>, FetchError>>()?;

    Ok(PriceSeries::new(symbol.clone(), prices))
}
