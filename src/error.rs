use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SymbolError {
    #[error("symbol cannot be empty")]
    Empty,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API request failed with status code: {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to decode response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("API returned empty response for pair: {0}")]
    UnknownSymbol(String),

    #[error("API returned no trades for pair: {0}")]
    EmptySeries(String),

    #[error("trade price '{value}' is not a number")]
    InvalidPrice { value: String },
}

/// Conditions that end the input task and, with it, the process.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read keyboard event: {0}")]
    Read(#[from] std::io::Error),

    #[error("keyboard event stream closed")]
    Closed,
}
