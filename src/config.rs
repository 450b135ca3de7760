use crate::data::Symbol;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.exmo.com/v1.1";
pub const DEFAULT_LOG_FILE: &str = "tickerchart.log";

pub const FETCH_INTERVAL: Duration = Duration::from_secs(1);
pub const INPUT_INTERVAL: Duration = Duration::from_millis(100);
pub const DISPLAY_INTERVAL: Duration = Duration::from_millis(100);

/// Digit keys `1`-`9` address the watchlist, so it never grows past this.
pub const MAX_WATCHLIST: usize = 9;

const BASE_URL_VAR: &str = "TICKERCHART_BASE_URL";
const SYMBOLS_VAR: &str = "TICKERCHART_SYMBOLS";
const LOG_FILE_VAR: &str = "TICKERCHART_LOG_FILE";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub base_url: String,
    pub watchlist: Vec<Symbol>,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            watchlist: default_watchlist(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(BASE_URL_VAR) {
            config.base_url = url;
        }

        if let Some(symbols) = lookup(SYMBOLS_VAR) {
            config.watchlist = symbols
                .split(',')
                .filter_map(|code| Symbol::new(code).ok())
                .collect();
        }

        if let Some(path) = lookup(LOG_FILE_VAR) {
            config.log_file = PathBuf::from(path);
        }

        config.sanitized()
    }

    pub fn sanitized(mut self) -> Self {
        if self.watchlist.is_empty() {
            self.watchlist = default_watchlist();
        }
        self.watchlist.truncate(MAX_WATCHLIST);

        let trimmed = self.base_url.trim().trim_end_matches('/');
        self.base_url = if trimmed.is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };

        if self.log_file.as_os_str().is_empty() {
            self.log_file = PathBuf::from(DEFAULT_LOG_FILE);
        }
        self
    }
}

pub fn default_watchlist() -> Vec<Symbol> {
    ["BTC_USD", "LTC_USD", "ETH_USD"]
        .into_iter()
        .filter_map(|code| Symbol::new(code).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        let codes: Vec<&str> = config.watchlist.iter().map(Symbol::as_str).collect();
        assert_eq!(codes, ["BTC_USD", "LTC_USD", "ETH_USD"]);
    }

    #[test]
    fn test_symbols_override_skips_blank_entries() {
        let config = AppConfig::from_lookup(lookup_from(&[(SYMBOLS_VAR, "XRP_USD, ,DOGE_USD,")]));
        let codes: Vec<&str> = config.watchlist.iter().map(Symbol::as_str).collect();
        assert_eq!(codes, ["XRP_USD", "DOGE_USD"]);
    }

    #[test]
    fn test_blank_symbols_fall_back_to_default() {
        let config = AppConfig::from_lookup(lookup_from(&[(SYMBOLS_VAR, " , ")]));
        assert_eq!(config.watchlist, default_watchlist());
    }

    #[test]
    fn test_watchlist_truncated_to_digit_keys() {
        let symbols = (0..12).map(|i| format!("S{i}_USD")).collect::<Vec<_>>().join(",");
        let config = AppConfig::from_lookup(lookup_from(&[(SYMBOLS_VAR, symbols.as_str())]));
        assert_eq!(config.watchlist.len(), MAX_WATCHLIST);
        assert_eq!(config.watchlist[8].as_str(), "S8_USD");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = AppConfig::from_lookup(lookup_from(&[(BASE_URL_VAR, "http://localhost:9000/v1/")]));
        assert_eq!(config.base_url, "http://localhost:9000/v1");
    }

    #[test]
    fn test_blank_base_url_uses_default() {
        let config = AppConfig::from_lookup(lookup_from(&[(BASE_URL_VAR, "  ")]));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_log_file_override() {
        let config = AppConfig::from_lookup(lookup_from(&[(LOG_FILE_VAR, "/tmp/chart.log")]));
        assert_eq!(config.log_file, PathBuf::from("/tmp/chart.log"));
    }
}
