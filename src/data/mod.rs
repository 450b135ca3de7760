pub mod fetch;
pub mod prices;

pub use fetch::{PriceSource, TradesApi};
pub use prices::{PriceSeries, Symbol};
