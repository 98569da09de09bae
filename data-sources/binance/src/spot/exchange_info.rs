use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use toolset::deser_duration_from_integer;

/// Symbol descriptors are kept raw: their shape grows with every API
/// release, decode them with [`ExchangeInfo::decoded_symbols`] when needed.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeInfo {
    pub timezone: String,
    #[serde(deserialize_with = "deser_duration_from_integer")]
    pub server_time: Duration,
    pub symbols: Vec<Value>,
}

impl ExchangeInfo {
    pub fn decoded_symbols(&self) -> Result<Vec<Symbol>, serde_json::Error> {
        self.symbols
            .iter()
            .cloned()
            .map(serde_json::from_value)
            .collect()
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Limit,
    LimitMaker,
    Market,
    StopLoss,
    StopLossLimit,
    TakeProfit,
    TakeProfitLimit,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    pub symbol: String,
    pub status: String,
    pub base_asset: String,
    pub quote_asset: String,
    #[serde(default)]
    pub order_types: Vec<OrderType>,
    #[serde(default)]
    pub is_spot_trading_allowed: bool,
}
