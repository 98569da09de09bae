use serde::{Deserialize, Serialize};
use toolset::deser_float_from_string;

/// Without a symbol the endpoint lists every traded pair.
#[derive(Debug, Default, Clone, Serialize)]
pub struct TickerPriceQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl TickerPriceQuery {
    pub fn symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SymbolPrice {
    pub symbol: String,
    #[serde(deserialize_with = "deser_float_from_string")]
    pub price: f64,
}
