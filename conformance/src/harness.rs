use binance::{
    spot::{
        server_time::ServerTime,
        ticker_price::{SymbolPrice, TickerPriceQuery},
        EXCHANGE_INFO, SERVER_TIME, TICKER_PRICE,
    },
    Client, RawResponse,
};
use serde_json::Value;
use tracing::{info, warn};

use crate::{
    config::HarnessConfig,
    contract::{self, ContractViolation},
    error::Error,
};

/// A configured client plus one method per contract scenario.
///
/// Each method issues exactly one request and checks its response; a
/// transport failure surfaces as [`ContractViolation::Request`].
#[derive(Debug, Clone)]
pub struct Harness {
    config: HarnessConfig,
    client: Client,
}

/// Runs `contract` on a delivered response; a failed request counts as a
/// violation too, so every outcome gets logged the same way.
fn report<T>(
    check: &str,
    response: Result<RawResponse, binance::Error>,
    contract: impl FnOnce(&RawResponse) -> Result<T, ContractViolation>,
) -> Result<T, ContractViolation> {
    let result = response
        .map_err(ContractViolation::from)
        .and_then(|response| contract(&response));
    match &result {
        Ok(_) => info!(check, "Contract holds"),
        Err(e) => warn!(check, %e, "Contract violated"),
    }
    result
}

impl Harness {
    pub fn new(config: HarnessConfig) -> Result<Self, Error> {
        let client = Client::new(config.api_host.clone(), config.timeout)?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub async fn ticker_price(&self, symbol: &str) -> Result<SymbolPrice, ContractViolation> {
        let response = self
            .client
            .get_with_query(TICKER_PRICE, &TickerPriceQuery::symbol(symbol))
            .await;
        report("ticker_price", response, |r| contract::check_ticker_price(r, symbol))
    }

    pub async fn all_ticker_prices(&self) -> Result<Vec<Value>, ContractViolation> {
        let response = self.client.get(TICKER_PRICE).await;
        report("all_ticker_prices", response, |r| {
            contract::check_all_ticker_prices(
                r,
                self.config.min_listed_prices,
                self.config.sampled_prices,
            )
        })
    }

    pub async fn invalid_symbol(&self, symbol: &str) -> Result<Value, ContractViolation> {
        let response = self
            .client
            .get_with_query(TICKER_PRICE, &TickerPriceQuery::symbol(symbol))
            .await;
        report("invalid_symbol", response, contract::check_invalid_symbol)
    }

    pub async fn server_time(&self) -> Result<ServerTime, ContractViolation> {
        let response = self.client.get(SERVER_TIME).await;
        report("server_time", response, contract::check_server_time)
    }

    pub async fn exchange_info(&self) -> Result<Value, ContractViolation> {
        let response = self.client.get(EXCHANGE_INFO).await;
        report("exchange_info", response, contract::check_exchange_info)
    }

    pub async fn unknown_endpoint(&self) -> Result<(), ContractViolation> {
        let response = self.client.get(&self.config.unknown_endpoint).await;
        report("unknown_endpoint", response, contract::check_unknown_endpoint)
    }
}
