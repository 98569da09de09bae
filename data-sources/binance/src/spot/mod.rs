use core::fmt;

use serde::{de::DeserializeOwned, Serialize};

use crate::{client::Client, error::Error};

use self::{
    exchange_info::ExchangeInfo,
    server_time::ServerTime,
    ticker_price::{SymbolPrice, TickerPriceQuery},
};

pub mod exchange_info;
pub mod server_time;
pub mod ticker_price;

pub const TICKER_PRICE: &str = "/api/v3/ticker/price";
pub const SERVER_TIME: &str = "/api/v3/time";
pub const EXCHANGE_INFO: &str = "/api/v3/exchangeInfo";

pub async fn fetch<Q, R>(client: &Client, path: &str, query: &Q) -> Result<R, Error>
where
    Q: Serialize + fmt::Debug,
    R: DeserializeOwned,
{
    client.get_with_query(path, query).await?.decode()
}

pub async fn fetch_ticker_price(client: &Client, symbol: &str) -> Result<SymbolPrice, Error> {
    fetch(client, TICKER_PRICE, &TickerPriceQuery::symbol(symbol)).await
}

pub async fn fetch_all_ticker_prices(client: &Client) -> Result<Vec<SymbolPrice>, Error> {
    fetch(client, TICKER_PRICE, &TickerPriceQuery::default()).await
}

pub async fn fetch_server_time(client: &Client) -> Result<ServerTime, Error> {
    client.get(SERVER_TIME).await?.decode()
}

pub async fn fetch_exchange_info(client: &Client) -> Result<ExchangeInfo, Error> {
    client.get(EXCHANGE_INFO).await?.decode()
}
