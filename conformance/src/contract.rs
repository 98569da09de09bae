//! Response contracts of the spot REST endpoints.
//!
//! Each check takes the raw response of one scenario, asserts status, field
//! presence and field plausibility, and hands back what it inspected. Only
//! the checked fields have to be well formed; the rest of a body is passed
//! through untouched.

use binance::{
    spot::{server_time::ServerTime, ticker_price::SymbolPrice},
    RawResponse, StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::validator::{is_time_reasonable, is_valid_price, is_valid_symbol, valid_price};

#[derive(Error, Debug)]
pub enum ContractViolation {
    #[error("{url}: expected status {expected}, got {actual}")]
    Status {
        url: Url,
        expected: StatusCode,
        actual: StatusCode,
    },

    #[error("{url}: body does not match the payload: {source}")]
    Body { url: Url, source: binance::Error },

    #[error("{url}: missing field `{field}`")]
    MissingField { url: Url, field: &'static str },

    #[error("{url}: implausible `{field}`: {value}")]
    InvalidField {
        url: Url,
        field: &'static str,
        value: Value,
    },

    #[error("{url}: expected a json array")]
    NotAnArray { url: Url },

    #[error("{url}: expected more than {min} entries, got {actual}")]
    TooFewEntries { url: Url, min: usize, actual: usize },

    #[error("{url}: requested {requested}, got {actual}")]
    SymbolMismatch {
        url: Url,
        requested: String,
        actual: Value,
    },

    #[error("Request failed: {0}")]
    Request(#[from] binance::Error),
}

fn expect_status(response: &RawResponse, expected: StatusCode) -> Result<(), ContractViolation> {
    if response.status() == expected {
        Ok(())
    } else {
        Err(ContractViolation::Status {
            url: response.url().clone(),
            expected,
            actual: response.status(),
        })
    }
}

fn body(response: &RawResponse) -> Result<Value, ContractViolation> {
    response
        .json::<Value>()
        .map_err(|source| ContractViolation::Body {
            url: response.url().clone(),
            source,
        })
}

fn payload<T: DeserializeOwned>(response: &RawResponse) -> Result<T, ContractViolation> {
    response
        .decode::<T>()
        .map_err(|source| ContractViolation::Body {
            url: response.url().clone(),
            source,
        })
}

fn field<'b>(
    response: &RawResponse,
    body: &'b Value,
    field: &'static str,
) -> Result<&'b Value, ContractViolation> {
    body.get(field).ok_or_else(|| ContractViolation::MissingField {
        url: response.url().clone(),
        field,
    })
}

fn invalid(response: &RawResponse, field: &'static str, value: &Value) -> ContractViolation {
    ContractViolation::InvalidField {
        url: response.url().clone(),
        field,
        value: value.clone(),
    }
}

fn price_entry(response: &RawResponse, entry: &Value) -> Result<(), ContractViolation> {
    let symbol = field(response, entry, "symbol")?;
    let price = field(response, entry, "price")?;

    if !symbol.as_str().is_some_and(is_valid_symbol) {
        return Err(invalid(response, "symbol", symbol));
    }
    if !is_valid_price(price) {
        return Err(invalid(response, "price", price));
    }
    Ok(())
}

/// Price lookup for a listed symbol.
pub fn check_ticker_price(
    response: &RawResponse,
    symbol: &str,
) -> Result<SymbolPrice, ContractViolation> {
    expect_status(response, StatusCode::OK)?;
    let body = body(response)?;

    let reported = field(response, &body, "symbol")?;
    let price = field(response, &body, "price")?;

    if reported.as_str() != Some(symbol) {
        return Err(ContractViolation::SymbolMismatch {
            url: response.url().clone(),
            requested: symbol.to_string(),
            actual: reported.clone(),
        });
    }
    let price = valid_price(price).ok_or_else(|| invalid(response, "price", price))?;

    Ok(SymbolPrice {
        symbol: symbol.to_string(),
        price,
    })
}

/// Unfiltered price listing: longer than `min_entries`, first `sample` entries well formed.
pub fn check_all_ticker_prices(
    response: &RawResponse,
    min_entries: usize,
    sample: usize,
) -> Result<Vec<Value>, ContractViolation> {
    expect_status(response, StatusCode::OK)?;

    let Value::Array(entries) = body(response)? else {
        return Err(ContractViolation::NotAnArray {
            url: response.url().clone(),
        });
    };
    if entries.len() <= min_entries {
        return Err(ContractViolation::TooFewEntries {
            url: response.url().clone(),
            min: min_entries,
            actual: entries.len(),
        });
    }

    for entry in entries.iter().take(sample) {
        price_entry(response, entry)?;
    }

    Ok(entries)
}

/// A rejected symbol answers 400 with a body carrying `code` and `msg`.
pub fn check_invalid_symbol(response: &RawResponse) -> Result<Value, ContractViolation> {
    expect_status(response, StatusCode::BAD_REQUEST)?;
    let body = body(response)?;

    field(response, &body, "code")?;
    field(response, &body, "msg")?;

    Ok(body)
}

pub fn check_server_time(response: &RawResponse) -> Result<ServerTime, ContractViolation> {
    expect_status(response, StatusCode::OK)?;
    let body = body(response)?;

    let server_time = field(response, &body, "serverTime")?;
    match server_time.as_i64() {
        Some(ts) if is_time_reasonable(ts) => payload(response),
        _ => Err(invalid(response, "serverTime", server_time)),
    }
}

pub fn check_exchange_info(response: &RawResponse) -> Result<Value, ContractViolation> {
    expect_status(response, StatusCode::OK)?;
    let body = body(response)?;

    field(response, &body, "timezone")?;
    field(response, &body, "serverTime")?;
    let symbols = field(response, &body, "symbols")?
        .as_array()
        .ok_or_else(|| ContractViolation::NotAnArray {
            url: response.url().clone(),
        })?;
    if symbols.is_empty() {
        return Err(ContractViolation::TooFewEntries {
            url: response.url().clone(),
            min: 0,
            actual: 0,
        });
    }

    Ok(body)
}

pub fn check_unknown_endpoint(response: &RawResponse) -> Result<(), ContractViolation> {
    expect_status(response, StatusCode::NOT_FOUND)
}
