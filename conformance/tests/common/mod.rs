#![allow(dead_code)]

//! In-process stand-in for the spot REST endpoints, bound to an ephemeral port.

use std::{collections::HashMap, time::Duration};

use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
use binance::spot::{EXCHANGE_INFO, SERVER_TIME, TICKER_PRICE};
use chrono::Utc;
use conformance::HarnessConfig;
use serde_json::{json, Value};
use url::Url;

pub const LISTED: [&str; 3] = ["BTCUSDT", "ETHUSDT", "ADAUSDT"];
pub const LISTING_LEN: usize = 150;
pub const SLOW: &str = "/api/v3/slow";
pub const SLOW_DELAY: Duration = Duration::from_secs(2);

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn listing() -> Value {
    let generated = (0..LISTING_LEN - LISTED.len()).map(|i| {
        let base: String = [b'A' + (i / 26 % 26) as u8, b'A' + (i % 26) as u8, b'X']
            .iter()
            .map(|&b| b as char)
            .collect();
        format!("{base}USDT")
    });

    LISTED
        .iter()
        .map(|s| s.to_string())
        .chain(generated)
        .enumerate()
        .map(|(i, symbol)| json!({"symbol": symbol, "price": format!("{}.50000000", i + 1)}))
        .collect()
}

async fn ticker_price(Query(params): Query<HashMap<String, String>>) -> (StatusCode, Json<Value>) {
    match params.get("symbol").map(String::as_str) {
        None => (StatusCode::OK, Json(listing())),
        Some("") => (
            StatusCode::BAD_REQUEST,
            Json(json!({"code": -1105, "msg": "Parameter 'symbol' was empty."})),
        ),
        Some(symbol) if LISTED.contains(&symbol) => (
            StatusCode::OK,
            Json(json!({"symbol": symbol, "price": "1234.56000000"})),
        ),
        Some(_) => (
            StatusCode::BAD_REQUEST,
            Json(json!({"code": -1121, "msg": "Invalid symbol."})),
        ),
    }
}

async fn server_time() -> Json<Value> {
    Json(json!({"serverTime": Utc::now().timestamp_millis()}))
}

async fn exchange_info() -> Json<Value> {
    let symbols: Vec<Value> = LISTED
        .iter()
        .map(|symbol| {
            json!({
                "symbol": symbol,
                "status": "TRADING",
                "baseAsset": symbol.trim_end_matches("USDT"),
                "quoteAsset": "USDT",
                "orderTypes": ["LIMIT", "LIMIT_MAKER", "MARKET"],
                "isSpotTradingAllowed": true
            })
        })
        .collect();

    Json(json!({
        "timezone": "UTC",
        "serverTime": Utc::now().timestamp_millis(),
        "rateLimits": [],
        "exchangeFilters": [],
        "symbols": symbols
    }))
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(SLOW_DELAY).await;
    Json(json!({}))
}

/// Serves the stub until the test runtime shuts down and returns its base address.
pub async fn spawn_stub() -> Url {
    init_tracing();

    let app = Router::new()
        .route(TICKER_PRICE, get(ticker_price))
        .route(SERVER_TIME, get(server_time))
        .route(EXCHANGE_INFO, get(exchange_info))
        .route(SLOW, get(slow));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });

    Url::parse(&format!("http://{addr}")).expect("stub url")
}

pub async fn stub_config() -> HarnessConfig {
    HarnessConfig::default().with_api_host(spawn_stub().await)
}
