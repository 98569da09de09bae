//! Plausibility predicates for raw response fields.
//!
//! None of these ever panic: anything that can't be classified is invalid.

use std::sync::LazyLock;

use chrono::Utc;
use regex::Regex;
use serde_json::Value;

/// Largest tolerated distance between a reported timestamp and the local clock.
pub const MAX_CLOCK_SKEW_MS: u64 = 300_000;

// The quote asset list is closed: pairs quoted in anything else are rejected.
static SYMBOL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3,10}(USDT|BTC|ETH|BNB)$").expect("valid pattern"));

/// The price carried by `value` when it is a number, or a decimal string,
/// strictly above zero.
///
/// Absent fields and `null` are invalid, as are non-finite values.
pub fn valid_price<'v>(value: impl Into<Option<&'v Value>>) -> Option<f64> {
    let price = match value.into() {
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(Value::Number(n)) => n.as_f64(),
        _ => None,
    };

    price.filter(|p| p.is_finite() && *p > 0.0)
}

pub fn is_valid_price<'v>(value: impl Into<Option<&'v Value>>) -> bool {
    valid_price(value).is_some()
}

pub fn is_valid_symbol(value: &str) -> bool {
    SYMBOL_PATTERN.is_match(value)
}

/// Compares against the wall clock sampled at call time.
pub fn is_time_reasonable(value: i64) -> bool {
    is_time_reasonable_at(value, Utc::now().timestamp_millis())
}

pub fn is_time_reasonable_at(value: i64, now_ms: i64) -> bool {
    now_ms.abs_diff(value) < MAX_CLOCK_SKEW_MS
}
