use std::{borrow::Cow, time::Duration};

use serde::{de, Deserialize, Deserializer};
use url::Url;

/// Binance reports timestamps as integer milliseconds since the epoch.
pub fn deser_duration_from_integer<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Duration, D::Error> {
    let number = <u64>::deserialize(deserializer)?;
    Ok(Duration::from_millis(number))
}

/// Prices and quantities come over the wire as decimal strings.
pub fn deser_float_from_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<f64, D::Error> {
    let string_value = Cow::<str>::deserialize(deserializer)?;
    string_value.as_ref().trim().parse().map_err(de::Error::custom)
}

pub fn deserialize_url<'de, D: Deserializer<'de>>(deser: D) -> Result<Url, D::Error> {
    let s = Cow::<str>::deserialize(deser)?;
    s.as_ref().parse().map_err(de::Error::custom)
}
