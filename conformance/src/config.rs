use std::{fs::File, io::Read, path::Path, time::Duration};

use serde::Deserialize;
use toolset::deserialize_url;
use tracing::info;
use url::Url;

use crate::error::Error;

const BINANCE_API_HOST: &str = "https://api.binance.com";

/// Everything a conformance run needs to know, fixed for its whole lifetime.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct HarnessConfig {
    #[serde(deserialize_with = "deserialize_url")]
    pub api_host: Url,
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
    pub valid_symbols: Vec<String>,
    pub invalid_symbols: Vec<String>,
    pub unknown_endpoint: String,
    /// The unfiltered price listing must be strictly longer than this.
    pub min_listed_prices: usize,
    /// How many leading entries of the listing get field-level checks.
    pub sampled_prices: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            api_host: default_api_host(),
            timeout: Duration::from_secs(10),
            valid_symbols: ["BTCUSDT", "ETHUSDT", "ADAUSDT"].map(String::from).to_vec(),
            invalid_symbols: ["INVALIDCOIN", "NOTEXIST", "123ABC", ""]
                .map(String::from)
                .to_vec(),
            unknown_endpoint: "/api/v3/invalid_endpoint".into(),
            min_listed_prices: 100,
            sampled_prices: 3,
        }
    }
}

fn default_api_host() -> Url {
    Url::parse(BINANCE_API_HOST).expect("static url")
}

impl HarnessConfig {
    pub fn with_api_host(self, api_host: Url) -> Self {
        Self { api_host, ..self }
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }

    pub fn from_yaml_reader(reader: impl Read) -> Result<Self, Error> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let config = Self::from_yaml_reader(File::open(path)?)?;

        info!(?path, api_host = %config.api_host, "Loaded harness config");
        Ok(config)
    }
}
