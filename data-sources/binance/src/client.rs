use core::fmt;
use std::time::Duration;

use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::{
    error::Error,
    protocol::{ApiError, Response},
};

/// Thin GET-only wrapper around `reqwest`.
///
/// Every HTTP status is handed back as a [`RawResponse`]; only transport
/// failures (timeout, dns, refused connection) become errors. Nothing is
/// retried.
#[derive(Clone, Debug)]
pub struct Client {
    api_host: Url,
    timeout: Duration,
    http: reqwest::Client,
}

impl Client {
    pub fn new(api_host: Url, timeout: Duration) -> Result<Self, Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            api_host,
            timeout,
            http,
        })
    }

    pub fn api_host(&self) -> &Url {
        &self.api_host
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Base address and endpoint are concatenated, so a path prefix on the
    /// base address survives.
    pub fn url(&self, endpoint: &str) -> Result<Url, Error> {
        let raw = format!(
            "{}/{}",
            self.api_host.as_str().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );
        Url::parse(&raw).map_err(|e| Error::Url(e, raw))
    }

    pub async fn get(&self, endpoint: &str) -> Result<RawResponse, Error> {
        info!(?endpoint, "Run query");
        self.send(endpoint, None).await
    }

    /// `query` must serialize as a struct or a map.
    pub async fn get_with_query<Q>(&self, endpoint: &str, query: &Q) -> Result<RawResponse, Error>
    where
        Q: Serialize + fmt::Debug,
    {
        let qs = serde_qs::to_string(query)?;

        info!(?endpoint, ?query, ?qs, "Run query");
        self.send(endpoint, Some(qs)).await
    }

    async fn send(&self, endpoint: &str, qs: Option<String>) -> Result<RawResponse, Error> {
        let mut url = self.url(endpoint)?;
        if let Some(qs) = qs.filter(|qs| !qs.is_empty()) {
            url.set_query(Some(&qs));
        }

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(%status, %url, len = body.len(), "Got response");
        Ok(RawResponse { status, url, body })
    }
}

/// Status line and body exactly as the server sent them.
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: StatusCode,
    url: Url,
    body: String,
}

impl RawResponse {
    pub fn new(status: StatusCode, url: Url, body: impl Into<String>) -> Self {
        Self {
            status,
            url,
            body: body.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_str(&self.body).map_err(|e| Error::SerdeError(e, self.body.clone()))
    }

    /// Like [`RawResponse::json`], but an error envelope becomes [`Error::Api`].
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, Error> {
        self.json::<Response<T>>()?.into_result()
    }

    pub fn api_error(&self) -> Option<ApiError> {
        serde_json::from_str(&self.body).ok()
    }
}
