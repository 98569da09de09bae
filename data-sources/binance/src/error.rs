use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot build url <{1}>: {0}")]
    Url(url::ParseError, String),

    #[error("Cannot encode query: {0}")]
    Query(#[from] serde_qs::Error),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Cannot parse message <{1}>: {0}")]
    SerdeError(serde_json::Error, String),

    #[error("Binance error {code} ({msg})")]
    Api { code: i64, msg: String },
}

impl Error {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(e) if e.is_timeout())
    }
}
