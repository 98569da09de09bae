use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot read config: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("Cannot parse config: {0}")]
    ConfigFormat(#[from] serde_yaml::Error),

    #[error("Cannot build client: {0}")]
    Client(#[from] binance::Error),
}
