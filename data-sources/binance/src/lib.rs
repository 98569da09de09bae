pub mod client;
pub mod error;
pub mod protocol;
pub mod spot;

pub use client::{Client, RawResponse};
pub use error::Error;
pub use protocol::ApiError;
pub use reqwest::StatusCode;
