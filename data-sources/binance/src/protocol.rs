use serde::Deserialize;

use crate::error::Error;

/// Every REST endpoint answers either with its payload or with this envelope.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: i64,
    pub msg: String,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum Response<T> {
    Success(T),
    Error(ApiError),
}

impl<T> Response<T> {
    pub fn into_result(self) -> Result<T, Error> {
        match self {
            Response::Success(t) => Ok(t),
            Response::Error(ApiError { code, msg }) => Err(Error::Api { code, msg }),
        }
    }
}
