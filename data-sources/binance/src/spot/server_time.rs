use std::time::Duration;

use serde::Deserialize;
use toolset::deser_duration_from_integer;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServerTime {
    #[serde(deserialize_with = "deser_duration_from_integer")]
    pub server_time: Duration,
}

impl ServerTime {
    pub fn as_millis(&self) -> i64 {
        i64::try_from(self.server_time.as_millis()).unwrap_or(i64::MAX)
    }
}
