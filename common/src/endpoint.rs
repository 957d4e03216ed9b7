use serde::{Deserialize, Serialize};

use crate::util::deserialize_lenient_string;

/// Scan result for a single public RPC endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EndpointStatus {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub latest_block_height: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub earliest_block_height: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub tx_index: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub moniker: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub voting_power: Option<String>,
    /// `YYYY-MM-DDTHH:MM`, no seconds.
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub scan_time: Option<String>,
}
