use serde::Serialize;

/// Shown in place of a missing block height or an unreadable scan time.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub key: usize,
    pub endpoint: String,
    pub latest_block_height: String,
    pub earliest_block_height: String,
    #[serde(rename = "txIndex")]
    pub tx_index: Option<String>,
    pub moniker: Option<String>,
    /// Raw voting power as reported by the node.
    pub validator: Option<String>,
    pub scan_time: String,
}

impl DisplayRow {
    pub fn block_height(&self) -> String {
        format!("{} - {}", self.earliest_block_height, self.latest_block_height)
    }

    pub fn is_validator(&self) -> bool {
        self.validator.as_deref() != Some("0")
    }

    pub fn validator_label(&self) -> &'static str {
        if self.is_validator() {
            "yes"
        } else {
            "no"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(validator: Option<&str>) -> DisplayRow {
        DisplayRow {
            key: 0,
            endpoint: "node.example.com:443".to_string(),
            latest_block_height: "100".to_string(),
            earliest_block_height: NOT_AVAILABLE.to_string(),
            tx_index: None,
            moniker: None,
            validator: validator.map(str::to_string),
            scan_time: NOT_AVAILABLE.to_string(),
        }
    }

    #[test]
    fn block_height_range() {
        assert_eq!(row(None).block_height(), "N/A - 100");
    }

    #[test]
    fn unknown_voting_power_is_flagged() {
        assert_eq!(row(Some("0")).validator_label(), "no");
        assert_eq!(row(None).validator_label(), "yes");
    }
}
