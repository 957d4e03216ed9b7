use chrono::{DateTime, Utc};
use common::{endpoint::EndpointStatus, snapshot::Snapshot, util::is_missing};

use crate::{
    model::{DisplayRow, NOT_AVAILABLE},
    time::format_relative,
};

/// Builds one row per snapshot entry, in snapshot order.
pub fn to_rows(snapshot: &Snapshot, now: DateTime<Utc>) -> Vec<DisplayRow> {
    snapshot
        .iter()
        .enumerate()
        .map(|(key, (endpoint, status))| to_row(key, endpoint, status, now))
        .collect()
}

fn to_row(key: usize, endpoint: &str, status: &EndpointStatus, now: DateTime<Utc>) -> DisplayRow {
    DisplayRow {
        key,
        endpoint: endpoint.to_string(),
        latest_block_height: or_not_available(status.latest_block_height.as_deref()),
        earliest_block_height: or_not_available(status.earliest_block_height.as_deref()),
        tx_index: status.tx_index.clone(),
        moniker: status.moniker.clone(),
        validator: status.voting_power.clone(),
        scan_time: scan_time_label(endpoint, status.scan_time.as_deref(), now),
    }
}

fn or_not_available(value: Option<&str>) -> String {
    if is_missing(value) {
        NOT_AVAILABLE.to_string()
    } else {
        value.unwrap_or_default().to_string()
    }
}

fn scan_time_label(endpoint: &str, scan_time: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(scan_time) = scan_time else {
        log::warn!("No scan time for {endpoint}");
        return NOT_AVAILABLE.to_string();
    };
    match format_relative(scan_time, now) {
        Ok(label) => label,
        Err(e) => {
            log::warn!("Bad scan time for {endpoint}: {e:?}");
            NOT_AVAILABLE.to_string()
        }
    }
}
