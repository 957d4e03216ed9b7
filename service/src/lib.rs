pub mod model;
pub mod row;
pub mod time;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use client::SnapshotClient;
use common::snapshot::Snapshot;
use model::DisplayRow;

#[async_trait]
pub trait Service: Sync + Send {
    /// Latest scan results, or an empty snapshot when they cannot be fetched.
    async fn get_snapshot(&self) -> Snapshot;
    async fn get_rows(&self, now: DateTime<Utc>) -> Vec<DisplayRow>;
}

#[derive(Clone)]
pub struct ServiceImpl {
    client: Arc<dyn SnapshotClient>,
}

impl ServiceImpl {
    pub fn new(client: Arc<dyn SnapshotClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Service for ServiceImpl {
    async fn get_snapshot(&self) -> Snapshot {
        match self.client.fetch_snapshot().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                log::error!("Error fetching RPC scan results: {:?}", e);
                Snapshot::new()
            }
        }
    }

    async fn get_rows(&self, now: DateTime<Utc>) -> Vec<DisplayRow> {
        let snapshot = self.get_snapshot().await;
        row::to_rows(&snapshot, now)
    }
}
