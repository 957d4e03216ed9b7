use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use common::snapshot::Snapshot;
use url::Url;

pub const DEFAULT_SNAPSHOT_URL: &str = "https://testnet-files.itrocket.net/source/.rpc_combined.json";

#[async_trait]
pub trait SnapshotClient: Sync + Send {
    /// Fetches the latest RPC scan results. Any transport, status or decoding
    /// failure is returned as an error.
    async fn fetch_snapshot(&self) -> Result<Snapshot>;
}

pub struct HttpClient {
    snapshot_url: Url,
    client: Arc<reqwest::Client>,
}

impl HttpClient {
    pub fn new(snapshot_url: Url) -> Self {
        let client = Arc::new(reqwest::Client::new());
        Self { snapshot_url, client }
    }
}

#[async_trait]
impl SnapshotClient for HttpClient {
    async fn fetch_snapshot(&self) -> Result<Snapshot> {
        let url = self.snapshot_url.clone();
        log::debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        response.error_for_status_ref()?;
        let snapshot = response.json::<Snapshot>().await?;
        log::debug!("Fetched {} endpoints", snapshot.len());
        Ok(snapshot)
    }
}
