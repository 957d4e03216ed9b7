use anyhow::Result;
use minijinja::{context, Environment};
use serde::Serialize;
use service::model::DisplayRow;
use url::Url;

const PAGE: &str = "page.html";

/// Table cells for one row. Text is escaped by the template engine.
#[derive(Serialize)]
struct RowView<'a> {
    key: usize,
    endpoint: &'a str,
    block_height: String,
    tx_index: &'a str,
    moniker: &'a str,
    is_validator: bool,
    validator: &'static str,
    scan_time: &'a str,
}

impl<'a> From<&'a DisplayRow> for RowView<'a> {
    fn from(row: &'a DisplayRow) -> Self {
        Self {
            key: row.key,
            endpoint: &row.endpoint,
            block_height: row.block_height(),
            tx_index: row.tx_index.as_deref().unwrap_or_default(),
            moniker: row.moniker.as_deref().unwrap_or_default(),
            is_validator: row.is_validator(),
            validator: row.validator_label(),
            scan_time: &row.scan_time,
        }
    }
}

/// Templates ending in `.html` are auto-escaped.
pub fn templates() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.add_template(PAGE, include_str!("../templates/page.html"))?;
    Ok(env)
}

pub fn page(env: &Environment<'_>, rows: &[DisplayRow], snapshot_url: &Url) -> Result<String> {
    let rows = rows.iter().map(RowView::from).collect::<Vec<_>>();
    let html = env.get_template(PAGE)?.render(context! {
        rows => rows,
        snapshot_url => snapshot_url.as_str(),
    })?;
    Ok(html)
}
