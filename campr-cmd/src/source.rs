//! Loading a dataset from disk or over HTTP.

use anyhow::Context;
use campr_data::{Dataset, ParkIndex};
use log::info;

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Raw JSON text of `source`.
pub async fn read_source(source: &str) -> anyhow::Result<String> {
    if !is_url(source) {
        return std::fs::read_to_string(source).with_context(|| format!("reading {}", source));
    }

    info!("Fetching dataset from {}", source);
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;
    let response = client.get(source).send().await?;
    if !response.status().is_success() {
        anyhow::bail!("GET {} returned {}", source, response.status());
    }
    Ok(response.text().await?)
}

/// Parse and validate JSON text into an index.
pub fn index_from_json(json: &str) -> anyhow::Result<ParkIndex> {
    let dataset = Dataset::from_json(json).context("parsing campsite dataset")?;
    let index = ParkIndex::build(dataset).context("validating campsite dataset")?;
    Ok(index)
}

pub async fn load_index(source: &str) -> anyhow::Result<ParkIndex> {
    let json = read_source(source).await?;
    index_from_json(&json)
}
