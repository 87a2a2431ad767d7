// data/source.rs
use crate::data::DataError;
use crate::domain::CampaignRecord;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Where the campaign list is read from. Read exactly once, at startup.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// `http://` / `https://` values are URLs, everything else is a file path.
    pub fn parse(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            DataSource::Url(value.to_string())
        } else {
            DataSource::File(PathBuf::from(value))
        }
    }
}

#[derive(Deserialize)]
struct Envelope {
    data: Vec<CampaignRecord>,
}

/// The asset wraps the list as `{"data": [...]}`; a bare array is accepted too.
fn parse_campaigns(json: &str) -> Result<Vec<CampaignRecord>, DataError> {
    let parsed = if json.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<CampaignRecord>>(json)
    } else {
        serde_json::from_str::<Envelope>(json).map(|env| env.data)
    };

    parsed.map_err(|e| DataError::Parse(e.to_string()))
}

pub fn load_campaigns(
    source: &DataSource,
    timeout: Duration,
) -> Result<Vec<CampaignRecord>, DataError> {
    let body = match source {
        DataSource::File(path) => fs::read_to_string(path)
            .map_err(|e| DataError::Io(format!("{}: {e}", path.display())))?,
        DataSource::Url(url) => fetch(url, timeout)?,
    };

    let records = parse_campaigns(&body)?;
    info!(count = records.len(), source = ?source, "loaded campaigns");
    Ok(records)
}

fn fetch(url: &str, timeout: Duration) -> Result<String, DataError> {
    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| DataError::Http(e.to_string()))?;

    let resp = client
        .get(url)
        .send()
        .map_err(|e| DataError::Http(format!("{url}: {e}")))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(DataError::Http(format!("{url}: status {status}")));
    }

    resp.text().map_err(|e| DataError::Http(e.to_string()))
}
