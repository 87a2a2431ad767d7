// config.rs
use crate::data::DataSource;
use crate::locale::Locale;
use chrono::{DateTime, NaiveDate, Utc};
use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(name = "campaign-dashboard")]
#[command(about = "Upcoming / live / past campaign dashboard")]
#[command(version)]
pub struct AppConfig {
    /// Address to listen on
    #[arg(long, env = "DASHBOARD_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    /// Campaign data: a file path, or an http(s) URL
    #[arg(long, env = "DASHBOARD_DATA", default_value = "assets/campaigns.json")]
    pub data: String,

    /// Display locale (en, fr)
    #[arg(long, env = "DASHBOARD_LOCALE", default_value = "en")]
    pub locale: Locale,

    /// Request worker threads
    #[arg(long, env = "DASHBOARD_WORKERS", default_value_t = 8)]
    pub workers: usize,

    /// Timeout for fetching campaign data over HTTP
    #[arg(long, default_value_t = 30)]
    pub fetch_timeout_secs: u64,

    /// Pin "today" to a fixed date (YYYY-MM-DD) instead of the system clock
    #[arg(long, value_parser = parse_day)]
    pub today: Option<DateTime<Utc>>,
}

impl AppConfig {
    pub fn data_source(&self) -> DataSource {
        DataSource::parse(&self.data)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

/// `YYYY-MM-DD` -> midnight UTC of that day.
pub fn parse_day(value: &str) -> Result<DateTime<Utc>, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("expected a YYYY-MM-DD date, got '{value}'"))
}
