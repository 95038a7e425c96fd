use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::{parse_document, Fetcher};
use crate::error::{Result, StatsError};

const USER_AGENT: &str = concat!("nba-player-stats/", env!("CARGO_PKG_VERSION"));

/// Reads profile documents from the remote provider
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::with_user_agent(USER_AGENT, timeout)
    }

    fn with_user_agent(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|source| StatsError::Client { source })?;
        Ok(Self { client })
    }

    /// Fetch the raw body at `url`
    pub fn fetch_text(&self, url: &str) -> Result<String> {
        debug!(url, "fetching");
        let transport = |source| StatsError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(StatsError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(transport)
    }
}

impl Fetcher for HttpFetcher {
    fn fetch_json(&self, location: &str) -> Result<Value> {
        let body = self.fetch_text(location)?;
        parse_document(location, &body)
    }
}
