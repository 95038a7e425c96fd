//! Retrieval of player profile documents.
//!
//! A [`Fetcher`] turns a location into a parsed JSON value. Locations come
//! from [`PlayerPages`], which knows how the provider lays out profile
//! documents. Remote providers are read over HTTP, local directories of saved
//! documents straight from disk.

pub mod http;
pub mod local;
pub mod pages;

pub use http::HttpFetcher;
pub use local::LocalFetcher;
pub use pages::PlayerPages;

use serde_json::Value;
use tracing::debug;

use crate::config::ProviderConfig;
use crate::error::{Result, StatsError};

/// Source of JSON documents
pub trait Fetcher: Send + Sync {
    /// Retrieve the document at `location` and parse it as JSON
    fn fetch_json(&self, location: &str) -> Result<Value>;
}

impl<F: Fetcher + ?Sized> Fetcher for Box<F> {
    fn fetch_json(&self, location: &str) -> Result<Value> {
        (**self).fetch_json(location)
    }
}

/// Pick the fetcher matching the configured base
pub fn fetcher_for(config: &ProviderConfig) -> Result<Box<dyn Fetcher>> {
    if config.is_remote() {
        Ok(Box::new(HttpFetcher::new(config.timeout)?))
    } else {
        Ok(Box::new(LocalFetcher))
    }
}

/// Parse a fetched body, keeping bad content distinct from transport failures
pub fn parse_document(location: &str, body: &str) -> Result<Value> {
    debug!(location, bytes = body.len(), "parsing document");
    serde_json::from_str(body).map_err(|source| StatsError::InvalidContents {
        location: location.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document_accepts_json() {
        let value = parse_document("mem", r#"{"league": {}}"#).unwrap();
        assert!(value.get("league").is_some());
    }

    #[test]
    fn test_parse_document_rejects_html() {
        let err = parse_document("mem", "<html><body>moved</body></html>").unwrap_err();
        assert!(matches!(err, StatsError::InvalidContents { .. }));
        assert!(!err.is_transport());
    }

    #[test]
    fn test_fetcher_for_local_base() {
        let config = ProviderConfig {
            base_url: "profiles".to_string(),
            ..ProviderConfig::default()
        };
        assert!(fetcher_for(&config).is_ok());
    }
}
