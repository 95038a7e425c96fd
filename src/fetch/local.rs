use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

use super::{parse_document, Fetcher};
use crate::error::{Result, StatsError};

/// Reads saved profile documents from disk
///
/// Locations are plain paths; a leading `file://` is stripped.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFetcher;

impl Fetcher for LocalFetcher {
    fn fetch_json(&self, location: &str) -> Result<Value> {
        let path = PathBuf::from(location.strip_prefix("file://").unwrap_or(location));
        debug!(?path, "reading local document");

        let body = std::fs::read_to_string(&path).map_err(|source| StatsError::Io {
            path: path.clone(),
            source,
        })?;

        parse_document(location, &body)
    }
}
