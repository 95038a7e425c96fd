//! Error types for fetching and reading player stats.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for stats operations.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Errors that can occur while fetching, normalizing or indexing stats.
#[derive(Debug, Error)]
pub enum StatsError {
    /// The remote resource could not be reached or its body could not be read.
    #[error("failed to fetch {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-success status.
    #[error("http {status} from {url}")]
    Status { url: String, status: u16 },

    /// The HTTP client could not be set up.
    #[error("failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    /// A local profile document could not be read.
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The body was read but is not a JSON document.
    #[error("{location} does not contain a JSON document: {source}")]
    InvalidContents {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    /// The JSON does not follow the profile document layout.
    #[error("document does not match the profile layout: {source}")]
    Shape {
        #[source]
        source: serde_json::Error,
    },

    /// A step of the document path is absent.
    #[error("document is missing `{path}`")]
    MissingPath { path: String },

    /// A stat value could not be read as a number.
    #[error("stat `{stat}` has non-numeric value {value:?}")]
    NotNumeric { stat: String, value: String },

    /// Provider data carries a stat the schema does not know about.
    #[error("stat `{stat}` is not part of the stat schema")]
    UnknownStat { stat: String },

    /// The requested season is not present in the player's document.
    #[error("no season {year} for player {person_id}")]
    UnknownSeason { person_id: u32, year: u32 },
}

impl StatsError {
    pub(crate) fn missing(path: impl Into<String>) -> Self {
        StatsError::MissingPath { path: path.into() }
    }

    /// True for failures to reach or read the resource, as opposed to bad data.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            StatsError::Transport { .. } | StatsError::Status { .. } | StatsError::Io { .. }
        )
    }
}
