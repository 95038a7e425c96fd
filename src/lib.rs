pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod normalize;
pub mod parser;
pub mod schema;
pub mod stats;

pub use cli::{Cli, Commands};
pub use client::StatsClient;
pub use config::ProviderConfig;
pub use error::{Result, StatsError};
pub use schema::{SchemaCache, StatSchema};
pub use stats::{PlayerStats, StatEntry};
