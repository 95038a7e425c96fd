use clap::{Parser, Subcommand};
use std::time::Duration;

use crate::config::{ProviderConfig, DEFAULT_BASE_URL, DEFAULT_REFERENCE_ID, DEFAULT_TIMEOUT_SECS};

pub const BANNER: &str = "Welcome to the Fantasy Basketball Analysis Tool";

#[derive(Parser, Debug)]
#[command(name = "nba-stats")]
#[command(version, about = "Read normalized NBA player season stats")]
pub struct Cli {
    /// Base URL of profile documents, or a directory of saved ones
    #[arg(long, env = "NBA_STATS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Player whose latest season defines the stat schema
    #[arg(long, env = "NBA_STATS_REFERENCE_ID", default_value_t = DEFAULT_REFERENCE_ID)]
    pub reference_id: u32,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Print every stat of a player's most recent season
    Show {
        person_id: u32,

        /// Season year instead of the most recent one
        #[arg(short, long)]
        season: Option<u32>,
    },

    /// Print selected stats of a player
    Stat {
        person_id: u32,

        /// Stat names, e.g. ppg td3
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// List the stat names known to the schema
    ListStats,

    /// Print the profile document location for a player
    Url { person_id: u32 },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    pub fn config(&self) -> ProviderConfig {
        ProviderConfig {
            base_url: self.base_url.clone(),
            reference_id: self.reference_id,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["nba-stats"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.config().reference_id, DEFAULT_REFERENCE_ID);
    }

    #[test]
    fn test_stat_command_and_flags() {
        let cli = Cli::parse_from([
            "nba-stats",
            "--base-url",
            "./profiles",
            "--timeout-secs",
            "3",
            "stat",
            "203500",
            "ppg",
            "td3",
        ]);
        assert_eq!(
            cli.command,
            Some(Commands::Stat {
                person_id: 203500,
                names: vec!["ppg".to_string(), "td3".to_string()],
            })
        );
        let config = cli.config();
        assert_eq!(config.base_url, "./profiles");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_stat_requires_names() {
        assert!(Cli::try_parse_from(["nba-stats", "stat", "203500"]).is_err());
    }
}
