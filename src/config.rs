use std::time::Duration;

/// Default location of player profile documents
pub const DEFAULT_BASE_URL: &str = "http://data.nba.net/prod/v1/2019/players";

/// Player whose most recent season defines the stat schema (Steven Adams)
pub const DEFAULT_REFERENCE_ID: u32 = 203500;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where profile documents come from and which player anchors the schema
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    /// `http(s)://` URL or a local directory holding `<id>_profile.json` files
    pub base_url: String,
    pub reference_id: u32,
    pub timeout: Duration,
}

impl ProviderConfig {
    /// True when the base points at a remote provider rather than a directory
    pub fn is_remote(&self) -> bool {
        self.base_url.starts_with("http://") || self.base_url.starts_with("https://")
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            reference_id: DEFAULT_REFERENCE_ID,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_remote() {
        let config = ProviderConfig::default();
        assert!(config.is_remote());
        assert_eq!(config.reference_id, 203500);
    }

    #[test]
    fn test_directory_is_local() {
        let config = ProviderConfig {
            base_url: "./profiles".to_string(),
            ..ProviderConfig::default()
        };
        assert!(!config.is_remote());
    }
}
