use crate::config::ProviderConfig;

/// Builds profile document locations from player identifiers
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerPages {
    base: String,
}

impl PlayerPages {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        let base = base.trim_end_matches('/').to_string();
        Self { base }
    }

    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::new(config.base_url.as_str())
    }

    /// Location of the profile document for `person_id`
    pub fn profile_url(&self, person_id: u32) -> String {
        format!("{}/{}_profile.json", self.base, person_id)
    }
}

impl Default for PlayerPages {
    fn default() -> Self {
        Self::from_config(&ProviderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_url() {
        let pages = PlayerPages::default();
        assert_eq!(
            pages.profile_url(203500),
            "http://data.nba.net/prod/v1/2019/players/203500_profile.json"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let pages = PlayerPages::new("fixtures/");
        assert_eq!(pages.profile_url(7), "fixtures/7_profile.json");
    }
}
