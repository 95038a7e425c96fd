use std::sync::Arc;
use tracing::debug;

use crate::config::ProviderConfig;
use crate::error::{Result, StatsError};
use crate::fetch::{fetcher_for, Fetcher, PlayerPages};
use crate::normalize::normalize;
use crate::parser::PlayerProfile;
use crate::schema::{SchemaCache, StatSchema};
use crate::stats::PlayerStats;

/// Fetch, parse and normalize one player's profile document
pub fn load_profile(
    fetcher: &dyn Fetcher,
    pages: &PlayerPages,
    person_id: u32,
) -> Result<PlayerProfile> {
    let location = pages.profile_url(person_id);
    debug!(person_id, %location, "loading profile");
    let document = fetcher.fetch_json(&location)?;
    let mut profile = PlayerProfile::from_document(&document)?;
    normalize(&mut profile)?;
    Ok(profile)
}

/// Entry point for reading player stats
///
/// Owns the fetcher and the schema cache; the schema is built from the
/// reference player on first use and shared by every record after that.
pub struct StatsClient {
    fetcher: Box<dyn Fetcher>,
    pages: PlayerPages,
    reference_id: u32,
    schema: SchemaCache,
}

impl StatsClient {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        Ok(Self::with_fetcher(config, fetcher_for(config)?))
    }

    pub fn with_fetcher(config: &ProviderConfig, fetcher: Box<dyn Fetcher>) -> Self {
        Self {
            fetcher,
            pages: PlayerPages::from_config(config),
            reference_id: config.reference_id,
            schema: SchemaCache::new(),
        }
    }

    /// Use an already built schema instead of fetching the reference player
    pub fn with_schema(mut self, schema: StatSchema) -> Self {
        self.schema = SchemaCache::with_schema(schema);
        self
    }

    pub fn pages(&self) -> &PlayerPages {
        &self.pages
    }

    /// The stat schema, built on first call
    pub fn schema(&self) -> Result<Arc<StatSchema>> {
        self.schema
            .get_or_build(self.fetcher.as_ref(), &self.pages, self.reference_id)
    }

    pub fn profile(&self, person_id: u32) -> Result<PlayerProfile> {
        load_profile(self.fetcher.as_ref(), &self.pages, person_id)
    }

    /// Stats for the player's most recent season
    pub fn player_stats(&self, person_id: u32) -> Result<PlayerStats> {
        let schema = self.schema()?;
        let profile = self.profile(person_id)?;
        let season = profile.latest()?;
        Ok(PlayerStats::from_total(schema, season.total()?)?.with_season_year(season.year))
    }

    /// Stats for a specific season
    pub fn season_stats(&self, person_id: u32, year: u32) -> Result<PlayerStats> {
        let schema = self.schema()?;
        let profile = self.profile(person_id)?;
        let season = profile
            .season(year)
            .ok_or(StatsError::UnknownSeason { person_id, year })?;
        Ok(PlayerStats::from_total(schema, season.total()?)?.with_season_year(season.year))
    }
}
