use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::client::load_profile;
use crate::error::Result;
use crate::fetch::{Fetcher, PlayerPages};
use crate::parser::StatLine;

/// Ordered mapping from stat name to its slot in a stat vector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatSchema {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl StatSchema {
    /// Index every stat of `total` by its position of first appearance
    pub fn from_total(total: &StatLine) -> Self {
        Self::from_names(total.names())
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut schema = StatSchema {
            names: Vec::new(),
            index: HashMap::new(),
        };
        for name in names {
            let name = name.into();
            if !schema.index.contains_key(&name) {
                schema.index.insert(name.clone(), schema.names.len());
                schema.names.push(name);
            }
        }
        schema
    }

    /// Build from the most recent season of the reference player
    pub fn from_reference(
        fetcher: &dyn Fetcher,
        pages: &PlayerPages,
        reference_id: u32,
    ) -> Result<Self> {
        let profile = load_profile(fetcher, pages, reference_id)?;
        let schema = Self::from_total(profile.latest()?.total()?);
        info!(reference_id, stats = schema.len(), "built stat schema");
        Ok(schema)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn is_valid(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Stat names in index order
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// Builds the schema at most once and hands out the shared copy afterwards
///
/// Concurrent first callers block on the same initialization. A failed build
/// leaves the cache empty so the next call tries again.
#[derive(Debug, Default)]
pub struct SchemaCache {
    cell: OnceCell<Arc<StatSchema>>,
}

impl SchemaCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache that already holds `schema`
    pub fn with_schema(schema: StatSchema) -> Self {
        Self {
            cell: OnceCell::with_value(Arc::new(schema)),
        }
    }

    pub fn get(&self) -> Option<Arc<StatSchema>> {
        self.cell.get().cloned()
    }

    pub fn get_or_build(
        &self,
        fetcher: &dyn Fetcher,
        pages: &PlayerPages,
        reference_id: u32,
    ) -> Result<Arc<StatSchema>> {
        self.cell
            .get_or_try_init(|| {
                StatSchema::from_reference(fetcher, pages, reference_id).map(Arc::new)
            })
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_by_first_appearance() {
        let schema = StatSchema::from_names(["ppg", "rpg", "apg", "rpg"]);
        assert_eq!(schema.len(), 3);
        assert_eq!(schema.index_of("ppg"), Some(0));
        assert_eq!(schema.index_of("apg"), Some(2));
        assert_eq!(schema.index_of("td3"), None);
        assert!(schema.is_valid("rpg"));
        assert!(!schema.is_valid("teamId"));
    }

    #[test]
    fn test_from_total_follows_line_order() {
        let mut total = StatLine::new();
        total.insert_number("td3", 1.0);
        total.insert_number("ppg", 20.0);
        let schema = StatSchema::from_total(&total);
        assert_eq!(schema.names(), ["td3".to_string(), "ppg".to_string()]);
    }

    #[test]
    fn test_preloaded_cache() {
        let cache = SchemaCache::with_schema(StatSchema::from_names(["ppg"]));
        assert_eq!(cache.get().unwrap().len(), 1);
        assert!(SchemaCache::new().get().is_none());
    }
}
