//! Per-player stat vectors laid out by a shared [`StatSchema`].

use std::fmt;
use std::iter::FusedIterator;
use std::sync::Arc;

use crate::error::{Result, StatsError};
use crate::parser::StatLine;
use crate::schema::StatSchema;

/// One named stat value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatEntry<'a> {
    pub name: &'a str,
    pub value: f64,
}

impl fmt::Display for StatEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug formatting keeps a decimal on whole numbers ("15.0")
        write!(f, "{}: {:?}", self.name, self.value)
    }
}

/// A player's season stats, one slot per schema entry
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStats {
    schema: Arc<StatSchema>,
    values: Vec<f64>,
    season_year: Option<u32>,
}

impl PlayerStats {
    /// Lay out `total` by `schema`. Every stat in `total` must be numeric and
    /// registered; an unknown one means the provider changed its data shape.
    pub fn from_total(schema: Arc<StatSchema>, total: &StatLine) -> Result<Self> {
        let mut values = vec![0.0; schema.len()];
        for entry in total.numbers() {
            let (name, value) = entry?;
            let index = schema
                .index_of(name)
                .ok_or_else(|| StatsError::UnknownStat {
                    stat: name.to_string(),
                })?;
            values[index] = value;
        }

        Ok(Self {
            schema,
            values,
            season_year: None,
        })
    }

    pub fn with_season_year(mut self, year: Option<u32>) -> Self {
        self.season_year = year;
        self
    }

    pub fn season_year(&self) -> Option<u32> {
        self.season_year
    }

    /// Value of `name`, or 0.0 if the schema has no such stat
    pub fn get_stat(&self, name: &str) -> f64 {
        self.stat(name).unwrap_or(0.0)
    }

    /// Value of `name`, or `None` if the schema has no such stat
    pub fn stat(&self, name: &str) -> Option<f64> {
        self.schema.index_of(name).map(|i| self.values[i])
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn schema(&self) -> &Arc<StatSchema> {
        &self.schema
    }

    /// Fresh cursor over every stat in schema order
    pub fn iter(&self) -> StatsIter<'_> {
        StatsIter {
            stats: self,
            cursor: 0,
        }
    }
}

impl fmt::Display for PlayerStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a PlayerStats {
    type Item = StatEntry<'a>;
    type IntoIter = StatsIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct StatsIter<'a> {
    stats: &'a PlayerStats,
    cursor: usize,
}

impl<'a> Iterator for StatsIter<'a> {
    type Item = StatEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.stats.schema.names().get(self.cursor)?;
        let value = *self.stats.values.get(self.cursor)?;
        self.cursor += 1;
        Some(StatEntry { name, value })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.stats.len().saturating_sub(self.cursor);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StatsIter<'_> {}

impl FusedIterator for StatsIter<'_> {}
