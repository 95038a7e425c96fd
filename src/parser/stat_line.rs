use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;

use crate::error::{Result, StatsError};

/// Named stat values in the order the provider lists them
///
/// Values are kept as the provider sent them (usually numeric strings) and
/// only read as numbers when a caller asks for one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct StatLine {
    entries: Vec<(String, Value)>,
}

impl From<Map<String, Value>> for StatLine {
    fn from(object: Map<String, Value>) -> Self {
        Self {
            entries: object.into_iter().collect(),
        }
    }
}

impl StatLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value of `name`
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Numeric value of `name`; `Ok(None)` if the stat is absent
    pub fn number(&self, name: &str) -> Result<Option<f64>> {
        self.get(name)
            .map(|value| parse_stat_value(name, value))
            .transpose()
    }

    /// Set a stat, keeping its original position if it already exists
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Store a computed stat the way the provider writes aggregates
    pub fn insert_number(&mut self, name: impl Into<String>, value: f64) {
        self.insert(name, Value::String(format_stat(value)));
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let position = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(position).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Every stat read as a number, failing on the first one that is not
    pub fn numbers(&self) -> impl Iterator<Item = Result<(&str, f64)>> {
        self.entries
            .iter()
            .map(|(n, v)| parse_stat_value(n, v).map(|value| (n.as_str(), value)))
    }
}

impl fmt::Display for StatLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match value {
                Value::String(s) => write!(f, "{}: {}", name, s)?,
                other => write!(f, "{}: {}", name, other)?,
            }
        }
        Ok(())
    }
}

/// Stat values arrive as numeric strings; bare numbers are accepted too
pub fn parse_stat_value(name: &str, value: &Value) -> Result<f64> {
    let parsed = match value {
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    };

    parsed.ok_or_else(|| StatsError::NotNumeric {
        stat: name.to_string(),
        value: match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
    })
}

/// Round to two decimals, ties to even
pub fn round_stat(value: f64) -> f64 {
    let scaled = value * 100.0;
    let mut rounded = scaled.round();
    if (scaled - scaled.trunc()).abs() == 0.5 && rounded % 2.0 != 0.0 {
        rounded -= scaled.signum();
    }
    rounded / 100.0
}

/// Render a stat the way the provider writes aggregates: at most two
/// decimals, no trailing zeros (`15`, `10.33`, `7.5`)
pub fn format_stat(value: f64) -> String {
    let text = format!("{:.2}", round_stat(value));
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}
