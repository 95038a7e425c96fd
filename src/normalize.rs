//! Season normalization.
//!
//! A player traded mid-season shows up with one stat set per team and no
//! usable whole-season total. Normalizing gives every season with teams
//! exactly one `total`:
//! - one team: the provider's total is kept; if it is absent the team's own
//!   stats stand in for it
//! - several teams: each stat is summed over the teams listing it and divided
//!   by the number of teams, rounded to two decimals and stored as the
//!   provider writes it (`"15"`, `"10.33"`)
//!
//! The mean is weighted by team count, not by games played with each team.
//! A player with 60 games in one uniform and 5 in another gets both stints
//! counted equally. This is a known approximation.

use tracing::debug;

use crate::error::Result;
use crate::parser::{PlayerProfile, SeasonEntry, StatLine};

/// Give every season of the profile a single aggregate total
///
/// Only multi-team seasons have their values read; a stat there that is not
/// a number fails the whole profile.
pub fn normalize(profile: &mut PlayerProfile) -> Result<()> {
    for season in &mut profile.seasons {
        normalize_season(season)?;
    }
    Ok(())
}

pub fn normalize_season(season: &mut SeasonEntry) -> Result<()> {
    if season.is_multi_team() {
        debug!(year = ?season.year, team_count = season.teams.len(), "averaging multi-team season");
        season.total = Some(average_teams(season)?);
    } else if season.total.is_none() {
        if let Some(team) = season.teams.first() {
            season.total = Some(team.stats.clone());
        }
    }
    Ok(())
}

fn average_teams(season: &SeasonEntry) -> Result<StatLine> {
    let mut sums: Vec<(&str, f64)> = Vec::new();
    for team in &season.teams {
        for entry in team.stats.numbers() {
            let (name, value) = entry?;
            match sums.iter_mut().find(|(n, _)| *n == name) {
                Some(slot) => slot.1 += value,
                None => sums.push((name, value)),
            }
        }
    }

    let team_count = season.teams.len() as f64;
    let mut total = StatLine::new();
    for (name, sum) in sums {
        total.insert_number(name, sum / team_count);
    }
    Ok(total)
}
