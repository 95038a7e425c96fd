use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::StatLine;
use crate::error::{Result, StatsError};

const SEASONS_PATH: &str = "league.standard.stats.regularSeason.season";
const TEAM_ID: &str = "teamId";

// Layout of a profile document down to the season list. Every step is
// optional so an absent one can be reported by path.

#[derive(Debug, Deserialize)]
struct ProfileDocument {
    league: Option<League>,
}

#[derive(Debug, Deserialize)]
struct League {
    standard: Option<Standard>,
}

#[derive(Debug, Deserialize)]
struct Standard {
    stats: Option<StandardStats>,
}

#[derive(Debug, Deserialize)]
struct StandardStats {
    #[serde(rename = "regularSeason")]
    regular_season: Option<RegularSeason>,
}

#[derive(Debug, Deserialize)]
struct RegularSeason {
    season: Option<Vec<RawSeason>>,
}

#[derive(Debug, Deserialize)]
struct RawSeason {
    #[serde(rename = "seasonYear", default, deserialize_with = "season_year")]
    year: Option<u32>,
    teams: Option<Vec<TeamStats>>,
    total: Option<StatLine>,
}

/// One team's stats for a season
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamStats {
    #[serde(rename = "teamId", default, deserialize_with = "team_id")]
    pub team_id: Option<String>,
    #[serde(flatten)]
    pub stats: StatLine,
}

/// One year of regular season stats, possibly split across teams
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonEntry {
    pub year: Option<u32>,
    pub teams: Vec<TeamStats>,
    /// Whole-season aggregate; always present for seasons with teams once
    /// the profile has been normalized
    pub total: Option<StatLine>,
}

impl SeasonEntry {
    pub fn total(&self) -> Result<&StatLine> {
        self.total.as_ref().ok_or_else(|| match self.year {
            Some(year) => StatsError::missing(format!("{SEASONS_PATH}(seasonYear={year}).total")),
            None => StatsError::missing(format!("{SEASONS_PATH}(seasonYear=?).total")),
        })
    }

    pub fn is_multi_team(&self) -> bool {
        self.teams.len() > 1
    }
}

/// Regular season history of one player, most recent season first
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerProfile {
    pub seasons: Vec<SeasonEntry>,
}

impl PlayerProfile {
    /// Read `league.standard.stats.regularSeason.season[]` of a profile document
    ///
    /// Only the layout is checked here; stat values stay raw until used.
    pub fn from_document(document: &Value) -> Result<Self> {
        let document =
            ProfileDocument::deserialize(document).map_err(|source| StatsError::Shape { source })?;

        let seasons = document
            .league
            .ok_or_else(|| StatsError::missing("league"))?
            .standard
            .ok_or_else(|| StatsError::missing("league.standard"))?
            .stats
            .ok_or_else(|| StatsError::missing("league.standard.stats"))?
            .regular_season
            .ok_or_else(|| StatsError::missing("league.standard.stats.regularSeason"))?
            .season
            .ok_or_else(|| StatsError::missing(SEASONS_PATH))?;

        let seasons = seasons
            .into_iter()
            .enumerate()
            .map(|(i, season)| -> Result<SeasonEntry> {
                let teams = season
                    .teams
                    .ok_or_else(|| StatsError::missing(format!("{SEASONS_PATH}[{i}].teams")))?;
                let total = season.total.map(|mut total| {
                    total.remove(TEAM_ID);
                    total
                });
                Ok(SeasonEntry {
                    year: season.year,
                    teams,
                    total,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { seasons })
    }

    /// The most recent season, which the provider lists first
    pub fn latest(&self) -> Result<&SeasonEntry> {
        self.seasons
            .first()
            .ok_or_else(|| StatsError::missing(format!("{SEASONS_PATH}[0]")))
    }

    pub fn season(&self, year: u32) -> Option<&SeasonEntry> {
        self.seasons.iter().find(|s| s.year == Some(year))
    }
}

/// `seasonYear` shows up both as a number and as a string
fn season_year<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_u64().and_then(|y| u32::try_from(y).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn team_id<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(seasons: Value) -> Value {
        json!({"league": {"standard": {"stats": {"regularSeason": {"season": seasons}}}}})
    }

    #[test]
    fn test_parses_seasons_in_order() {
        let doc = document(json!([
            {"seasonYear": 2019, "teams": [{"teamId": "1", "ppg": "10"}], "total": {"ppg": "10"}},
            {"seasonYear": 2018, "teams": [{"teamId": 1, "ppg": "8"}], "total": {"ppg": "8"}}
        ]));
        let profile = PlayerProfile::from_document(&doc).unwrap();
        assert_eq!(profile.seasons.len(), 2);
        assert_eq!(profile.latest().unwrap().year, Some(2019));
        assert_eq!(
            profile.season(2018).unwrap().total().unwrap().number("ppg").unwrap(),
            Some(8.0)
        );
        assert_eq!(profile.seasons[0].teams[0].team_id.as_deref(), Some("1"));
        assert_eq!(profile.seasons[1].teams[0].team_id.as_deref(), Some("1"));
        assert_eq!(
            profile.seasons[0].teams[0].stats.names().collect::<Vec<_>>(),
            vec!["ppg"]
        );
    }

    #[test]
    fn test_missing_league_path() {
        let err = PlayerProfile::from_document(&json!({"league": {"vegas": {}}})).unwrap_err();
        match err {
            StatsError::MissingPath { path } => assert_eq!(path, "league.standard"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_wrong_layout_is_shape_error() {
        let err = PlayerProfile::from_document(&json!({"league": "closed"})).unwrap_err();
        assert!(matches!(err, StatsError::Shape { .. }));
        assert!(!err.is_transport());
    }

    #[test]
    fn test_missing_teams_fails_fast() {
        let doc = document(json!([{"seasonYear": 2019, "total": {"ppg": "1"}}]));
        let err = PlayerProfile::from_document(&doc).unwrap_err();
        match err {
            StatsError::MissingPath { path } => {
                assert_eq!(path, "league.standard.stats.regularSeason.season[0].teams")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_value_in_old_season_is_not_read() {
        let doc = document(json!([
            {"seasonYear": 2019, "teams": [{"teamId": "1", "ppg": "10"}], "total": {"ppg": "10"}},
            {"seasonYear": 2010, "teams": [{"teamId": "1", "ppg": ""}], "total": {"ppg": ""}}
        ]));
        let profile = PlayerProfile::from_document(&doc).unwrap();
        let latest = profile.latest().unwrap().total().unwrap();
        assert_eq!(latest.number("ppg").unwrap(), Some(10.0));
        assert!(profile.season(2010).unwrap().total().unwrap().number("ppg").is_err());
    }

    #[test]
    fn test_empty_history_has_no_latest() {
        let profile = PlayerProfile::from_document(&document(json!([]))).unwrap();
        assert!(profile.latest().is_err());
    }

    #[test]
    fn test_season_without_total() {
        let doc = document(json!([{"seasonYear": "2019", "teams": []}]));
        let profile = PlayerProfile::from_document(&doc).unwrap();
        let season = profile.latest().unwrap();
        assert_eq!(season.year, Some(2019));
        match season.total().unwrap_err() {
            StatsError::MissingPath { path } => assert_eq!(
                path,
                "league.standard.stats.regularSeason.season(seasonYear=2019).total"
            ),
            other => panic!("unexpected error: {other}"),
        }
    }
}
