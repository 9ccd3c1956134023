//! Persisted row shape for the season-stats table.

use crate::cli::types::{PlayerId, SeasonId};
use serde::{Deserialize, Serialize};

/// One row of the persisted table: a player's aggregate line for one season.
///
/// Field names are serde-renamed to the upper-snake headers the stats API
/// uses, so the CSV header row matches the source columns. `PLAYER_ID` is
/// optional because tables written before the id column existed lack it;
/// those rows are backfilled from the roster on load where possible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonStatRow {
    #[serde(rename = "PLAYER_NAME")]
    pub player_name: String,
    #[serde(rename = "PLAYER_ID", default)]
    pub player_id: Option<PlayerId>,
    #[serde(rename = "SEASON_ID")]
    pub season_id: SeasonId,
    #[serde(rename = "TEAM_ABBREVIATION", default)]
    pub team: Option<String>,
    #[serde(rename = "GP", default)]
    pub games_played: Option<u64>,
    #[serde(rename = "MIN", default)]
    pub minutes: Option<f64>,
    #[serde(rename = "FGM", default)]
    pub fgm: Option<f64>,
    #[serde(rename = "FGA", default)]
    pub fga: Option<f64>,
    #[serde(rename = "FG_PCT", default)]
    pub fg_pct: Option<f64>,
    #[serde(rename = "FG3M", default)]
    pub fg3m: Option<f64>,
    #[serde(rename = "FG3A", default)]
    pub fg3a: Option<f64>,
    #[serde(rename = "FG3_PCT", default)]
    pub fg3_pct: Option<f64>,
    #[serde(rename = "FTM", default)]
    pub ftm: Option<f64>,
    #[serde(rename = "FTA", default)]
    pub fta: Option<f64>,
    #[serde(rename = "FT_PCT", default)]
    pub ft_pct: Option<f64>,
    #[serde(rename = "OREB", default)]
    pub oreb: Option<f64>,
    #[serde(rename = "DREB", default)]
    pub dreb: Option<f64>,
    #[serde(rename = "REB", default)]
    pub reb: Option<f64>,
    #[serde(rename = "AST", default)]
    pub ast: Option<f64>,
    #[serde(rename = "STL", default)]
    pub stl: Option<f64>,
    #[serde(rename = "BLK", default)]
    pub blk: Option<f64>,
    #[serde(rename = "TOV", default)]
    pub tov: Option<f64>,
    #[serde(rename = "PF", default)]
    pub pf: Option<f64>,
    #[serde(rename = "PTS", default)]
    pub pts: Option<f64>,
    #[serde(rename = "PLUS_MINUS", default)]
    pub plus_minus: Option<f64>,
}

impl SeasonStatRow {
    /// Minimal row with everything but the identifying fields empty.
    pub fn bare(player_name: &str, player_id: Option<PlayerId>, season_id: SeasonId) -> Self {
        Self {
            player_name: player_name.to_string(),
            player_id,
            season_id,
            team: None,
            games_played: None,
            minutes: None,
            fgm: None,
            fga: None,
            fg_pct: None,
            fg3m: None,
            fg3a: None,
            fg3_pct: None,
            ftm: None,
            fta: None,
            ft_pct: None,
            oreb: None,
            dreb: None,
            reb: None,
            ast: None,
            stl: None,
            blk: None,
            tov: None,
            pf: None,
            pts: None,
            plus_minus: None,
        }
    }
}
