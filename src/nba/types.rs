//! Response envelope and extraction helpers for the stats.nba.com API.
//!
//! Every stats endpoint answers with the same shape: a list of named result
//! sets, each a header row plus a row-set of heterogeneous JSON values.
//! Extraction works by header name so column reordering upstream cannot
//! silently shift values.

use crate::cli::types::{PlayerId, SeasonId};
use crate::error::{NbaError, Result};
use crate::storage::models::SeasonStatRow;
use serde::Deserialize;
use serde_json::Value;

/// Index of the per-season breakdown table in the year-over-year dashboard
/// response (index 0 is the overall career line).
pub const SEASON_BREAKDOWN_INDEX: usize = 1;
pub const SEASON_BREAKDOWN_NAME: &str = "ByYearPlayerDashboard";

/// Top-level envelope common to all stats.nba.com endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    #[serde(rename = "resultSets", default)]
    pub result_sets: Vec<ResultSet>,
}

/// One named table inside a stats response.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Position of `column` in this result set's header row.
    pub fn column_index(&self, column: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| NbaError::MissingColumn {
                column: column.to_string(),
                result_set: self.name.clone(),
            })
    }
}

/// An active player from the league-wide player index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub name: String,
    pub id: PlayerId,
}

fn value_str(v: &Value) -> Option<&str> {
    v.as_str()
}

fn value_u64(v: &Value) -> Option<u64> {
    // The API emits numbers, but some columns arrive as numeric strings.
    v.as_u64().or_else(|| v.as_str()?.parse().ok())
}

fn value_f64(v: &Value) -> Option<f64> {
    v.as_f64().or_else(|| v.as_str()?.parse().ok())
}

/// Extract the active-player roster from a `commonallplayers` response.
///
/// Rows whose `ROSTERSTATUS` is not 1 (waived / historical players) are
/// dropped, as are rows with an unreadable id or name.
pub fn active_roster(response: &StatsResponse) -> Result<Vec<RosterEntry>> {
    let set = response
        .result_sets
        .iter()
        .find(|rs| rs.name == "CommonAllPlayers")
        .ok_or(NbaError::MissingResultSet {
            index: 0,
            name: "CommonAllPlayers",
        })?;

    let id_col = set.column_index("PERSON_ID")?;
    let name_col = set.column_index("DISPLAY_FIRST_LAST")?;
    let status_col = set.column_index("ROSTERSTATUS")?;

    let mut roster = Vec::new();
    for row in &set.row_set {
        let active = row
            .get(status_col)
            .and_then(value_u64)
            .map(|s| s == 1)
            .unwrap_or(false);
        if !active {
            continue;
        }
        let (Some(id), Some(name)) = (
            row.get(id_col).and_then(value_u64),
            row.get(name_col).and_then(value_str),
        ) else {
            continue;
        };
        roster.push(RosterEntry {
            name: name.to_string(),
            id: PlayerId::new(id),
        });
    }

    if roster.is_empty() {
        return Err(NbaError::NoData);
    }
    Ok(roster)
}

/// Extract per-season rows from a `playerdashboardbyyearoveryear` response.
///
/// Takes the breakdown table at its fixed position, reads the season token
/// from `GROUP_VALUE`, and maps the stat columns by name. Player name and id
/// are left empty for the caller to annotate. A malformed season token is an
/// error for the whole player, not a silently dropped row.
pub fn dashboard_season_rows(response: &StatsResponse) -> Result<Vec<SeasonStatRow>> {
    let set = response
        .result_sets
        .get(SEASON_BREAKDOWN_INDEX)
        .ok_or(NbaError::MissingResultSet {
            index: SEASON_BREAKDOWN_INDEX,
            name: SEASON_BREAKDOWN_NAME,
        })?;

    let season_col = set.column_index("GROUP_VALUE")?;
    let team_col = set.column_index("TEAM_ABBREVIATION").ok();
    let f64_col = |name: &str| set.column_index(name).ok();
    let stat_cols = [
        f64_col("GP"),
        f64_col("MIN"),
        f64_col("FGM"),
        f64_col("FGA"),
        f64_col("FG_PCT"),
        f64_col("FG3M"),
        f64_col("FG3A"),
        f64_col("FG3_PCT"),
        f64_col("FTM"),
        f64_col("FTA"),
        f64_col("FT_PCT"),
        f64_col("OREB"),
        f64_col("DREB"),
        f64_col("REB"),
        f64_col("AST"),
        f64_col("STL"),
        f64_col("BLK"),
        f64_col("TOV"),
        f64_col("PF"),
        f64_col("PTS"),
        f64_col("PLUS_MINUS"),
    ];

    let mut rows = Vec::with_capacity(set.row_set.len());
    for raw in &set.row_set {
        let token = raw
            .get(season_col)
            .and_then(value_str)
            .unwrap_or_default();
        let season_id: SeasonId = token.parse()?;

        let stat = |idx: Option<usize>| idx.and_then(|i| raw.get(i)).and_then(value_f64);

        rows.push(SeasonStatRow {
            player_name: String::new(),
            player_id: None,
            season_id,
            team: team_col
                .and_then(|i| raw.get(i))
                .and_then(value_str)
                .map(str::to_string),
            games_played: stat_cols[0].and_then(|i| raw.get(i)).and_then(value_u64),
            minutes: stat(stat_cols[1]),
            fgm: stat(stat_cols[2]),
            fga: stat(stat_cols[3]),
            fg_pct: stat(stat_cols[4]),
            fg3m: stat(stat_cols[5]),
            fg3a: stat(stat_cols[6]),
            fg3_pct: stat(stat_cols[7]),
            ftm: stat(stat_cols[8]),
            fta: stat(stat_cols[9]),
            ft_pct: stat(stat_cols[10]),
            oreb: stat(stat_cols[11]),
            dreb: stat(stat_cols[12]),
            reb: stat(stat_cols[13]),
            ast: stat(stat_cols[14]),
            stl: stat(stat_cols[15]),
            blk: stat(stat_cols[16]),
            tov: stat(stat_cols[17]),
            pf: stat(stat_cols[18]),
            pts: stat(stat_cols[19]),
            plus_minus: stat(stat_cols[20]),
        });
    }

    Ok(rows)
}
