//! HTTP client for the stats.nba.com API.

use crate::cli::types::{PlayerId, SeasonId};
use crate::error::Result;
use crate::nba::types::{active_roster, dashboard_season_rows, RosterEntry, StatsResponse};
use crate::nba::SeasonStatsSource;
use crate::storage::models::SeasonStatRow;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ORIGIN, REFERER, USER_AGENT};
use reqwest::Client;
use std::time::Duration;

/// Base path for the NBA stats API.
pub const STATS_BASE_URL: &str = "https://stats.nba.com/stats";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Header set stats.nba.com expects; bare clients get connection resets.
fn stats_header_map() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
        ),
    );
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    h.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    h.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
    h.insert("x-nba-stats-token", HeaderValue::from_static("true"));
    h
}

/// Thin wrapper over `reqwest::Client` for the two endpoints this tool uses.
pub struct StatsClient {
    client: Client,
}

impl StatsClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .default_headers(stats_header_map())
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    /// Fetch the active-player roster via `commonallplayers`.
    pub async fn fetch_active_players(&self, season: &SeasonId) -> Result<Vec<RosterEntry>> {
        let url = format!("{STATS_BASE_URL}/commonallplayers");
        let params = [
            ("LeagueID", "00"),
            ("Season", season.as_str()),
            ("IsOnlyCurrentSeason", "1"),
        ];

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<StatsResponse>()
            .await?;

        active_roster(&response)
    }
}

#[async_trait]
impl SeasonStatsSource for StatsClient {
    async fn season_rows(&self, player_id: PlayerId) -> Result<Vec<SeasonStatRow>> {
        let url = format!("{STATS_BASE_URL}/playerdashboardbyyearoveryear");
        let id = player_id.to_string();
        // The endpoint rejects requests missing any of its filter params,
        // so the no-filter defaults are spelled out.
        let params = [
            ("PlayerID", id.as_str()),
            ("LeagueID", "00"),
            ("MeasureType", "Base"),
            ("PerMode", "Totals"),
            ("SeasonType", "Regular Season"),
            ("PlusMinus", "N"),
            ("PaceAdjust", "N"),
            ("Rank", "N"),
            ("PORound", "0"),
            ("Outcome", ""),
            ("Location", ""),
            ("Month", "0"),
            ("SeasonSegment", ""),
            ("DateFrom", ""),
            ("DateTo", ""),
            ("OpponentTeamID", "0"),
            ("VsConference", ""),
            ("VsDivision", ""),
            ("GameSegment", ""),
            ("Period", "0"),
            ("ShotClockRange", ""),
            ("LastNGames", "0"),
        ];

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<StatsResponse>()
            .await?;

        dashboard_season_rows(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_header_map_contents() {
        let headers = stats_header_map();
        assert!(headers.contains_key(USER_AGENT));
        assert!(headers.contains_key(REFERER));
        assert_eq!(
            headers.get("x-nba-stats-origin").unwrap(),
            &HeaderValue::from_static("stats")
        );
    }

    #[test]
    fn test_client_builds() {
        assert!(StatsClient::new().is_ok());
    }
}
