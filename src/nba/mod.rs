//! stats.nba.com API layer: HTTP client, response envelope, extraction.

pub mod http;
pub mod types;

use crate::cli::types::PlayerId;
use crate::error::Result;
use crate::storage::models::SeasonStatRow;
use async_trait::async_trait;

pub use http::StatsClient;
pub use types::{RosterEntry, StatsResponse};

/// Source of per-player season aggregates.
///
/// The HTTP client implements this against the year-over-year dashboard
/// endpoint; tests substitute a stub so the update pipeline can run without
/// a network.
#[async_trait]
pub trait SeasonStatsSource {
    /// All per-season rows for one player, unannotated (no name/id yet),
    /// in the order the endpoint returns them.
    async fn season_rows(&self, player_id: PlayerId) -> Result<Vec<SeasonStatRow>>;
}
