//! NBA Season Stats CLI Library
//!
//! Incrementally fetches per-season statistics for active NBA players from
//! the stats.nba.com API and merges them into a single persisted CSV table.
//!
//! ## Features
//!
//! - **Incremental Updates**: Players already covered for prior seasons are
//!   never refetched; only missing players and the current season are pulled
//! - **Safe Persistence**: The CSV table is rewritten through a temporary
//!   file and atomic rename, so an interrupted run cannot truncate it
//! - **Legacy Backfill**: Older table files without a `PLAYER_ID` column are
//!   backfilled from the active-player roster on load
//! - **Skip-and-Continue**: A failed fetch for one player is recorded in the
//!   run report and never aborts the run
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_season_stats::commands::update_stats::{handle_update_stats, UpdateParams};
//!
//! # async fn example() -> nba_season_stats::Result<()> {
//! let report = handle_update_stats(UpdateParams {
//!     csv_path: "nba_season_stats_all_players.csv".into(),
//!     season: None, // resolve from today's date
//!     delay_ms: 500,
//!     verbose: false,
//! })
//! .await?;
//!
//! println!("{} rows written", report.rows_written);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod nba;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{PlayerId, SeasonId};
pub use error::{NbaError, Result};
pub use nba::types::RosterEntry;
