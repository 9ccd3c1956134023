//! Incremental update command: fetch missing per-season stats for active
//! players and merge them into the persisted CSV table.
//!
//! The merge is coverage-driven: rows older than the current season are kept
//! as-is, and any player with at least one such row is considered covered
//! and skipped. Current-season rows are always discarded and refetched for
//! the uncovered players, so re-running mid-season refreshes the live season
//! without touching history.

use crate::{
    cli::types::{PlayerId, SeasonId},
    nba::{RosterEntry, SeasonStatsSource, StatsClient},
    storage::{SeasonStatRow, StatTable},
    Result,
};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for one update run.
#[derive(Debug, Clone)]
pub struct UpdateParams {
    /// Path of the persisted CSV table.
    pub csv_path: PathBuf,
    /// Season override; `None` resolves from today's date.
    pub season: Option<SeasonId>,
    /// Courtesy delay after each successful fetch.
    pub delay_ms: u64,
    /// Show detailed progress information.
    pub verbose: bool,
}

/// What happened for one uncovered player during the fetch loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerOutcome {
    /// Rows at or beyond the current season were fetched and appended.
    Fetched(usize),
    /// The endpoint answered but had no current-season rows; nothing appended.
    NoCurrentRows,
    /// Fetch or processing failed; the player was skipped.
    Failed(String),
}

/// Per-player record in the run report.
#[derive(Debug, Clone)]
pub struct PlayerResult {
    pub player: RosterEntry,
    pub outcome: PlayerOutcome,
}

/// Summary of one update run.
#[derive(Debug)]
pub struct UpdateReport {
    pub season: SeasonId,
    pub roster_size: usize,
    /// Players skipped because a pre-current-season row already covers them.
    pub already_covered: usize,
    /// One entry per player the fetch loop actually visited.
    pub results: Vec<PlayerResult>,
    /// Current-season rows dropped from the existing table for refresh.
    pub discarded_rows: usize,
    /// Legacy rows whose missing id was recovered from the roster.
    pub backfilled_ids: usize,
    /// Legacy rows whose name had no roster match; id left empty.
    pub unmapped_names: usize,
    pub rows_written: usize,
    /// False when the accumulator was empty and the file was left untouched.
    pub file_rewritten: bool,
}

impl UpdateReport {
    pub fn fetched_players(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, PlayerOutcome::Fetched(_)))
            .count()
    }

    pub fn failed_players(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, PlayerOutcome::Failed(_)))
            .count()
    }
}

/// Resolve the season, fetch the roster, and run the update pipeline against
/// the live stats API.
pub async fn handle_update_stats(params: UpdateParams) -> Result<UpdateReport> {
    let season = params
        .season
        .clone()
        .unwrap_or_else(SeasonId::current);
    println!("Current NBA season: {}", season);

    let client = StatsClient::new()?;
    let roster = client.fetch_active_players(&season).await?;
    if params.verbose {
        println!("Active players on roster: {}", roster.len());
    }

    let report = run_update(&params, season, roster, &client).await?;

    println!(
        "✓ Run complete: {} fetched, {} already covered, {} failed",
        report.fetched_players(),
        report.already_covered,
        report.failed_players()
    );
    Ok(report)
}

/// The update pipeline, generic over the stats source so tests can stub it.
///
/// Load + partition the table, derive the coverage set, fetch uncovered
/// players in roster order, then rewrite the file once at the end.
pub async fn run_update(
    params: &UpdateParams,
    season: SeasonId,
    roster: Vec<RosterEntry>,
    source: &impl SeasonStatsSource,
) -> Result<UpdateReport> {
    let name_map: HashMap<String, PlayerId> =
        roster.iter().map(|p| (p.name.clone(), p.id)).collect();

    let loaded = StatTable::load(&params.csv_path, &name_map)?;
    if loaded.table.rows.is_empty() {
        println!("No existing CSV found, starting fresh");
    } else {
        println!("Loaded existing data: {} rows", loaded.table.rows.len());
    }
    if loaded.backfilled > 0 || loaded.unmapped > 0 {
        println!(
            "Backfilled PLAYER_ID for {} rows ({} names unmatched)",
            loaded.backfilled, loaded.unmapped
        );
    }
    let backfilled_ids = loaded.backfilled;
    let unmapped_names = loaded.unmapped;

    let (kept, discarded_rows) = loaded.table.partition(&season);
    let covered = StatTable::covered_ids(&kept);
    println!(
        "Already fetched {} players before {}",
        covered.len(),
        season
    );

    let roster_size = roster.len();
    let mut results: Vec<PlayerResult> = Vec::new();
    let mut new_rows: Vec<SeasonStatRow> = Vec::new();
    let mut already_covered = 0;

    for (i, player) in roster.iter().enumerate() {
        if covered.contains(&player.id) {
            already_covered += 1;
            continue;
        }

        println!("Fetching {} ({}/{})", player.name, i + 1, roster_size);
        match source.season_rows(player.id).await {
            Ok(rows) => {
                let mut current: Vec<SeasonStatRow> = rows
                    .into_iter()
                    .filter(|row| row.season_id >= season)
                    .collect();

                if current.is_empty() {
                    if params.verbose {
                        println!("  no {} rows for {}, skipping", season, player.name);
                    }
                    results.push(PlayerResult {
                        player: player.clone(),
                        outcome: PlayerOutcome::NoCurrentRows,
                    });
                    continue;
                }

                for row in &mut current {
                    row.player_name = player.name.clone();
                    row.player_id = Some(player.id);
                }
                results.push(PlayerResult {
                    player: player.clone(),
                    outcome: PlayerOutcome::Fetched(current.len()),
                });
                new_rows.extend(current);

                if params.delay_ms > 0 {
                    tokio::time::sleep(Duration::from_millis(params.delay_ms)).await;
                }
            }
            Err(e) => {
                eprintln!("⚠ Failed for {}: {}", player.name, e);
                results.push(PlayerResult {
                    player: player.clone(),
                    outcome: PlayerOutcome::Failed(e.to_string()),
                });
            }
        }
    }

    let mut all_rows = kept;
    all_rows.extend(new_rows);

    let (rows_written, file_rewritten) = if all_rows.is_empty() {
        println!(
            "⚠ No data to write, {} left unchanged",
            params.csv_path.display()
        );
        (0, false)
    } else {
        StatTable::write(&params.csv_path, &all_rows)?;
        println!(
            "✓ Updated CSV saved: {} with {} rows",
            params.csv_path.display(),
            all_rows.len()
        );
        (all_rows.len(), true)
    };

    Ok(UpdateReport {
        season,
        roster_size,
        already_covered,
        results,
        discarded_rows,
        backfilled_ids,
        unmapped_names,
        rows_written,
        file_rewritten,
    })
}
