//! CLI argument definitions and parsing structures.

use super::types::season::SeasonId;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(name = "nba-season-stats", about = "Incremental NBA season stats updater")]
pub struct Nba {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch missing per-season stats for active players and merge them
    /// into the persisted CSV table.
    ///
    /// Players that already have any pre-current-season row in the table
    /// are skipped; only uncovered players are fetched, and only their
    /// current-season-or-newer rows are kept.
    Update {
        /// Path of the persisted CSV table.
        #[clap(long, default_value = "nba_season_stats_all_players.csv")]
        csv_path: PathBuf,

        /// Season override (e.g. 2024-25). Defaults to the season for
        /// today's date.
        #[clap(long)]
        season: Option<SeasonId>,

        /// Courtesy delay after each successful fetch, in milliseconds.
        #[clap(long, default_value_t = 500)]
        delay_ms: u64,

        /// Show detailed progress information.
        #[clap(long)]
        verbose: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses_defaults() {
        let app = Nba::parse_from(["nba-season-stats", "update"]);
        let Commands::Update {
            csv_path,
            season,
            delay_ms,
            verbose,
        } = app.command;
        assert_eq!(csv_path, PathBuf::from("nba_season_stats_all_players.csv"));
        assert!(season.is_none());
        assert_eq!(delay_ms, 500);
        assert!(!verbose);
    }

    #[test]
    fn test_cli_parses_overrides() {
        let app = Nba::parse_from([
            "nba-season-stats",
            "update",
            "--csv-path",
            "out.csv",
            "--season",
            "2024-25",
            "--delay-ms",
            "0",
            "--verbose",
        ]);
        let Commands::Update {
            csv_path,
            season,
            delay_ms,
            verbose,
        } = app.command;
        assert_eq!(csv_path, PathBuf::from("out.csv"));
        assert_eq!(season.unwrap().as_str(), "2024-25");
        assert_eq!(delay_ms, 0);
        assert!(verbose);
    }

    #[test]
    fn test_cli_rejects_bad_season() {
        let result = Nba::try_parse_from(["nba-season-stats", "update", "--season", "24-25"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_debug_assert() {
        Nba::command().debug_assert();
    }
}
