//! Load, partition, and rewrite the persisted season-stats CSV.

use crate::cli::types::{PlayerId, SeasonId};
use crate::error::Result;
use crate::storage::models::SeasonStatRow;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// In-memory copy of the persisted table.
#[derive(Debug, Clone, Default)]
pub struct StatTable {
    pub rows: Vec<SeasonStatRow>,
}

/// Result of loading the persisted file, including id-backfill bookkeeping.
#[derive(Debug)]
pub struct LoadedTable {
    pub table: StatTable,
    /// Rows whose missing `PLAYER_ID` was recovered from the roster map.
    pub backfilled: usize,
    /// Rows whose display name had no roster match; their id stays empty.
    pub unmapped: usize,
}

impl StatTable {
    /// Load the table from `path`. A missing file is an empty table, not an
    /// error. Files written before the `PLAYER_ID` column existed get their
    /// ids backfilled from `roster_map` by display name.
    pub fn load(path: &Path, roster_map: &HashMap<String, PlayerId>) -> Result<LoadedTable> {
        if !path.exists() {
            return Ok(LoadedTable {
                table: Self::default(),
                backfilled: 0,
                unmapped: 0,
            });
        }

        let raw = fs::read_to_string(path)?;
        let raw = raw.strip_prefix('\u{feff}').unwrap_or(&raw);

        let mut reader = csv::Reader::from_reader(raw.as_bytes());
        let has_id_column = reader
            .headers()?
            .iter()
            .any(|h| h == "PLAYER_ID");

        let mut rows: Vec<SeasonStatRow> = Vec::new();
        for record in reader.deserialize() {
            rows.push(record?);
        }

        let mut backfilled = 0;
        let mut unmapped = 0;
        if !has_id_column {
            for row in &mut rows {
                match roster_map.get(row.player_name.as_str()) {
                    Some(id) => {
                        row.player_id = Some(*id);
                        backfilled += 1;
                    }
                    None => unmapped += 1,
                }
            }
        }

        Ok(LoadedTable {
            table: Self { rows },
            backfilled,
            unmapped,
        })
    }

    /// Split into rows older than `season` (kept as-is) and the count of
    /// rows at or beyond it (discarded, to be refreshed). Season order is
    /// lexical on the identifier string.
    pub fn partition(self, season: &SeasonId) -> (Vec<SeasonStatRow>, usize) {
        let total = self.rows.len();
        let kept: Vec<SeasonStatRow> = self
            .rows
            .into_iter()
            .filter(|row| row.season_id < *season)
            .collect();
        let discarded = total - kept.len();
        (kept, discarded)
    }

    /// Distinct non-missing player ids among `rows`. A player present here
    /// is considered already covered and is not refetched.
    pub fn covered_ids(rows: &[SeasonStatRow]) -> HashSet<PlayerId> {
        rows.iter().filter_map(|row| row.player_id).collect()
    }

    /// Rewrite the table at `path`: UTF-8 with BOM, header row first.
    ///
    /// Rows go to a sibling temporary file which is renamed over the target
    /// on success, so an interrupted write leaves the old table intact.
    pub fn write(path: &Path, rows: &[SeasonStatRow]) -> Result<()> {
        let tmp_path = tmp_sibling(path);

        {
            let mut file = fs::File::create(&tmp_path)?;
            use std::io::Write;
            file.write_all("\u{feff}".as_bytes())?;

            let mut writer = csv::Writer::from_writer(file);
            for row in rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }

        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
