//! Unit tests for CSV table persistence

use nba_season_stats::{
    storage::{models::SeasonStatRow, table::StatTable},
    PlayerId, SeasonId,
};
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

fn season(s: &str) -> SeasonId {
    s.parse().unwrap()
}

fn sample_row(name: &str, id: u64, season_id: &str) -> SeasonStatRow {
    let mut row = SeasonStatRow::bare(name, Some(PlayerId::new(id)), season(season_id));
    row.team = Some("DEN".to_string());
    row.games_played = Some(79);
    row.minutes = Some(2737.0);
    row.pts = Some(2085.0);
    row.reb = Some(976.0);
    row.ast = Some(708.0);
    row
}

#[test]
fn test_write_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stats.csv");

    let rows = vec![
        sample_row("Nikola Jokic", 203999, "2023-24"),
        sample_row("Nikola Jokic", 203999, "2024-25"),
        sample_row("Luka Doncic", 1629029, "2023-24"),
    ];
    StatTable::write(&path, &rows).unwrap();

    let loaded = StatTable::load(&path, &HashMap::new()).unwrap();
    assert_eq!(loaded.table.rows, rows);
    assert_eq!(loaded.backfilled, 0);
    assert_eq!(loaded.unmapped, 0);
}

#[test]
fn test_written_file_has_bom_and_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stats.csv");

    StatTable::write(&path, &[sample_row("Nikola Jokic", 203999, "2023-24")]).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);

    let text = String::from_utf8(bytes).unwrap();
    let header = text.trim_start_matches('\u{feff}').lines().next().unwrap();
    assert!(header.starts_with("PLAYER_NAME,PLAYER_ID,SEASON_ID"));
    assert!(header.contains("PTS"));
}

#[test]
fn test_write_leaves_no_temp_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stats.csv");

    StatTable::write(&path, &[sample_row("Nikola Jokic", 203999, "2023-24")]).unwrap();

    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["stats.csv".to_string()]);
}

#[test]
fn test_load_absent_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let loaded = StatTable::load(&dir.path().join("missing.csv"), &HashMap::new()).unwrap();
    assert!(loaded.table.rows.is_empty());
}

#[test]
fn test_load_legacy_file_backfills_player_id() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("legacy.csv");

    // Table written before the PLAYER_ID column existed.
    fs::write(
        &path,
        "\u{feff}PLAYER_NAME,SEASON_ID,GP,PTS\n\
         Nikola Jokic,2023-24,79,2085.0\n\
         Forgotten Guy,2023-24,10,55.0\n",
    )
    .unwrap();

    let roster_map: HashMap<String, PlayerId> =
        [("Nikola Jokic".to_string(), PlayerId::new(203999))].into();

    let loaded = StatTable::load(&path, &roster_map).unwrap();
    assert_eq!(loaded.backfilled, 1);
    assert_eq!(loaded.unmapped, 1);
    assert_eq!(loaded.table.rows[0].player_id, Some(PlayerId::new(203999)));
    assert_eq!(loaded.table.rows[1].player_id, None);
    assert_eq!(loaded.table.rows[0].games_played, Some(79));
    assert_eq!(loaded.table.rows[1].pts, Some(55.0));
}

#[test]
fn test_load_does_not_backfill_when_id_column_present() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stats.csv");

    // PLAYER_ID column exists but one value is empty; the empty id stays.
    fs::write(
        &path,
        "\u{feff}PLAYER_NAME,PLAYER_ID,SEASON_ID\n\
         Nikola Jokic,203999,2023-24\n\
         Ghost Player,,2023-24\n",
    )
    .unwrap();

    let roster_map: HashMap<String, PlayerId> =
        [("Ghost Player".to_string(), PlayerId::new(42))].into();

    let loaded = StatTable::load(&path, &roster_map).unwrap();
    assert_eq!(loaded.backfilled, 0);
    assert_eq!(loaded.table.rows[1].player_id, None);
}

#[test]
fn test_overwrite_replaces_previous_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stats.csv");

    StatTable::write(&path, &[sample_row("Nikola Jokic", 203999, "2022-23")]).unwrap();
    StatTable::write(&path, &[sample_row("Luka Doncic", 1629029, "2023-24")]).unwrap();

    let loaded = StatTable::load(&path, &HashMap::new()).unwrap();
    assert_eq!(loaded.table.rows.len(), 1);
    assert_eq!(loaded.table.rows[0].player_name, "Luka Doncic");
}
