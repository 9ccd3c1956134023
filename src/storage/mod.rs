//! Storage layer: the persisted CSV season-stats table.
//!
//! - `models`: row shape shared with the fetch layer
//! - `table`: load / partition / atomic rewrite

pub mod models;
pub mod table;

pub use models::SeasonStatRow;
pub use table::{LoadedTable, StatTable};
