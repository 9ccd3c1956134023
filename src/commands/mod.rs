//! Command implementations for the NBA season-stats CLI

pub mod update_stats;
