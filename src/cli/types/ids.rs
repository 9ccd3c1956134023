//! ID types for the NBA stats API.

use crate::error::NbaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for NBA player IDs (`PERSON_ID` in the stats API).
///
/// # Examples
///
/// ```rust
/// use nba_season_stats::PlayerId;
///
/// let player_id = PlayerId::new(2544);
/// assert_eq!(player_id.as_u64(), 2544);
/// assert_eq!(player_id.to_string(), "2544");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
