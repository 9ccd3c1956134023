//! Season identifiers and the calendar-based season resolver.

use crate::error::{NbaError, Result};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// NBA season identifier of the form `"2024-25"`.
///
/// Ordering is lexical on the inner string, which coincides with
/// chronological order for the two-digit-year window this tool operates in.
///
/// # Examples
///
/// ```rust
/// use nba_season_stats::SeasonId;
///
/// let season: SeasonId = "2024-25".parse().unwrap();
/// assert_eq!(season.start_year(), 2024);
/// assert!(season < "2025-26".parse().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeasonId(String);

impl SeasonId {
    /// Season identifier for the season containing `date`.
    ///
    /// NBA seasons tip off in October: from October onward the date falls in
    /// the `"{year}-{year+1}"` season, before October in `"{year-1}-{year}"`.
    pub fn from_date(date: NaiveDate) -> Self {
        let year = date.year();
        if date.month() >= 10 {
            Self::from_start_year(year)
        } else {
            Self::from_start_year(year - 1)
        }
    }

    /// Season identifier for today's local date.
    pub fn current() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    /// Season starting in the autumn of `year`, e.g. `2024` -> `"2024-25"`.
    pub fn from_start_year(year: i32) -> Self {
        Self(format!("{}-{:02}", year, (year + 1).rem_euclid(100)))
    }

    /// Calendar year the season starts in.
    pub fn start_year(&self) -> i32 {
        self.0
            .get(..4)
            .and_then(|y| y.parse().ok())
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeasonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SeasonId {
    type Err = NbaError;

    /// Accepts `"YYYY-YY"` where the suffix is the start year plus one,
    /// modulo 100. Anything else would break the lexical-order assumption.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || NbaError::InvalidSeason {
            token: s.to_string(),
        };

        let (start, suffix) = s.split_once('-').ok_or_else(invalid)?;
        if start.len() != 4 || suffix.len() != 2 {
            return Err(invalid());
        }
        let start_year: i32 = start.parse().map_err(|_| invalid())?;
        let suffix_year: i32 = suffix.parse().map_err(|_| invalid())?;
        if (start_year + 1).rem_euclid(100) != suffix_year {
            return Err(invalid());
        }

        Ok(Self(s.to_string()))
    }
}
