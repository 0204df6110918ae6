//! Date window resolution
//!
//! Two kinds of windows are used by the queries:
//!
//! - a trailing window, anchored at the newest observation in the dataset
//!   (never "now") and reaching back a fixed 365 days
//! - a caller supplied [`DateRange`], either open-ended or bounded
//!
//! Both are inclusive and compare dates as `YYYY-MM-DD` strings. Calendar
//! parsing is only needed to subtract days from the anchor.

use crate::query::error::{QueryError, QueryResult};
use crate::storage::{format_date, parse_date, Dataset};
use chrono::Days;
use serde::Serialize;

/// Length of the trailing window in days, regardless of leap years
pub const TRAILING_WINDOW_DAYS: u64 = 365;

/// Newest observation date in the dataset
pub fn most_recent_date(dataset: &Dataset) -> QueryResult<String> {
    dataset
        .measurements()
        .iter()
        .map(|m| m.date.as_str())
        .max()
        .map(str::to_string)
        .ok_or(QueryError::EmptyDataset)
}

/// `anchor` minus 365 days
pub fn trailing_year_start(anchor: &str) -> QueryResult<String> {
    let date = parse_date(anchor).ok_or_else(|| QueryError::MalformedDate(anchor.to_string()))?;
    let start = date
        .checked_sub_days(Days::new(TRAILING_WINDOW_DAYS))
        .ok_or_else(|| QueryError::MalformedDate(anchor.to_string()))?;
    Ok(format_date(start))
}

/// Trailing window `[start, ..)` anchored at the dataset's newest date
///
/// Open toward the recent side: nothing is newer than the anchor anyway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrailingWindow {
    /// Newest observation date in the dataset
    pub anchor: String,
    /// First date inside the window
    pub start: String,
}

impl TrailingWindow {
    /// Resolve the trailing window for a dataset
    pub fn resolve(dataset: &Dataset) -> QueryResult<Self> {
        let anchor = most_recent_date(dataset)?;
        let start = trailing_year_start(&anchor)?;
        Ok(Self { anchor, start })
    }

    pub fn contains(&self, date: &str) -> bool {
        date >= self.start.as_str()
    }
}

/// Caller supplied date filter for temperature statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateRange {
    /// `date >= start`
    Unbounded { start: String },
    /// `start <= date <= end`
    Bounded { start: String, end: String },
}

impl DateRange {
    /// Build a range from a start and an optional end
    pub fn new(start: impl Into<String>, end: Option<String>) -> Self {
        match end {
            Some(end) => DateRange::Bounded {
                start: start.into(),
                end,
            },
            None => DateRange::Unbounded {
                start: start.into(),
            },
        }
    }

    pub fn start(&self) -> &str {
        match self {
            DateRange::Unbounded { start } | DateRange::Bounded { start, .. } => start.as_str(),
        }
    }

    pub fn end(&self) -> Option<&str> {
        match self {
            DateRange::Unbounded { .. } => None,
            DateRange::Bounded { end, .. } => Some(end.as_str()),
        }
    }

    /// String comparison; bounds are not required to be valid dates
    pub fn contains(&self, date: &str) -> bool {
        match self {
            DateRange::Unbounded { start } => date >= start.as_str(),
            DateRange::Bounded { start, end } => date >= start.as_str() && date <= end.as_str(),
        }
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateRange::Unbounded { start } => write!(f, "{}..", start),
            DateRange::Bounded { start, end } => write!(f, "{}..={}", start, end),
        }
    }
}
