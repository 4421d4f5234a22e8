use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::models::Comment;

/// Format accepted for `start_time` / `end_time`, e.g. `2023-09-28 15:00`.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Inclusive creation-time range. Timestamps are read as UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn parse(start: &str, end: &str) -> Result<Self, String> {
        Ok(Self {
            start: parse_timestamp(start)?,
            end: parse_timestamp(end)?,
        })
    }

    pub fn contains(&self, at: &DateTime<Utc>) -> bool {
        self.start <= *at && *at <= self.end
    }

    /// Keeps the comments inside the window, most recent first.
    pub fn apply(&self, comments: Vec<Comment>) -> Vec<Comment> {
        let mut kept: Vec<Comment> = comments
            .into_iter()
            .filter(|c| self.contains(&c.created_at))
            .collect();
        kept.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        kept
    }
}

pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, String> {
    NaiveDateTime::parse_from_str(s.trim(), TIME_FORMAT)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(|e| {
            format!(
                "Invalid timestamp '{}': {}. Expected format YYYY-MM-DD HH:MM",
                s, e
            )
        })
}
