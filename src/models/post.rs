use chrono::{Datelike, NaiveDateTime, Timelike};
use std::fmt;

use crate::config::TimeStyle;

// ============================================================================
// Slug
// ============================================================================

/// Hyphen-joined rendering of a title, used in the file name and `key` field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slug(String);

impl Slug {
    /// Split the title on whitespace and join the words with `-`.
    ///
    /// Runs of whitespace collapse and leading/trailing whitespace is dropped.
    /// Nothing else is touched: path-unsafe characters pass through.
    pub fn from_title(title: &str) -> Self {
        Self(title.split_whitespace().collect::<Vec<_>>().join("-"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Stamp
// ============================================================================

/// Date and time strings derived from one clock reading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    /// `YYYY-MM-DD`
    pub date: String,
    /// Time portion of the `date` front-matter field
    pub time: String,
}

impl Stamp {
    pub fn new(now: NaiveDateTime, style: TimeStyle) -> Self {
        let date = format!("{}-{:02}-{:02}", now.year(), now.month(), now.day());

        let time = match style {
            // The hour is written twice and the seconds are never read.
            TimeStyle::Legacy => format!("{}:{}:{}", now.hour(), now.hour(), now.minute()),
            TimeStyle::Standard => now.format("%H:%M:%S").to_string(),
        };

        Self { date, time }
    }
}

// ============================================================================
// Post
// ============================================================================

/// A post about to be scaffolded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub slug: Slug,
    pub stamp: Stamp,
}

impl Post {
    pub fn new(title: &str, now: NaiveDateTime, style: TimeStyle) -> Self {
        Self {
            slug: Slug::from_title(title),
            stamp: Stamp::new(now, style),
        }
    }
}
