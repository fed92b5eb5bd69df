//! The event value type.
//!
//! Events are constructed once per markdown block during parsing and
//! never mutated afterwards; the markdown source stays the single
//! source of truth.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single calendar event parsed from one markdown block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Heading line with the `#` markers stripped. Never empty.
    pub title: String,
    pub start_date: NaiveDate,
    /// Present only for genuine multi-day ranges; a range that starts
    /// and ends on the same day is normalized to a single-day event.
    /// When present, always after `start_date`.
    pub end_date: Option<NaiveDate>,
    /// Unique, in first-seen order from the tag line. Each tag matches
    /// `[A-Za-z0-9_-]+`.
    pub tags: Vec<String>,
    /// Free-text lines joined with a single newline, or `None`.
    pub description: Option<String>,
    /// Absolute URL from the block's last line, when one was given.
    pub link: Option<String>,
}

impl Event {
    /// Human-readable date label in the source format:
    /// `DD.MM.YYYY` or `DD.MM.YYYY - DD.MM.YYYY`.
    pub fn date_label(&self) -> String {
        match self.end_date {
            Some(end) => format!(
                "{} - {}",
                self.start_date.format("%d.%m.%Y"),
                end.format("%d.%m.%Y")
            ),
            None => self.start_date.format("%d.%m.%Y").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_label_single_day() {
        let event = Event {
            title: "Trail Run".to_string(),
            start_date: date(2025, 12, 15),
            end_date: None,
            tags: vec![],
            description: None,
            link: None,
        };
        assert_eq!(event.date_label(), "15.12.2025");
    }

    #[test]
    fn test_date_label_range() {
        let event = Event {
            title: "Training Camp".to_string(),
            start_date: date(2025, 3, 1),
            end_date: Some(date(2025, 3, 8)),
            tags: vec![],
            description: None,
            link: None,
        };
        assert_eq!(event.date_label(), "01.03.2025 - 08.03.2025");
    }
}
