//! Calendar month scope
//!
//! The month-level filter used by the store and the breakdown report.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month (year + month), used as a filter scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Month {
    pub year: i32,
    /// 1-based month number
    pub month: u32,
}

impl Month {
    /// Create a month, returning None for an out-of-range month number
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The month containing the given date
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current calendar month (local time)
    pub fn current() -> Self {
        Self::of(Local::now().date_naive())
    }

    /// Check if a date falls inside this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error returned when a `YYYY-MM` month string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMonthError(String);

impl fmt::Display for ParseMonthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid month '{}': expected YYYY-MM", self.0)
    }
}

impl std::error::Error for ParseMonthError {}

impl FromStr for Month {
    type Err = ParseMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMonthError(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(err)?;
        let year: i32 = year.parse().map_err(|_| err())?;
        let month: u32 = month.parse().map_err(|_| err())?;
        Month::new(year, month).ok_or_else(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let month = Month::new(2025, 8).unwrap();
        assert!(month.contains(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()));
        assert!(month.contains(NaiveDate::from_ymd_opt(2025, 8, 31).unwrap()));
        assert!(!month.contains(NaiveDate::from_ymd_opt(2025, 7, 31).unwrap()));
        assert!(!month.contains(NaiveDate::from_ymd_opt(2024, 8, 15).unwrap()));
    }

    #[test]
    fn test_of_date() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 14).unwrap();
        assert_eq!(Month::of(date), Month::new(2025, 2).unwrap());
    }

    #[test]
    fn test_display_and_parse() {
        let month = Month::new(2025, 3).unwrap();
        assert_eq!(month.to_string(), "2025-03");
        assert_eq!("2025-03".parse::<Month>().unwrap(), month);
        assert_eq!("2025-3".parse::<Month>().unwrap(), month);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("2025".parse::<Month>().is_err());
        assert!("2025-13".parse::<Month>().is_err());
        assert!("2025-00".parse::<Month>().is_err());
        assert!("march".parse::<Month>().is_err());
    }
}
