//! Date ranges and reporting intervals
//!
//! `DateRange` is a closed interval used for ledger queries and statistics.
//! `Interval` is one of the preset look-back windows offered on the main
//! screen (last week, month, six months, year).

use chrono::{DateTime, Duration, Months, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A closed interval of timestamps, inclusive at both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateRange {
    /// Create a range; `start` must not be after `end`
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, PeriodParseError> {
        if start > end {
            return Err(PeriodParseError::Inverted {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }
        Ok(Self { start, end })
    }

    /// Whole calendar days in UTC, from the first instant of `start` to the
    /// last instant of `end`
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Result<Self, PeriodParseError> {
        let first = Utc.from_utc_datetime(&start.and_time(NaiveTime::MIN));
        let last = Utc.from_utc_datetime(&end.and_time(NaiveTime::MIN))
            + Duration::days(1)
            - Duration::nanoseconds(1);
        Self::new(first, last)
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Check if a timestamp falls within this range (both ends included)
    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        date >= self.start && date <= self.end
    }

    /// Parse `YYYY-MM-DD..YYYY-MM-DD`
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let (start, end) = s
            .split_once("..")
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;
        let start = NaiveDate::parse_from_str(start, "%Y-%m-%d")
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let end = NaiveDate::parse_from_str(end, "%Y-%m-%d")
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        Self::from_dates(start, end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// Preset look-back window ending at "now"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Interval {
    #[default]
    Week,
    Month,
    SixMonth,
    Year,
}

impl Interval {
    pub fn all() -> &'static [Self] {
        &[Self::Week, Self::Month, Self::SixMonth, Self::Year]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Week => "Last week",
            Self::Month => "Last month",
            Self::SixMonth => "Last 6 months",
            Self::Year => "Last year",
        }
    }

    /// The closed range `[now - interval, now]`
    pub fn range_ending(&self, now: DateTime<Utc>) -> DateRange {
        let start = match self {
            Self::Week => now.checked_sub_signed(Duration::weeks(1)),
            Self::Month => now.checked_sub_months(Months::new(1)),
            Self::SixMonth => now.checked_sub_months(Months::new(6)),
            Self::Year => now.checked_sub_months(Months::new(12)),
        }
        .unwrap_or(DateTime::<Utc>::MIN_UTC);

        DateRange { start, end: now }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Interval {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "six-month" | "sixmonth" | "6m" => Ok(Self::SixMonth),
            "year" => Ok(Self::Year),
            other => Err(PeriodParseError::InvalidFormat(other.to_string())),
        }
    }
}

/// Error type for range and interval parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    Inverted { start: String, end: String },
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            Self::Inverted { start, end } => {
                write!(f, "Range start {} is after its end {}", start, end)
            }
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd_hms(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_contains_is_inclusive() {
        let start = ymd_hms(2025, 1, 1, 0, 0, 0);
        let end = ymd_hms(2025, 1, 31, 0, 0, 0);
        let range = DateRange::new(start, end).unwrap();

        assert!(range.contains(start));
        assert!(range.contains(end));
        assert!(!range.contains(start - Duration::nanoseconds(1)));
        assert!(!range.contains(end + Duration::nanoseconds(1)));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let result = DateRange::new(ymd_hms(2025, 2, 1, 0, 0, 0), ymd_hms(2025, 1, 1, 0, 0, 0));
        assert!(matches!(result, Err(PeriodParseError::Inverted { .. })));
    }

    #[test]
    fn test_from_dates_covers_whole_days() {
        let range = DateRange::from_dates(
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
        )
        .unwrap();

        assert!(range.contains(ymd_hms(2025, 1, 10, 0, 0, 0)));
        assert!(range.contains(ymd_hms(2025, 1, 10, 23, 59, 59)));
        assert!(!range.contains(ymd_hms(2025, 1, 11, 0, 0, 0)));
    }

    #[test]
    fn test_parse_range() {
        let range = DateRange::parse("2025-01-01..2025-01-15").unwrap();
        assert_eq!(range.to_string(), "2025-01-01..2025-01-15");
        assert!(DateRange::parse("2025-01-01").is_err());
        assert!(DateRange::parse("2025-02-01..2025-01-01").is_err());
    }

    #[test]
    fn test_interval_ranges() {
        let now = ymd_hms(2025, 3, 31, 12, 0, 0);

        assert_eq!(Interval::Week.range_ending(now).start(), ymd_hms(2025, 3, 24, 12, 0, 0));
        // Month arithmetic clamps to the last valid day
        assert_eq!(Interval::Month.range_ending(now).start(), ymd_hms(2025, 2, 28, 12, 0, 0));
        assert_eq!(Interval::SixMonth.range_ending(now).start(), ymd_hms(2024, 9, 30, 12, 0, 0));
        assert_eq!(Interval::Year.range_ending(now).start(), ymd_hms(2024, 3, 31, 12, 0, 0));
        assert_eq!(Interval::Year.range_ending(now).end(), now);
    }

    #[test]
    fn test_interval_parse() {
        assert_eq!("six-month".parse::<Interval>().unwrap(), Interval::SixMonth);
        assert_eq!("Week".parse::<Interval>().unwrap(), Interval::Week);
        assert!("decade".parse::<Interval>().is_err());
    }
}
