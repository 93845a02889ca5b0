use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Display/wire format for every date handled by the client: `MM/DD/YYYY`.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Error produced when a date string cannot be read as a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateParseError {
    #[error("Date is empty")]
    Empty,

    #[error("Invalid date '{0}': expected MM/DD/YYYY")]
    Malformed(String),
}

/// Calendar day without time of day or timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Create a date from year/month/day, `None` if the day does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse a `MM/DD/YYYY` string. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, DateParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DateParseError::Empty);
        }
        // chrono accepts unpadded fields and short years; only the canonical
        // rendering is a valid input
        match NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
            Ok(date) if date.format(DATE_FORMAT).to_string() == trimmed => Ok(Self(date)),
            _ => Err(DateParseError::Malformed(trimmed.to_string())),
        }
    }

    /// Calendar day of an RFC 3339 timestamp, as the backend sends for
    /// `postedOn`. The day is taken in the timestamp's own offset.
    pub fn from_timestamp(input: &str) -> Result<Self, DateParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DateParseError::Empty);
        }
        chrono::DateTime::parse_from_rfc3339(trimmed)
            .map(|dt| Self(dt.date_naive()))
            .map_err(|_| DateParseError::Malformed(trimmed.to_string()))
    }

    /// Signed number of whole days from `self` to `other`.
    pub fn days_until(&self, other: CalendarDate) -> i64 {
        (other.0 - self.0).num_days()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// First day of the given year.
    pub fn start_of_year(year: i32) -> Option<Self> {
        Self::from_ymd(year, 1, 1)
    }

    /// Last day of the given year.
    pub fn end_of_year(year: i32) -> Option<Self> {
        Self::from_ymd(year, 12, 31)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate(date)
    }
}

impl FromStr for CalendarDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalendarDate::parse(s)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        CalendarDate::parse(&raw).map_err(serde::de::Error::custom)
    }
}
