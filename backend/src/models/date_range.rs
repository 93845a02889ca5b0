//! Availability windows: the raw form rows, the validated range, and the
//! validated set that gets published for a listing.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::date::{CalendarDate, DateParseError};

/// A window as typed into the publish form. Either endpoint may still be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRange {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

impl DraftRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// True when either endpoint is blank.
    pub fn is_incomplete(&self) -> bool {
        self.start.trim().is_empty() || self.end.trim().is_empty()
    }
}

impl From<&DateRange> for DraftRange {
    fn from(range: &DateRange) -> Self {
        DraftRange::new(range.start.to_string(), range.end.to_string())
    }
}

/// Error building a [`DateRange`] outside the availability validator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateRangeError {
    #[error(transparent)]
    Date(#[from] DateParseError),

    #[error("End date {end} is not after start date {start}")]
    Order {
        start: CalendarDate,
        end: CalendarDate,
    },
}

/// Closed calendar interval `[start, end]` with `end` strictly after `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DraftRange")]
pub struct DateRange {
    start: CalendarDate,
    end: CalendarDate,
}

impl DateRange {
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, DateRangeError> {
        if end <= start {
            return Err(DateRangeError::Order { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parse both endpoints from `MM/DD/YYYY` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, DateRangeError> {
        Self::new(CalendarDate::parse(start)?, CalendarDate::parse(end)?)
    }

    pub fn start(&self) -> CalendarDate {
        self.start
    }

    pub fn end(&self) -> CalendarDate {
        self.end
    }

    /// Inclusive on both ends.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether the two closed intervals share at least one day.
    ///
    /// Either endpoint of one range falling inside the other counts, checked in
    /// both directions so a range sitting fully inside the other is caught too.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        other.contains(self.start)
            || other.contains(self.end)
            || self.contains(other.start)
            || self.contains(other.end)
    }

    /// Number of nights between check-in and check-out.
    pub fn nights(&self) -> i64 {
        self.start.days_until(self.end)
    }
}

impl TryFrom<DraftRange> for DateRange {
    type Error = DateRangeError;

    fn try_from(raw: DraftRange) -> Result<Self, Self::Error> {
        DateRange::parse(&raw.start, &raw.end)
    }
}

/// Validated, pairwise non-overlapping availability windows of one listing.
///
/// Only [`crate::services::availability::AvailabilityValidator`] builds one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AvailabilitySet(Vec<DateRange>);

impl AvailabilitySet {
    pub(crate) fn from_validated(windows: Vec<DateRange>) -> Self {
        Self(windows)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn as_slice(&self) -> &[DateRange] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<DateRange> {
        self.0
    }
}

impl Deref for AvailabilitySet {
    type Target = [DateRange];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a AvailabilitySet {
    type Item = &'a DateRange;
    type IntoIter = std::slice::Iter<'a, DateRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::parse(start, end).unwrap()
    }

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    #[test]
    fn test_same_day_rejected() {
        let err = DateRange::parse("01/05/2024", "01/05/2024").unwrap_err();
        assert!(matches!(err, DateRangeError::Order { .. }));
    }

    #[test]
    fn test_inverted_rejected() {
        assert!(DateRange::parse("01/10/2024", "01/05/2024").is_err());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let r = range("01/01/2024", "01/10/2024");
        assert!(r.contains(date("01/01/2024")));
        assert!(r.contains(date("01/10/2024")));
        assert!(r.contains(date("01/05/2024")));
        assert!(!r.contains(date("12/31/2023")));
        assert!(!r.contains(date("01/11/2024")));
    }

    #[test]
    fn test_overlap_partial_and_touching() {
        let a = range("01/01/2024", "01/10/2024");
        assert!(a.overlaps(&range("01/05/2024", "01/15/2024")));
        assert!(a.overlaps(&range("01/10/2024", "01/15/2024")));
        assert!(!a.overlaps(&range("01/11/2024", "01/20/2024")));
    }

    #[test]
    fn test_overlap_containment_both_directions() {
        let outer = range("01/01/2024", "01/31/2024");
        let inner = range("01/10/2024", "01/20/2024");
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_nights() {
        assert_eq!(range("01/01/2024", "01/04/2024").nights(), 3);
    }

    #[test]
    fn test_json_shape() {
        let r = range("01/01/2024", "01/10/2024");
        let json = serde_json::to_value(r).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "start": "01/01/2024", "end": "01/10/2024" })
        );
        let back: DateRange = serde_json::from_value(json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn test_deserialize_rejects_inverted() {
        let json = serde_json::json!({ "start": "01/10/2024", "end": "01/01/2024" });
        assert!(serde_json::from_value::<DateRange>(json).is_err());
    }

    #[test]
    fn test_draft_incomplete() {
        assert!(DraftRange::new("", "01/01/2024").is_incomplete());
        assert!(DraftRange::new("01/01/2024", "  ").is_incomplete());
        assert!(!DraftRange::new("01/01/2024", "01/02/2024").is_incomplete());
    }
}
