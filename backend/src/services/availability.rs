//! Availability validation run when an owner publishes a listing.
//!
//! The rules run in a fixed order and stop at the first one that fails, since
//! each failure is shown to the owner as its own message:
//! 1. Completeness: every window has a start and an end
//! 2. Format: every endpoint reads as `MM/DD/YYYY`
//! 3. Ordering: every window ends strictly after it starts
//! 4. Non-overlap: no two windows share a day (touching endpoints count)

use log::debug;

use crate::models::{AvailabilitySet, CalendarDate, DateParseError, DateRange, DraftRange};

/// Which validation rule rejected the availability, and where.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFailure {
    #[error("All availability must have start and end dates.")]
    IncompleteRange { index: usize },

    #[error("Availability dates must use the MM/DD/YYYY format.")]
    MalformedDate { index: usize, value: String },

    #[error("End date must be after start date in all availabilities.")]
    InvalidOrder { index: usize },

    #[error("Date ranges should not overlap.")]
    OverlappingRanges { first: usize, second: usize },
}

impl ValidationFailure {
    /// Stable identifier of the failed rule.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationFailure::IncompleteRange { .. } => "incomplete_range",
            ValidationFailure::MalformedDate { .. } => "malformed_date",
            ValidationFailure::InvalidOrder { .. } => "invalid_order",
            ValidationFailure::OverlappingRanges { .. } => "overlapping_ranges",
        }
    }

    /// Message shown to the owner.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Pre-submission gate for a listing's availability windows.
///
/// # Examples
///
/// ```
/// use airbrb::models::DraftRange;
/// use airbrb::services::availability::{AvailabilityValidator, ValidationFailure};
///
/// let windows = vec![
///     DraftRange::new("01/01/2024", "01/10/2024"),
///     DraftRange::new("01/05/2024", "01/15/2024"),
/// ];
/// let err = AvailabilityValidator::validate(&windows).unwrap_err();
/// assert_eq!(err, ValidationFailure::OverlappingRanges { first: 0, second: 1 });
/// ```
pub struct AvailabilityValidator;

impl AvailabilityValidator {
    /// Validate the form rows and return the typed availability on success.
    pub fn validate(drafts: &[DraftRange]) -> Result<AvailabilitySet, ValidationFailure> {
        let result = Self::run_rules(drafts);
        match &result {
            Ok(set) => debug!("Availability accepted: {} window(s)", set.len()),
            Err(failure) => debug!("Availability rejected ({}): {:?}", failure.kind(), failure),
        }
        result
    }

    fn run_rules(drafts: &[DraftRange]) -> Result<AvailabilitySet, ValidationFailure> {
        if let Some(index) = drafts.iter().position(DraftRange::is_incomplete) {
            return Err(ValidationFailure::IncompleteRange { index });
        }

        let mut endpoints = Vec::with_capacity(drafts.len());
        for (index, draft) in drafts.iter().enumerate() {
            let start = parse_endpoint(index, &draft.start)?;
            let end = parse_endpoint(index, &draft.end)?;
            endpoints.push((start, end));
        }

        let mut windows = Vec::with_capacity(endpoints.len());
        for (index, (start, end)) in endpoints.into_iter().enumerate() {
            let window = DateRange::new(start, end)
                .map_err(|_| ValidationFailure::InvalidOrder { index })?;
            windows.push(window);
        }

        if let Some((first, second)) = find_overlap(&windows) {
            return Err(ValidationFailure::OverlappingRanges { first, second });
        }

        Ok(AvailabilitySet::from_validated(windows))
    }
}

fn parse_endpoint(index: usize, raw: &str) -> Result<CalendarDate, ValidationFailure> {
    CalendarDate::parse(raw).map_err(|err| match err {
        DateParseError::Empty => ValidationFailure::IncompleteRange { index },
        DateParseError::Malformed(value) => ValidationFailure::MalformedDate { index, value },
    })
}

/// First overlapping pair of windows, by index, in enumeration order.
///
/// Every unordered pair is compared; sets are small and entered by hand.
pub fn find_overlap(windows: &[DateRange]) -> Option<(usize, usize)> {
    for (i, current) in windows.iter().enumerate() {
        for (j, other) in windows.iter().enumerate().skip(i + 1) {
            if current.overlaps(other) {
                return Some((i, j));
            }
        }
    }
    None
}
