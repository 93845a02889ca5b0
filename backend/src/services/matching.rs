//! Matching requested dates against a listing's published availability.
//!
//! All checks work at calendar-day granularity with inclusive window bounds.
//! An empty availability never matches.

use crate::models::{CalendarDate, DateRange};

/// Whether any window contains `date`.
pub fn is_date_available(windows: &[DateRange], date: CalendarDate) -> bool {
    first_window_containing(windows, date).is_some()
}

/// Check-in and check-out each fall inside some window, not necessarily the
/// same one. This is the check applied when a guest makes a booking.
pub fn is_stay_available(
    windows: &[DateRange],
    check_in: CalendarDate,
    check_out: CalendarDate,
) -> bool {
    is_date_available(windows, check_in) && is_date_available(windows, check_out)
}

/// Check-in and check-out both fall inside one and the same window.
pub fn stay_within_single_window(
    windows: &[DateRange],
    check_in: CalendarDate,
    check_out: CalendarDate,
) -> bool {
    windows
        .iter()
        .any(|w| w.contains(check_in) && w.contains(check_out))
}

pub fn first_window_containing(windows: &[DateRange], date: CalendarDate) -> Option<&DateRange> {
    windows.iter().find(|w| w.contains(date))
}

/// Borrowed view over one listing's windows, for callers that run several
/// checks against the same availability.
#[derive(Debug, Clone, Copy)]
pub struct DateRangeMatcher<'a> {
    windows: &'a [DateRange],
}

impl<'a> DateRangeMatcher<'a> {
    pub fn new(windows: &'a [DateRange]) -> Self {
        Self { windows }
    }

    pub fn is_available(&self, date: CalendarDate) -> bool {
        is_date_available(self.windows, date)
    }

    pub fn is_stay_available(&self, check_in: CalendarDate, check_out: CalendarDate) -> bool {
        is_stay_available(self.windows, check_in, check_out)
    }

    pub fn stay_within_single_window(
        &self,
        check_in: CalendarDate,
        check_out: CalendarDate,
    ) -> bool {
        stay_within_single_window(self.windows, check_in, check_out)
    }
}
