//! Host dashboard figures for a single listing.

use serde::Serialize;

use crate::models::{Booking, CalendarDate};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostStatistics {
    pub online_days: i64,
    pub booked_days: i64,
    pub year_profit: f64,
}

impl HostStatistics {
    /// Figures for the current year as of `today`. `bookings` should hold the
    /// accepted bookings of the listing.
    pub fn compute<'a>(
        posted_on: CalendarDate,
        bookings: impl IntoIterator<Item = &'a Booking> + Clone,
        today: CalendarDate,
    ) -> Self {
        let year = today.year();
        Self {
            online_days: online_days(posted_on, today),
            booked_days: booked_days(bookings.clone(), year),
            year_profit: year_profit(bookings, year),
        }
    }
}

/// Days since the listing went live.
pub fn online_days(posted_on: CalendarDate, today: CalendarDate) -> i64 {
    posted_on.days_until(today)
}

/// Nights booked within `year`. Bookings that start or end in that year are
/// clipped to January 1st and December 31st.
pub fn booked_days<'a>(bookings: impl IntoIterator<Item = &'a Booking>, year: i32) -> i64 {
    let (Some(year_start), Some(year_end)) = (
        CalendarDate::start_of_year(year),
        CalendarDate::end_of_year(year),
    ) else {
        return 0;
    };

    bookings
        .into_iter()
        .filter(|b| b.date_range.start().year() == year || b.date_range.end().year() == year)
        .map(|b| {
            let start = b.date_range.start().max(year_start);
            let end = b.date_range.end().min(year_end);
            start.days_until(end)
        })
        .sum()
}

/// Revenue of bookings starting in `year`.
pub fn year_profit<'a>(bookings: impl IntoIterator<Item = &'a Booking>, year: i32) -> f64 {
    bookings
        .into_iter()
        .filter(|b| b.date_range.start().year() == year)
        .map(|b| b.total_price)
        .sum()
}
