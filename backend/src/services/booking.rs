//! Booking request checks and booking list helpers.

use log::warn;

use crate::models::{
    Booking, BookingPayload, BookingStatus, CalendarDate, DateParseError, DateRange,
};
use crate::services::matching::is_stay_available;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("Please select both start and end dates.")]
    MissingDates,

    #[error(transparent)]
    Date(#[from] DateParseError),

    #[error("End date must be after start date.")]
    InvalidOrder,

    #[error("Selected dates must be within available dates.")]
    Unavailable,
}

/// Guest-side booking request for one listing.
pub struct BookingRequest;

impl BookingRequest {
    /// Check the selected dates against the listing and price the stay.
    ///
    /// Each endpoint is matched independently against the availability; the
    /// stay may span two windows.
    pub fn prepare(
        check_in: Option<&str>,
        check_out: Option<&str>,
        nightly_price: f64,
        availability: &[DateRange],
    ) -> Result<BookingPayload, BookingError> {
        let result = Self::build(check_in, check_out, nightly_price, availability);
        if let Err(err) = &result {
            warn!("Booking request rejected: {}", err);
        }
        result
    }

    fn build(
        check_in: Option<&str>,
        check_out: Option<&str>,
        nightly_price: f64,
        availability: &[DateRange],
    ) -> Result<BookingPayload, BookingError> {
        let (check_in, check_out) = match (non_blank(check_in), non_blank(check_out)) {
            (Some(a), Some(b)) => (a, b),
            _ => return Err(BookingError::MissingDates),
        };

        let start = CalendarDate::parse(check_in)?;
        let end = CalendarDate::parse(check_out)?;
        let date_range = DateRange::new(start, end).map_err(|_| BookingError::InvalidOrder)?;

        if !is_stay_available(availability, start, end) {
            return Err(BookingError::Unavailable);
        }

        Ok(BookingPayload {
            date_range,
            total_price: date_range.nights() as f64 * nightly_price,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Bookings a guest made on one listing.
pub fn bookings_for<'a>(bookings: &'a [Booking], owner: &str, listing_id: u64) -> Vec<&'a Booking> {
    bookings
        .iter()
        .filter(|b| b.owner == owner && b.listing_id == listing_id)
        .collect()
}

/// Bookings of a listing regardless of guest.
pub fn bookings_on_listing(bookings: &[Booking], listing_id: u64) -> Vec<&Booking> {
    bookings.iter().filter(|b| b.listing_id == listing_id).collect()
}

pub fn accepted<'a>(bookings: impl IntoIterator<Item = &'a Booking>) -> Vec<&'a Booking> {
    with_status(bookings, |s| s == BookingStatus::Accepted)
}

/// Requests still waiting for the host.
pub fn pending_requests<'a>(bookings: impl IntoIterator<Item = &'a Booking>) -> Vec<&'a Booking> {
    with_status(bookings, |s| s == BookingStatus::Pending)
}

/// Requests the host already answered.
pub fn history<'a>(bookings: impl IntoIterator<Item = &'a Booking>) -> Vec<&'a Booking> {
    with_status(bookings, |s| s != BookingStatus::Pending)
}

fn with_status<'a>(
    bookings: impl IntoIterator<Item = &'a Booking>,
    keep: impl Fn(BookingStatus) -> bool,
) -> Vec<&'a Booking> {
    bookings.into_iter().filter(|b| keep(b.status)).collect()
}
