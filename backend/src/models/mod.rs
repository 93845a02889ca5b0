//! Domain models for the rental marketplace.
//!
//! This module defines the value types shared by every service: calendar
//! dates in the client's `MM/DD/YYYY` format, availability windows, listings
//! and bookings.

pub mod booking;
pub mod date;
pub mod date_range;
pub mod listing;

pub use booking::*;
pub use date::*;
pub use date_range::*;
pub use listing::*;
