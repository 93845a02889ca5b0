//! # AirBrB client core
//!
//! Domain logic of the AirBrB vacation-rental marketplace client.
//!
//! This crate holds everything the client decides on its own, without the
//! backend: whether an owner's availability windows can be published, whether
//! a guest's dates can be booked, how the landing page filters and orders
//! listings, and the figures shown on a host's dashboard.
//!
//! ## Architecture
//!
//! - [`models`]: dates, availability windows, listings and bookings
//! - [`services`]: validation, matching, booking, search, publish and statistics
//! - [`context`]: session and notification state passed to pages explicitly
//! - [`config`]: TOML client configuration
//! - [`error`]: crate-wide error type
//!
//! ## Example
//!
//! ```
//! use airbrb::models::{CalendarDate, DraftRange};
//! use airbrb::services::{is_date_available, AvailabilityValidator};
//!
//! let set = AvailabilityValidator::validate(&[
//!     DraftRange::new("01/01/2024", "01/10/2024"),
//!     DraftRange::new("01/11/2024", "01/20/2024"),
//! ])
//! .unwrap();
//!
//! assert!(is_date_available(&set, CalendarDate::parse("01/05/2024").unwrap()));
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod models;
pub mod services;

pub use error::{AppError, Result};
