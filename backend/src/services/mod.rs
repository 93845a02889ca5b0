//! Business logic of the marketplace client.
//!
//! - [`availability`]: validation of the windows an owner publishes
//! - [`matching`]: checking requested dates against published windows
//! - [`booking`]: booking request checks and booking list helpers
//! - [`search`]: landing-page filters and ordering
//! - [`publish`]: the availability dialog and the publish hand-off
//! - [`statistics`]: host dashboard figures

pub mod availability;
pub mod booking;
pub mod matching;
pub mod publish;
pub mod search;
pub mod statistics;

pub use availability::{find_overlap, AvailabilityValidator, ValidationFailure};
pub use booking::{BookingError, BookingRequest};
pub use matching::{
    first_window_containing, is_date_available, is_stay_available, stay_within_single_window,
    DateRangeMatcher,
};
pub use publish::{
    AvailabilityPublisher, PublishError, PublishForm, PublishPayload, RecordingPublisher,
};
pub use search::{apply_filter, arrange_published, sort_by_rating, SearchFilter, SearchState, SortOrder};
pub use statistics::HostStatistics;
