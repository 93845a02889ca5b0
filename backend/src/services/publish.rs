//! Publishing a listing: the availability dialog's form state and the hand-off
//! of a validated availability to the backend.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::context::Notifications;
use crate::models::{AvailabilitySet, DateRange, DraftRange};
use crate::services::availability::{AvailabilityValidator, ValidationFailure};

pub const PUBLISH_SUCCESS_MESSAGE: &str = "Listing published successfully!";

/// Body of the publish request; replaces the listing's stored availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishPayload {
    pub availability: Vec<DateRange>,
}

impl From<&AvailabilitySet> for PublishPayload {
    fn from(set: &AvailabilitySet) -> Self {
        Self {
            availability: set.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PublishError {
    #[error("Add at least one availability before publishing.")]
    Empty,

    #[error(transparent)]
    Rejected(#[from] ValidationFailure),

    /// Error message returned by the backend, shown as is.
    #[error("{0}")]
    Transport(String),
}

/// Transport that sends a validated availability to the backend.
pub trait AvailabilityPublisher {
    fn publish(&mut self, listing_id: u64, payload: &PublishPayload) -> Result<(), PublishError>;
}

/// In-memory publisher that records every request it receives.
#[derive(Debug, Default)]
pub struct RecordingPublisher {
    published: Vec<(u64, PublishPayload)>,
    fail_with: Option<String>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A publisher whose every request fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            published: Vec::new(),
            fail_with: Some(message.into()),
        }
    }

    pub fn published(&self) -> &[(u64, PublishPayload)] {
        &self.published
    }
}

impl AvailabilityPublisher for RecordingPublisher {
    fn publish(&mut self, listing_id: u64, payload: &PublishPayload) -> Result<(), PublishError> {
        if let Some(message) = &self.fail_with {
            return Err(PublishError::Transport(message.clone()));
        }
        self.published.push((listing_id, payload.clone()));
        Ok(())
    }
}

/// State of the "Set up Availability" dialog.
///
/// Rows are edited freely; nothing is validated until [`PublishForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishForm {
    open: bool,
    rows: Vec<DraftRange>,
}

impl PublishForm {
    /// Closed dialog with a single empty row.
    pub fn new() -> Self {
        Self {
            open: false,
            rows: vec![DraftRange::default()],
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn rows(&self) -> &[DraftRange] {
        &self.rows
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close without publishing; edits are discarded.
    pub fn cancel(&mut self) {
        self.open = false;
        self.reset_rows();
    }

    pub fn add_row(&mut self) {
        self.rows.push(DraftRange::default());
    }

    /// Returns false when `index` is out of range.
    pub fn remove_row(&mut self, index: usize) -> bool {
        if index >= self.rows.len() {
            return false;
        }
        self.rows.remove(index);
        true
    }

    pub fn set_start(&mut self, index: usize, date: impl Into<String>) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.start = date.into();
                true
            }
            None => false,
        }
    }

    pub fn set_end(&mut self, index: usize, date: impl Into<String>) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.end = date.into();
                true
            }
            None => false,
        }
    }

    /// Validate the rows and hand them to `publisher`.
    ///
    /// A rejected availability leaves the dialog open and the rows as typed. Once
    /// the publisher has been called the dialog closes whatever the outcome; rows
    /// are reset only on success.
    pub fn submit<P: AvailabilityPublisher>(
        &mut self,
        listing_id: u64,
        publisher: &mut P,
        notifications: &mut Notifications,
    ) -> Result<AvailabilitySet, PublishError> {
        if self.rows.is_empty() {
            notifications.error(PublishError::Empty.to_string());
            return Err(PublishError::Empty);
        }

        let set = match AvailabilityValidator::validate(&self.rows) {
            Ok(set) => set,
            Err(failure) => {
                warn!("Listing {} not published: {}", listing_id, failure);
                notifications.error(failure.message());
                return Err(failure.into());
            }
        };

        let payload = PublishPayload::from(&set);
        let outcome = publisher.publish(listing_id, &payload);
        self.open = false;

        match outcome {
            Ok(()) => {
                info!(
                    "Listing {} published with {} availability window(s)",
                    listing_id,
                    set.len()
                );
                notifications.success(PUBLISH_SUCCESS_MESSAGE);
                self.reset_rows();
                Ok(set)
            }
            Err(err) => {
                warn!("Listing {} publish failed: {}", listing_id, err);
                notifications.error(err.to_string());
                Err(err)
            }
        }
    }

    fn reset_rows(&mut self) {
        self.rows = vec![DraftRange::default()];
    }
}

impl Default for PublishForm {
    fn default() -> Self {
        Self::new()
    }
}
