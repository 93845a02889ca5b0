//! Listing documents as exchanged with the marketplace backend.

use serde::{Deserialize, Serialize};

use super::date::CalendarDate;
use super::date_range::{AvailabilitySet, DateRange, DraftRange};
use crate::services::availability::{AvailabilityValidator, ValidationFailure};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bedroom {
    pub bed_num: u32,
    pub bed_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingMetadata {
    pub bathroom_num: u32,
    pub property_type: String,
    pub total_bed_num: u32,
    #[serde(default)]
    pub bedrooms: Vec<Bedroom>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

/// A guest review left on a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub owner: String,
    pub rate: f64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub posted_on: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    pub owner: String,
    pub address: Address,
    pub thumbnail: String,
    pub price: f64,
    pub metadata: ListingMetadata,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub availability: Vec<DateRange>,
    #[serde(default)]
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_on: Option<String>,
}

impl Listing {
    pub fn bedroom_count(&self) -> usize {
        self.metadata.bedrooms.len()
    }

    pub fn average_rating(&self) -> f64 {
        average_rating(&self.reviews)
    }

    /// Stored availability run through the publish rules. Each window was
    /// checked on its own when deserialized; this also rejects overlaps.
    pub fn availability_set(&self) -> Result<AvailabilitySet, ValidationFailure> {
        let drafts: Vec<DraftRange> = self.availability.iter().map(DraftRange::from).collect();
        AvailabilityValidator::validate(&drafts)
    }

    /// Day the listing went live, `None` if never published or unreadable.
    pub fn posted_date(&self) -> Option<CalendarDate> {
        self.posted_on
            .as_deref()
            .and_then(|raw| CalendarDate::from_timestamp(raw).ok())
    }
}

/// Mean review score, `0.0` for a listing nobody has reviewed.
pub fn average_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    reviews.iter().map(|r| r.rate).sum::<f64>() / reviews.len() as f64
}

/// Rating as shown on cards: one decimal place.
pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", rating)
}

/// Errors from the listing submission schema.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListingError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("{field} must be at least {min}, got {value}")]
    BelowMinimum {
        field: &'static str,
        min: f64,
        value: f64,
    },
}

/// Body sent when creating or editing a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingSubmission {
    pub title: String,
    pub address: Address,
    pub price: f64,
    pub thumbnail: String,
    pub metadata: ListingMetadata,
}

impl ListingSubmission {
    /// Check required fields and numeric minimums before the listing is sent.
    pub fn validate(&self) -> Result<(), ListingError> {
        require("title", &self.title)?;
        require("thumbnail", &self.thumbnail)?;
        require("address.street", &self.address.street)?;
        require("address.city", &self.address.city)?;
        require("address.country", &self.address.country)?;
        require("metadata.propertyType", &self.metadata.property_type)?;

        at_least("price", self.price, 1.0)?;
        at_least(
            "metadata.bathroomNum",
            self.metadata.bathroom_num as f64,
            1.0,
        )?;
        at_least(
            "metadata.totalBedNum",
            self.metadata.total_bed_num as f64,
            1.0,
        )?;

        for bedroom in &self.metadata.bedrooms {
            at_least("bedrooms.bedNum", bedroom.bed_num as f64, 1.0)?;
            require("bedrooms.bedType", &bedroom.bed_type)?;
        }

        Ok(())
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ListingError> {
    if value.trim().is_empty() {
        return Err(ListingError::MissingField(field));
    }
    Ok(())
}

fn at_least(field: &'static str, value: f64, min: f64) -> Result<(), ListingError> {
    if value.is_nan() || value < min {
        return Err(ListingError::BelowMinimum { field, min, value });
    }
    Ok(())
}
