use serde::{Deserialize, Serialize};

use super::date_range::DateRange;

/// Host decision on a booking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Accepted,
    Declined,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Accepted => "accepted",
            BookingStatus::Declined => "declined",
        }
    }

    /// Pending and accepted bookings both hold the guest's interest in a listing.
    pub fn is_active(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Accepted)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: u64,
    pub owner: String,
    /// The backend sends listing ids as strings on bookings.
    #[serde(with = "listing_id")]
    pub listing_id: u64,
    pub date_range: DateRange,
    pub total_price: f64,
    pub status: BookingStatus,
}

/// Body of a new booking request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    pub date_range: DateRange,
    pub total_price: f64,
}

mod listing_id {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(id: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(id)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(n),
            Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Accepted).unwrap(),
            "\"accepted\""
        );
        assert_eq!(BookingStatus::Declined.as_str(), "declined");
        assert!(BookingStatus::Pending.is_active());
        assert!(!BookingStatus::Declined.is_active());
    }

    #[test]
    fn test_booking_accepts_string_listing_id() {
        let json = serde_json::json!({
            "id": 3,
            "owner": "guest@example.com",
            "listingId": "42",
            "dateRange": { "start": "01/02/2024", "end": "01/05/2024" },
            "totalPrice": 300,
            "status": "pending"
        });
        let booking: Booking = serde_json::from_value(json).unwrap();
        assert_eq!(booking.listing_id, 42);
        assert_eq!(booking.date_range.nights(), 3);
        assert_eq!(booking.status, BookingStatus::Pending);
    }

    #[test]
    fn test_booking_accepts_numeric_listing_id() {
        let json = serde_json::json!({
            "id": 4,
            "owner": "guest@example.com",
            "listingId": 9,
            "dateRange": { "start": "01/02/2024", "end": "01/05/2024" },
            "totalPrice": 300,
            "status": "accepted"
        });
        let booking: Booking = serde_json::from_value(json).unwrap();
        assert_eq!(booking.listing_id, 9);
    }
}
