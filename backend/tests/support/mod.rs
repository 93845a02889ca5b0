//! Shared fixtures for integration tests.
#![allow(dead_code)]

use airbrb::models::{
    Address, Bedroom, Booking, BookingStatus, CalendarDate, DateRange, DraftRange, Listing,
    ListingMetadata, Review,
};

pub fn date(s: &str) -> CalendarDate {
    CalendarDate::parse(s).expect("valid test date")
}

pub fn draft(start: &str, end: &str) -> DraftRange {
    DraftRange::new(start, end)
}

pub fn range(start: &str, end: &str) -> DateRange {
    DateRange::parse(start, end).expect("valid test range")
}

pub fn listing(id: u64, title: &str, city: &str, price: f64, bedrooms: usize) -> Listing {
    Listing {
        id: Some(id),
        title: title.to_string(),
        owner: "host@example.com".to_string(),
        address: Address {
            street: format!("{} Test St", id),
            city: city.to_string(),
            country: "Australia".to_string(),
        },
        thumbnail: String::new(),
        price,
        metadata: ListingMetadata {
            bathroom_num: 1,
            property_type: "House".to_string(),
            total_bed_num: bedrooms as u32,
            bedrooms: (0..bedrooms)
                .map(|_| Bedroom {
                    bed_num: 1,
                    bed_type: "Queen".to_string(),
                })
                .collect(),
            amenities: vec!["Wifi".to_string()],
            images: vec![],
        },
        reviews: vec![],
        availability: vec![],
        published: false,
        posted_on: None,
    }
}

pub fn review(owner: &str, rate: f64) -> Review {
    Review {
        owner: owner.to_string(),
        rate,
        text: "Lovely stay".to_string(),
        posted_on: "01/20/2024".to_string(),
    }
}

pub fn booking(
    id: u64,
    owner: &str,
    listing_id: u64,
    dates: DateRange,
    total_price: f64,
    status: BookingStatus,
) -> Booking {
    Booking {
        id,
        owner: owner.to_string(),
        listing_id,
        date_range: dates,
        total_price,
        status,
    }
}
