//! Client-side search, filtering and ordering of the landing-page listings.

use std::cmp::Ordering;

use crate::config::SearchSettings;
use crate::models::{Booking, CalendarDate, Listing};
use crate::services::matching::stay_within_single_window;

/// One landing-page filter. Each search applies a single filter to the full
/// published collection.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchFilter {
    /// Case-insensitive substring of the title or the city.
    Keyword(String),
    /// Inclusive range on the number of bedrooms.
    Bedrooms { min: usize, max: usize },
    /// Both dates inside one availability window.
    Dates {
        check_in: CalendarDate,
        check_out: CalendarDate,
    },
    /// Inclusive range on the nightly price.
    Price { min: f64, max: f64 },
}

impl SearchFilter {
    pub fn matches(&self, listing: &Listing) -> bool {
        match self {
            SearchFilter::Keyword(keyword) => {
                let needle = keyword.to_lowercase();
                listing.title.to_lowercase().contains(&needle)
                    || listing.address.city.to_lowercase().contains(&needle)
            }
            SearchFilter::Bedrooms { min, max } => {
                let count = listing.bedroom_count();
                count >= *min && count <= *max
            }
            SearchFilter::Dates {
                check_in,
                check_out,
            } => stay_within_single_window(&listing.availability, *check_in, *check_out),
            SearchFilter::Price { min, max } => listing.price >= *min && listing.price <= *max,
        }
    }
}

pub fn apply_filter(listings: &[Listing], filter: &SearchFilter) -> Vec<Listing> {
    listings
        .iter()
        .filter(|l| filter.matches(l))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Order by average review rating. Ties keep their incoming order.
pub fn sort_by_rating(listings: &[Listing], order: SortOrder) -> Vec<Listing> {
    let mut sorted = listings.to_vec();
    sorted.sort_by(|a, b| {
        let cmp = a
            .average_rating()
            .partial_cmp(&b.average_rating())
            .unwrap_or(Ordering::Equal);
        match order {
            SortOrder::Ascending => cmp,
            SortOrder::Descending => cmp.reverse(),
        }
    });
    sorted
}

/// Landing-page order: published listings only; those the viewer holds a
/// pending or accepted booking on come first in their incoming order, the rest
/// follow sorted by title, ignoring case.
pub fn arrange_published(
    listings: Vec<Listing>,
    bookings: &[Booking],
    viewer: Option<&str>,
) -> Vec<Listing> {
    let booked_ids: Vec<u64> = match viewer {
        Some(email) => bookings
            .iter()
            .filter(|b| b.owner == email && b.status.is_active())
            .map(|b| b.listing_id)
            .collect(),
        None => Vec::new(),
    };

    let (mut prior, mut rest): (Vec<Listing>, Vec<Listing>) = listings
        .into_iter()
        .filter(|l| l.published)
        .partition(|l| l.id.is_some_and(|id| booked_ids.contains(&id)));

    rest.sort_by(|a, b| {
        a.title
            .to_lowercase()
            .cmp(&b.title.to_lowercase())
            .then_with(|| a.title.cmp(&b.title))
    });
    prior.append(&mut rest);
    prior
}

/// Search form state of the landing page.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    defaults: SearchSettings,
    pub keyword: String,
    pub bedroom_range: (usize, usize),
    pub check_in: Option<CalendarDate>,
    pub check_out: Option<CalendarDate>,
    pub price_range: (f64, f64),
}

impl SearchState {
    pub fn new(defaults: SearchSettings) -> Self {
        Self {
            keyword: String::new(),
            bedroom_range: defaults.bedroom_range,
            check_in: None,
            check_out: None,
            price_range: defaults.price_range,
            defaults,
        }
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
    }

    pub fn set_bedroom_range(&mut self, min: usize, max: usize) {
        self.bedroom_range = (min.min(max), min.max(max));
    }

    pub fn set_price_range(&mut self, min: f64, max: f64) {
        self.price_range = (min.min(max), min.max(max));
    }

    pub fn set_check_in(&mut self, date: CalendarDate) {
        self.check_in = Some(date);
    }

    pub fn set_check_out(&mut self, date: CalendarDate) {
        self.check_out = Some(date);
    }

    /// Back to the configured defaults.
    pub fn reset(&mut self) {
        *self = Self::new(self.defaults.clone());
    }

    pub fn keyword_filter(&self) -> SearchFilter {
        SearchFilter::Keyword(self.keyword.clone())
    }

    pub fn bedroom_filter(&self) -> SearchFilter {
        SearchFilter::Bedrooms {
            min: self.bedroom_range.0,
            max: self.bedroom_range.1,
        }
    }

    /// `None` until both dates are picked.
    pub fn date_filter(&self) -> Option<SearchFilter> {
        Some(SearchFilter::Dates {
            check_in: self.check_in?,
            check_out: self.check_out?,
        })
    }

    pub fn price_filter(&self) -> SearchFilter {
        SearchFilter::Price {
            min: self.price_range.0,
            max: self.price_range.1,
        }
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(SearchSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Address, BookingStatus, DateRange, ListingMetadata, Review};

    fn listing(id: u64, title: &str, city: &str, price: f64, bedrooms: usize) -> Listing {
        Listing {
            id: Some(id),
            title: title.to_string(),
            owner: "host@example.com".to_string(),
            address: Address {
                street: "1 Main St".to_string(),
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
                    .map(|_| crate::models::Bedroom {
                        bed_num: 1,
                        bed_type: "Queen".to_string(),
                    })
                    .collect(),
                amenities: vec![],
                images: vec![],
            },
            reviews: vec![],
            availability: vec![],
            published: true,
            posted_on: None,
        }
    }

    fn rated(mut l: Listing, rates: &[f64]) -> Listing {
        l.reviews = rates
            .iter()
            .map(|&rate| Review {
                owner: "g@x.com".to_string(),
                rate,
                text: String::new(),
                posted_on: String::new(),
            })
            .collect();
        l
    }

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    #[test]
    fn test_keyword_matches_title_or_city() {
        let all = vec![
            listing(1, "Beach House", "Byron Bay", 200.0, 2),
            listing(2, "City Loft", "Sydney", 150.0, 1),
        ];
        let hits = apply_filter(&all, &SearchFilter::Keyword("BEACH".to_string()));
        assert_eq!(hits.len(), 1);
        let hits = apply_filter(&all, &SearchFilter::Keyword("sydney".to_string()));
        assert_eq!(hits[0].id, Some(2));
        assert_eq!(apply_filter(&all, &SearchFilter::Keyword(String::new())).len(), 2);
    }

    #[test]
    fn test_bedroom_and_price_ranges_inclusive() {
        let all = vec![
            listing(1, "A", "X", 100.0, 1),
            listing(2, "B", "X", 300.0, 3),
            listing(3, "C", "X", 301.0, 4),
        ];
        let hits = apply_filter(&all, &SearchFilter::Bedrooms { min: 1, max: 3 });
        assert_eq!(hits.len(), 2);
        let hits = apply_filter(&all, &SearchFilter::Price { min: 100.0, max: 300.0 });
        assert_eq!(hits.iter().map(|l| l.id).collect::<Vec<_>>(), vec![Some(1), Some(2)]);
    }

    #[test]
    fn test_dates_need_single_window() {
        let mut l = listing(1, "A", "X", 100.0, 1);
        l.availability = vec![
            DateRange::parse("01/01/2024", "01/10/2024").unwrap(),
            DateRange::parse("01/20/2024", "01/31/2024").unwrap(),
        ];
        let all = vec![l];

        let inside = SearchFilter::Dates {
            check_in: date("01/02/2024"),
            check_out: date("01/09/2024"),
        };
        let spanning = SearchFilter::Dates {
            check_in: date("01/09/2024"),
            check_out: date("01/21/2024"),
        };
        assert_eq!(apply_filter(&all, &inside).len(), 1);
        assert!(apply_filter(&all, &spanning).is_empty());
    }

    #[test]
    fn test_sort_by_rating() {
        let all = vec![
            rated(listing(1, "A", "X", 1.0, 1), &[3.0]),
            rated(listing(2, "B", "X", 1.0, 1), &[5.0, 4.0]),
            listing(3, "C", "X", 1.0, 1),
        ];
        let desc = sort_by_rating(&all, SortOrder::Descending);
        assert_eq!(desc.iter().map(|l| l.id.unwrap()).collect::<Vec<_>>(), vec![2, 1, 3]);
        let asc = sort_by_rating(&all, SortOrder::Ascending);
        assert_eq!(asc.iter().map(|l| l.id.unwrap()).collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn test_arrange_published_puts_booked_first() {
        let mut hidden = listing(4, "Aardvark", "X", 1.0, 1);
        hidden.published = false;
        let listings = vec![
            listing(1, "Zebra", "X", 1.0, 1),
            listing(2, "Mango", "X", 1.0, 1),
            listing(3, "Apple", "X", 1.0, 1),
            hidden,
        ];
        let bookings = vec![Booking {
            id: 1,
            owner: "me@x.com".to_string(),
            listing_id: 1,
            date_range: DateRange::parse("01/01/2024", "01/02/2024").unwrap(),
            total_price: 1.0,
            status: BookingStatus::Pending,
        }];

        let arranged = arrange_published(listings.clone(), &bookings, Some("me@x.com"));
        let titles: Vec<&str> = arranged.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Zebra", "Apple", "Mango"]);

        let anonymous = arrange_published(listings, &bookings, None);
        let titles: Vec<&str> = anonymous.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "Mango", "Zebra"]);
    }

    #[test]
    fn test_arrange_published_title_order_ignores_case() {
        let listings = vec![
            listing(1, "Zebra", "X", 1.0, 1),
            listing(2, "apple", "X", 1.0, 1),
            listing(3, "Mango", "X", 1.0, 1),
            listing(4, "Apple", "X", 1.0, 1),
        ];
        let arranged = arrange_published(listings, &[], None);
        let titles: Vec<&str> = arranged.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "apple", "Mango", "Zebra"]);
    }

    #[test]
    fn test_search_state_reset() {
        let mut state = SearchState::default();
        state.set_keyword("loft");
        state.set_bedroom_range(4, 2);
        state.set_check_in(date("01/01/2024"));
        assert_eq!(state.bedroom_range, (2, 4));
        assert!(state.date_filter().is_none());

        state.set_check_out(date("01/03/2024"));
        assert!(state.date_filter().is_some());

        state.reset();
        assert!(state.keyword.is_empty());
        assert_eq!(state.bedroom_range, (1, 3));
        assert_eq!(state.price_range, (100.0, 300.0));
        assert!(state.check_in.is_none());
    }
}
