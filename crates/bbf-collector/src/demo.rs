//! Canned listings used when no search credential is configured.

use bbf_core::{title_case, Business, Review};
use chrono::{DateTime, Utc};

const DEFAULT_DEMO_STATE: &str = "NC";

struct DemoListing {
    place_id: &'static str,
    name_prefix: &'static str,
    name_suffix: &'static str,
    address: &'static str,
    phone: Option<&'static str>,
    website: Option<&'static str>,
    rating: f64,
    review_count: u32,
    negative: bool,
}

const LISTINGS: [DemoListing; 5] = [
    DemoListing {
        place_id: "demo_1",
        name_prefix: "Pro ",
        name_suffix: " Services",
        address: "123 Main St",
        phone: Some("(555) 123-4567"),
        website: Some("https://example.com"),
        rating: 4.2,
        review_count: 47,
        negative: false,
    },
    DemoListing {
        place_id: "demo_2",
        name_prefix: "Budget ",
        name_suffix: " Co",
        address: "456 Oak Ave",
        phone: Some("(555) 234-5678"),
        website: None,
        rating: 3.1,
        review_count: 23,
        negative: true,
    },
    DemoListing {
        place_id: "demo_3",
        name_prefix: "Elite ",
        name_suffix: "",
        address: "789 Pine Rd",
        phone: Some("(555) 345-6789"),
        website: Some("https://elite-example.com"),
        rating: 4.8,
        review_count: 156,
        negative: false,
    },
    DemoListing {
        place_id: "demo_4",
        name_prefix: "Local ",
        name_suffix: " Experts",
        address: "321 Elm St",
        phone: None,
        website: None,
        rating: 2.9,
        review_count: 12,
        negative: true,
    },
    DemoListing {
        place_id: "demo_5",
        name_prefix: "Family ",
        name_suffix: " Service",
        address: "654 Maple Dr",
        phone: Some("(555) 456-7890"),
        website: None,
        rating: 4.5,
        review_count: 89,
        negative: false,
    },
];

const NEGATIVE_REVIEWS: [(u8, &str); 5] = [
    (1, "Terrible service! They never showed up on time and the work was sloppy."),
    (2, "Overpriced and unprofessional. Would not recommend."),
    (2, "Communication was awful. Had to call multiple times to get updates."),
    (3, "Average work, but too expensive for what you get."),
    (1, "They damaged my property and refused to take responsibility."),
];

const POSITIVE_REVIEWS: [(u8, &str); 5] = [
    (5, "Excellent service! Professional and on time."),
    (4, "Good work, fair prices. Would use again."),
    (5, "Best in the area. Highly recommend!"),
    (4, "Quality work, though scheduling took a while."),
    (5, "Transformed my space. Very happy with the results."),
];

/// Five fixed businesses alternating well- and poorly-reviewed.
///
/// Only names, category, city and state depend on the inputs; place ids are
/// always `demo_1` through `demo_5`.
#[must_use]
pub fn demo_businesses(query: &str, location: &str, scraped_at: DateTime<Utc>) -> Vec<Business> {
    let display = title_case(query);
    let mut parts = location.split(',');
    let city = parts.next().unwrap_or_default().trim().to_string();
    let state = parts
        .next()
        .map_or(DEFAULT_DEMO_STATE, str::trim)
        .to_string();

    LISTINGS
        .iter()
        .map(|l| Business {
            name: format!("{}{display}{}", l.name_prefix, l.name_suffix),
            place_id: l.place_id.to_string(),
            category: query.to_string(),
            address: l.address.to_string(),
            city: city.clone(),
            state: state.clone(),
            zip_code: None,
            latitude: None,
            longitude: None,
            phone: l.phone.map(str::to_string),
            website: l.website.map(str::to_string),
            rating: Some(l.rating),
            review_count: l.review_count,
            reviews: demo_reviews(l.negative),
            scraped_at,
        })
        .collect()
}

#[must_use]
pub fn demo_reviews(negative: bool) -> Vec<Review> {
    let set = if negative {
        &NEGATIVE_REVIEWS
    } else {
        &POSITIVE_REVIEWS
    };
    set.iter()
        .map(|(rating, text)| Review::new(*rating, *text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_businesses_with_fixed_ids() {
        let businesses = demo_businesses("mobile mechanic", "Charlotte, NC", Utc::now());
        let ids: Vec<_> = businesses.iter().map(|b| b.place_id.as_str()).collect();
        assert_eq!(ids, ["demo_1", "demo_2", "demo_3", "demo_4", "demo_5"]);
    }

    #[test]
    fn ids_do_not_depend_on_query_or_location() {
        let ids = |query: &str, location: &str| -> Vec<String> {
            demo_businesses(query, location, Utc::now())
                .into_iter()
                .map(|b| b.place_id)
                .collect()
        };
        let first = ids("mobile mechanic", "Charlotte, NC");
        let second = ids("septic pumping", "Tulsa, OK");
        assert_eq!(first, second);

        let a = demo_businesses("mobile mechanic", "Charlotte, NC", Utc::now());
        let b = demo_businesses("septic pumping", "Tulsa, OK", Utc::now());
        assert_ne!(a[0].name, b[0].name);
        assert_ne!(a[0].city, b[0].city);
    }

    #[test]
    fn names_use_title_cased_query() {
        let businesses = demo_businesses("mobile mechanic", "Charlotte, NC", Utc::now());
        assert_eq!(businesses[0].name, "Pro Mobile Mechanic Services");
        assert_eq!(businesses[2].name, "Elite Mobile Mechanic");
        assert!(businesses.iter().all(|b| b.category == "mobile mechanic"));
    }

    #[test]
    fn location_without_comma_defaults_state() {
        let businesses = demo_businesses("lawn care", "Boise", Utc::now());
        assert!(businesses.iter().all(|b| b.city == "Boise" && b.state == "NC"));
    }

    #[test]
    fn bad_listings_carry_negative_reviews() {
        let businesses = demo_businesses("x", "Austin, TX", Utc::now());
        assert_eq!(businesses[1].negative_reviews().count(), 4);
        assert_eq!(businesses[0].negative_reviews().count(), 0);
        assert!(!businesses[3].has_website());
        assert!(businesses[3].phone.is_none());
    }
}
