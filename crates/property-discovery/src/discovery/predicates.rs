//! Pure filter functions over a single listing.

use super::domain::{Listing, RouteCategory};
use super::filters::{BedroomFilter, CategoryTag};

pub fn route_gate(listing: &Listing, route: RouteCategory, uk_marker: &str) -> bool {
    let in_uk = listing.is_in_uk_market(uk_marker);
    match route {
        RouteCategory::UkInvestment => in_uk,
        other => listing.category == other && !in_uk,
    }
}

pub fn price_floor(listing: &Listing, floor: Option<u64>) -> bool {
    floor.map_or(true, |floor| listing.price >= floor)
}

pub fn price_ceiling(listing: &Listing, ceiling: Option<u64>) -> bool {
    ceiling.map_or(true, |ceiling| listing.price <= ceiling)
}

pub fn bedroom_match(listing: &Listing, bedrooms: BedroomFilter) -> bool {
    match bedrooms {
        BedroomFilter::Any => true,
        BedroomFilter::Exactly(count) => listing.beds == count,
        BedroomFilter::FiveOrMore => listing.beds >= 5,
    }
}

pub fn category_token_match(listing: &Listing, category: &CategoryTag) -> bool {
    match category {
        CategoryTag::Any => true,
        CategoryTag::Token(token) => contains_ignore_case(&listing.title, token),
    }
}

pub fn location_search_match(listing: &Listing, term: Option<&str>) -> bool {
    match term {
        None => true,
        Some(term) => {
            contains_ignore_case(&listing.location, term)
                || contains_ignore_case(&listing.title, term)
                || contains_ignore_case(&listing.description, term)
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
