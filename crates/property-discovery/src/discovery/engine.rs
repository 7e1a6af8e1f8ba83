use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use super::domain::{Listing, RouteCategory};
use super::filters::FilterState;
use super::predicates;
use crate::config::DEFAULT_UK_MARKER;

/// How the surviving listings are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingPolicy {
    /// Incoming order of the raw collection.
    Stable,
    /// Re-shuffled on every recomputation; only membership is meaningful.
    ShuffleOnRead,
}

impl OrderingPolicy {
    pub const fn for_route(route: RouteCategory) -> Self {
        match route {
            RouteCategory::OffPlan => Self::ShuffleOnRead,
            _ => Self::Stable,
        }
    }
}

/// The ordered subset of listings eligible for display.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView {
    route: RouteCategory,
    policy: OrderingPolicy,
    listings: Vec<Listing>,
}

impl DerivedView {
    pub fn empty(route: RouteCategory) -> Self {
        Self {
            route,
            policy: OrderingPolicy::for_route(route),
            listings: Vec::new(),
        }
    }

    pub fn route(&self) -> RouteCategory {
        self.route
    }

    pub fn policy(&self) -> OrderingPolicy {
        self.policy
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position_of(id).is_some()
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.listings
            .iter()
            .position(|listing| listing.id.as_str() == id)
    }

    pub fn ids(&self) -> Vec<&str> {
        self.listings
            .iter()
            .map(|listing| listing.id.as_str())
            .collect()
    }
}

/// Composes the predicate library into the fixed evaluation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterEngine {
    uk_marker: String,
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new(DEFAULT_UK_MARKER)
    }
}

impl FilterEngine {
    pub fn new(uk_marker: impl Into<String>) -> Self {
        Self {
            uk_marker: uk_marker.into(),
        }
    }

    pub fn uk_marker(&self) -> &str {
        &self.uk_marker
    }

    /// Derives the view, shuffling off-plan results with the thread-local RNG.
    pub fn derive(
        &self,
        listings: &[Listing],
        route: RouteCategory,
        filters: &FilterState,
    ) -> DerivedView {
        self.derive_with_rng(listings, route, filters, &mut rand::thread_rng())
    }

    pub fn derive_with_rng<R: Rng + ?Sized>(
        &self,
        listings: &[Listing],
        route: RouteCategory,
        filters: &FilterState,
        rng: &mut R,
    ) -> DerivedView {
        let mut survivors: Vec<Listing> = listings
            .iter()
            .filter(|listing| self.admits(listing, route, filters))
            .cloned()
            .collect();

        let policy = OrderingPolicy::for_route(route);
        if policy == OrderingPolicy::ShuffleOnRead {
            survivors.shuffle(rng);
        }

        debug!(
            route = %route,
            input = listings.len(),
            output = survivors.len(),
            ?policy,
            "derived listing view"
        );

        DerivedView {
            route,
            policy,
            listings: survivors,
        }
    }

    /// Whether a listing passes every stage of the pipeline for `route`.
    pub fn admits(&self, listing: &Listing, route: RouteCategory, filters: &FilterState) -> bool {
        predicates::route_gate(listing, route, &self.uk_marker)
            && predicates::price_floor(listing, filters.min_price)
            && predicates::price_ceiling(listing, filters.max_price)
            && predicates::bedroom_match(listing, filters.bedrooms)
            && predicates::category_token_match(listing, &filters.category)
            && predicates::location_search_match(listing, filters.search_term.as_deref())
    }
}
