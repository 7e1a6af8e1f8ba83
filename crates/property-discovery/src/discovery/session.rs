use serde::Serialize;

use super::domain::{Listing, ListingId, RouteCategory};
use super::engine::{DerivedView, FilterEngine, OrderingPolicy};
use super::filters::{FilterPatch, FilterState};
use super::list::{CardRegion, CardSlot, CardView, ListViewAdapter};
use super::map::{MapFrame, MapViewAdapter};
use super::selection::{CardRegistry, ScrollOutcome, SelectionCoordinator, SelectionState};

/// Why the derived view came out empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum EmptyState {
    NoListings,
    FiltersTooStrict { search_hint: bool },
}

/// Everything the presentation shell needs for one render.
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveryFrame {
    pub route: RouteCategory,
    pub title: String,
    pub description: &'static str,
    pub result_count: usize,
    pub has_active_filters: bool,
    pub ordering: OrderingPolicy,
    pub selection: SelectionState,
    pub map: MapFrame,
    pub cards: Vec<CardView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
}

/// Explicit state owner for one browsing session on one route.
///
/// Every input change recomputes the derived view before returning, so callers
/// never observe a stale view.
#[derive(Debug)]
pub struct DiscoverySession {
    engine: FilterEngine,
    route: RouteCategory,
    listings: Vec<Listing>,
    filters: FilterState,
    view: DerivedView,
    selection: SelectionCoordinator,
    map: MapViewAdapter,
    list: ListViewAdapter<CardSlot>,
}

impl DiscoverySession {
    pub fn new(engine: FilterEngine, route: RouteCategory, listings: Vec<Listing>) -> Self {
        Self::with_filters(engine, route, listings, FilterState::default())
    }

    /// Starts a session with filters already applied, deriving the view once.
    pub fn with_filters(
        engine: FilterEngine,
        route: RouteCategory,
        listings: Vec<Listing>,
        filters: FilterState,
    ) -> Self {
        let mut session = Self {
            engine,
            route,
            listings,
            filters,
            view: DerivedView::empty(route),
            selection: SelectionCoordinator::new(),
            map: MapViewAdapter::new(),
            list: ListViewAdapter::new(),
        };
        session.recompute();
        session
    }

    pub fn route(&self) -> RouteCategory {
        self.route
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn derived_view(&self) -> &DerivedView {
        &self.view
    }

    pub fn selection(&self) -> Option<&ListingId> {
        self.selection.selected()
    }

    pub fn card_registry(&self) -> &CardRegistry<CardSlot> {
        self.list.registry()
    }

    pub fn set_listings(&mut self, listings: Vec<Listing>) {
        self.listings = listings;
        self.recompute();
    }

    /// Navigation changed the route context. Selection survives.
    pub fn set_route(&mut self, route: RouteCategory, search_term: Option<String>) {
        self.route = route;
        self.filters.set_search_term(search_term);
        self.recompute();
    }

    pub fn set_search_term(&mut self, search_term: Option<String>) {
        self.filters.set_search_term(search_term);
        self.recompute();
    }

    pub fn set_filter(&mut self, patch: FilterPatch) {
        self.filters.merge(patch);
        self.recompute();
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.recompute();
    }

    pub fn select_by_id(&mut self, id: ListingId) -> ScrollOutcome {
        self.selection.select_by_id(id, self.list.registry())
    }

    pub fn click_marker(&mut self, id: ListingId) -> ScrollOutcome {
        self.select_by_id(id)
    }

    pub fn click_card(&mut self, id: &ListingId, region: CardRegion) -> Option<ScrollOutcome> {
        let target = self.list.handle_click(id, region)?;
        Some(self.select_by_id(target))
    }

    pub fn render(&mut self) -> DiscoveryFrame {
        let selection = self.selection.state().clone();
        let map = self.map.render(&self.view, &selection);
        let cards = self.list.render(&self.view, &selection);
        let title = match &self.filters.search_term {
            Some(term) => format!("Properties in {term}"),
            None => self.route.page_title().to_string(),
        };

        DiscoveryFrame {
            route: self.route,
            title,
            description: self.route.page_description(),
            result_count: self.view.len(),
            has_active_filters: self.filters.is_active(),
            ordering: self.view.policy(),
            selection,
            map,
            cards,
            empty_state: self.empty_state(),
        }
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.view.is_empty() {
            return None;
        }

        if self.filters.is_active() {
            Some(EmptyState::FiltersTooStrict {
                search_hint: self.filters.search_term.is_some(),
            })
        } else {
            Some(EmptyState::NoListings)
        }
    }

    fn recompute(&mut self) {
        self.view = self
            .engine
            .derive(&self.listings, self.route, &self.filters);
        self.list
            .sync(&self.view, |_, position| CardSlot::new(position));
    }
}
