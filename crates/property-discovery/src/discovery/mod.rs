//! Listing discovery: filter pipeline, selection coordination and the map/list
//! projections that share one derived view.

pub mod catalog;
pub mod domain;
pub mod engine;
pub mod filters;
pub mod list;
pub mod map;
pub mod predicates;
pub mod router;
pub mod selection;
pub mod session;

#[cfg(test)]
mod tests;

pub use catalog::{
    CatalogError, InMemoryCatalog, ListingCsvImporter, ListingSource, ListingSourceError,
};
pub use domain::{Coordinates, Currency, Listing, ListingId, RouteCategory};
pub use engine::{DerivedView, FilterEngine, OrderingPolicy};
pub use filters::{BedroomFilter, CategoryTag, FilterPatch, FilterState};
pub use list::{CardRegion, CardSlot, CardView, ListViewAdapter};
pub use map::{abbreviate_price, MapFrame, MapViewAdapter, MarkerStyle, MarkerView, Viewport};
pub use router::{discovery_router, run_search, SearchRequest, SearchResponse};
pub use selection::{
    CardRegistry, ScrollHandle, ScrollOptions, ScrollOutcome, SelectionCoordinator,
    SelectionState,
};
pub use session::{DiscoveryFrame, DiscoverySession, EmptyState};
