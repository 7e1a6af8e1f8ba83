mod parser;

use crate::discovery::domain::{Listing, ListingId, RouteCategory};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Supplies the working set of listings for a route.
pub trait ListingSource: Send + Sync {
    fn listings(&self, route: RouteCategory) -> Result<Vec<Listing>, ListingSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ListingSourceError {
    #[error("listing source unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read listing export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid listing CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid listing on line {line}: {reason}")]
    InvalidRow { line: u64, reason: String },
    #[error("listing id {0} appears more than once")]
    DuplicateListing(ListingId),
}

/// Already-fetched listings held in their incoming order.
///
/// Every route gets the whole collection; route gating happens in the filter
/// engine so that mis-tagged UK listings are still routed correctly.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    listings: Vec<Listing>,
}

impl InMemoryCatalog {
    pub fn new(listings: Vec<Listing>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(listings.len());
        for listing in &listings {
            if !seen.insert(&listing.id) {
                return Err(CatalogError::DuplicateListing(listing.id.clone()));
            }
        }
        Ok(Self { listings })
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn all(&self) -> &[Listing] {
        &self.listings
    }
}

impl ListingSource for InMemoryCatalog {
    fn listings(&self, _route: RouteCategory) -> Result<Vec<Listing>, ListingSourceError> {
        Ok(self.listings.clone())
    }
}

pub struct ListingCsvImporter;

impl ListingCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<InMemoryCatalog, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let catalog = Self::from_reader(file)?;
        info!(path = %path.display(), listings = catalog.len(), "imported listing catalog");
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<InMemoryCatalog, CatalogError> {
        let listings = parser::parse_listings(reader)?;
        InMemoryCatalog::new(listings)
    }
}
