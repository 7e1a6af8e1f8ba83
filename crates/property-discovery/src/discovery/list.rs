use std::cell::Cell;

use serde::Serialize;
use tracing::debug;

use super::domain::{Listing, ListingId, RouteCategory};
use super::engine::DerivedView;
use super::selection::{CardRegistry, ScrollHandle, ScrollOptions, SelectionState};

/// Where inside a card a click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardRegion {
    Body,
    /// Contact, brochure and lead-form buttons handle their own clicks.
    ContactAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub listing_id: ListingId,
    pub position: usize,
    pub title: String,
    pub location: String,
    pub badge: &'static str,
    pub property_type: String,
    pub price_display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price_display: Option<String>,
    pub beds: u32,
    pub baths: u32,
    pub featured: bool,
    /// Listing status shown as a ribbon, e.g. "Ready" or "Handover 2027".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub selected: bool,
}

impl CardView {
    fn from_listing(listing: &Listing, position: usize, selected: bool) -> Self {
        let badge = if listing.is_distress {
            "DISTRESS DEAL"
        } else {
            listing.category.badge()
        };

        let symbol = listing.currency.symbol();
        let mut price_display = format!("{} {}", group_thousands(listing.price), symbol);
        if listing.category == RouteCategory::Rent {
            let frequency = listing.rental_freq.as_deref().unwrap_or("Year");
            price_display.push_str(&format!(" / {frequency}"));
        }

        let original_price_display = listing
            .original_price
            .filter(|_| listing.is_distress)
            .map(group_thousands);

        Self {
            listing_id: listing.id.clone(),
            position,
            title: listing.title.clone(),
            location: listing.location.clone(),
            badge,
            property_type: listing.property_type.clone(),
            price_display,
            original_price_display,
            beds: listing.beds,
            baths: listing.baths,
            featured: listing.is_featured,
            status: Some(listing.status.trim())
                .filter(|status| !status.is_empty())
                .map(str::to_string),
            selected,
        }
    }
}

/// Default scroll handle: the card's slot in the rendered list.
#[derive(Debug, Clone, Default)]
pub struct CardSlot {
    pub position: usize,
    last_request: Cell<Option<ScrollOptions>>,
}

impl CardSlot {
    pub fn new(position: usize) -> Self {
        Self {
            position,
            last_request: Cell::new(None),
        }
    }

    pub fn last_request(&self) -> Option<ScrollOptions> {
        self.last_request.get()
    }
}

impl ScrollHandle for CardSlot {
    fn scroll_into_view(&self, options: ScrollOptions) {
        debug!(position = self.position, ?options, "scroll card into view");
        self.last_request.set(Some(options));
    }
}

/// Renders the derived view as cards and keeps the card registry in step.
#[derive(Debug)]
pub struct ListViewAdapter<H> {
    registry: CardRegistry<H>,
}

impl<H> Default for ListViewAdapter<H> {
    fn default() -> Self {
        Self {
            registry: CardRegistry::default(),
        }
    }
}

impl<H: ScrollHandle> ListViewAdapter<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &CardRegistry<H> {
        &self.registry
    }

    /// Unmounts cards that left the view and mounts handles for every card in it.
    pub fn sync(&mut self, view: &DerivedView, mut make_handle: impl FnMut(&Listing, usize) -> H) {
        self.registry.retain(|id| view.contains(id.as_str()));
        for (position, listing) in view.listings().iter().enumerate() {
            self.registry
                .mount(listing.id.clone(), make_handle(listing, position));
        }
    }

    pub fn render(&self, view: &DerivedView, selection: &SelectionState) -> Vec<CardView> {
        view.listings()
            .iter()
            .enumerate()
            .map(|(position, listing)| {
                CardView::from_listing(listing, position, selection.is_selected(&listing.id))
            })
            .collect()
    }

    /// Returns the listing to select, if the click should select one.
    pub fn handle_click(&self, id: &ListingId, region: CardRegion) -> Option<ListingId> {
        match region {
            CardRegion::Body => Some(id.clone()),
            CardRegion::ContactAction => None,
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(950), "950");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(12_500_000), "12,500,000");
    }

    #[test]
    fn contact_clicks_do_not_select() {
        let adapter: ListViewAdapter<CardSlot> = ListViewAdapter::new();
        let id = ListingId::new("a");
        assert_eq!(adapter.handle_click(&id, CardRegion::Body), Some(id.clone()));
        assert_eq!(adapter.handle_click(&id, CardRegion::ContactAction), None);
    }
}
