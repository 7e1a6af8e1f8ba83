use serde::Serialize;
use tracing::debug;

use super::domain::{Coordinates, ListingId, RouteCategory};
use super::engine::DerivedView;
use super::selection::SelectionState;

/// Dubai, used when no listing in the view carries coordinates.
pub const GENERAL_MARKET_CENTER: Coordinates = Coordinates {
    lat: 25.2048,
    lng: 55.2708,
};

/// Manchester, the fallback for the UK investment route.
pub const UK_MARKET_CENTER: Coordinates = Coordinates {
    lat: 53.4808,
    lng: -2.2426,
};

const ELEVATED_Z_INDEX: u16 = 100;

/// Short marker label: `3.8M`, `950k`, `750`.
pub fn abbreviate_price(price: u64) -> String {
    if price >= 1_000_000 {
        format!("{:.1}M", price as f64 / 1_000_000.0)
    } else if price >= 1_000 {
        format!("{}k", price / 1_000)
    } else {
        price.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStyle {
    Standard,
    /// Raised above its neighbours in the accent color.
    Elevated,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerView {
    pub listing_id: ListingId,
    pub position: Coordinates,
    pub label: String,
    pub style: MarkerStyle,
    pub z_index: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub center: Coordinates,
    pub zoom: u8,
}

impl Viewport {
    pub fn fallback(route: RouteCategory) -> Self {
        match route {
            RouteCategory::UkInvestment => Self {
                center: UK_MARKET_CENTER,
                zoom: 6,
            },
            _ => Self {
                center: GENERAL_MARKET_CENTER,
                zoom: 11,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapFrame {
    pub viewport: Viewport,
    pub markers: Vec<MarkerView>,
    pub recentered: bool,
}

impl MapFrame {
    pub fn elevated(&self) -> impl Iterator<Item = &MarkerView> {
        self.markers
            .iter()
            .filter(|marker| marker.style == MarkerStyle::Elevated)
    }
}

/// Projects the derived view onto map markers and owns the viewport.
#[derive(Debug, Default)]
pub struct MapViewAdapter {
    viewport: Option<Viewport>,
}

impl MapViewAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn render(&mut self, view: &DerivedView, selection: &SelectionState) -> MapFrame {
        let markers = view
            .listings()
            .iter()
            .filter_map(|listing| {
                let position = listing.coordinates()?;
                let elevated = selection.is_selected(&listing.id);
                Some(MarkerView {
                    listing_id: listing.id.clone(),
                    position,
                    label: abbreviate_price(listing.price),
                    style: if elevated {
                        MarkerStyle::Elevated
                    } else {
                        MarkerStyle::Standard
                    },
                    z_index: if elevated { ELEVATED_Z_INDEX } else { 0 },
                })
            })
            .collect::<Vec<_>>();

        let fallback = Viewport::fallback(view.route());
        let target = Viewport {
            center: markers
                .first()
                .map(|marker| marker.position)
                .unwrap_or(fallback.center),
            zoom: fallback.zoom,
        };

        let recentered = self.viewport != Some(target);
        if recentered {
            debug!(
                lat = target.center.lat,
                lng = target.center.lng,
                zoom = target.zoom,
                "map viewport recentered"
            );
            self.viewport = Some(target);
        }

        MapFrame {
            viewport: target,
            markers,
            recentered,
        }
    }
}
