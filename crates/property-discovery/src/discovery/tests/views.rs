use super::common::*;
use crate::discovery::domain::{Coordinates, Currency, ListingId, RouteCategory};
use crate::discovery::engine::FilterEngine;
use crate::discovery::filters::{FilterPatch, FilterState};
use crate::discovery::list::{CardSlot, ListViewAdapter};
use crate::discovery::map::{
    MapViewAdapter, MarkerStyle, Viewport, GENERAL_MARKET_CENTER, UK_MARKET_CENTER,
};
use crate::discovery::selection::SelectionState;
use crate::discovery::session::DiscoverySession;

#[test]
fn markers_skip_unmappable_listings() {
    let engine = FilterEngine::default();
    let view = engine.derive(&market(), RouteCategory::Sale, &FilterState::default());
    let mut map = MapViewAdapter::new();

    let frame = map.render(&view, &SelectionState::Unselected);

    let labels: Vec<_> = frame
        .markers
        .iter()
        .map(|marker| (marker.listing_id.as_str(), marker.label.as_str()))
        .collect();
    assert_eq!(
        labels,
        vec![
            ("marina-2br", "2.0M"),
            ("palm-villa", "18.5M"),
            ("bb-penthouse", "9.2M"),
        ]
    );
    assert!(frame
        .markers
        .iter()
        .all(|marker| marker.style == MarkerStyle::Standard && marker.z_index == 0));
}

#[test]
fn selected_marker_is_elevated() {
    let engine = FilterEngine::default();
    let view = engine.derive(&market(), RouteCategory::Sale, &FilterState::default());
    let mut map = MapViewAdapter::new();
    let selection = SelectionState::Selected(ListingId::new("palm-villa"));

    let frame = map.render(&view, &selection);

    let elevated: Vec<_> = frame.elevated().collect();
    assert_eq!(elevated.len(), 1);
    assert_eq!(elevated[0].listing_id, ListingId::new("palm-villa"));
    assert!(elevated[0].z_index > 0);
}

#[test]
fn viewport_centers_on_first_geolocated_listing() {
    let engine = FilterEngine::default();
    let listings = vec![
        listing("no-coords", RouteCategory::Sale, 1_200_000, 1, "Al Barsha"),
        geolocated(
            listing("located", RouteCategory::Sale, 1_500_000, 2, "Al Sufouh"),
            25.11,
            55.17,
        ),
    ];
    let view = engine.derive(&listings, RouteCategory::Sale, &FilterState::default());
    let mut map = MapViewAdapter::new();

    let frame = map.render(&view, &SelectionState::Unselected);

    assert!(frame.recentered);
    assert_eq!(
        frame.viewport.center,
        Coordinates {
            lat: 25.11,
            lng: 55.17
        }
    );
    assert_eq!(frame.viewport.zoom, 11);
}

#[test]
fn viewport_only_moves_when_reference_listing_changes() {
    let engine = FilterEngine::default();
    let listings = market();
    let mut filters = FilterState::default();
    let mut map = MapViewAdapter::new();

    let view = engine.derive(&listings, RouteCategory::Sale, &filters);
    assert!(map.render(&view, &SelectionState::Unselected).recentered);
    let unchanged = map.render(
        &view,
        &SelectionState::Selected(ListingId::new("palm-villa")),
    );
    assert!(!unchanged.recentered);

    filters.merge(FilterPatch::min_price(5_000_000));
    let view = engine.derive(&listings, RouteCategory::Sale, &filters);
    let moved = map.render(&view, &SelectionState::Unselected);
    assert!(moved.recentered);
    assert_eq!(moved.viewport.center.lat, 25.1124);
}

#[test]
fn viewport_falls_back_per_market() {
    let engine = FilterEngine::default();
    let listings = vec![
        listing("leeds", RouteCategory::UkInvestment, 185_000, 1, "Leeds, United Kingdom"),
        listing("deira", RouteCategory::Sale, 700_000, 1, "Deira"),
    ];
    let mut map = MapViewAdapter::new();

    let uk = engine.derive(&listings, RouteCategory::UkInvestment, &FilterState::default());
    let frame = map.render(&uk, &SelectionState::Unselected);
    assert!(frame.markers.is_empty());
    assert_eq!(frame.viewport, Viewport::fallback(RouteCategory::UkInvestment));
    assert_eq!(frame.viewport.center, UK_MARKET_CENTER);

    let sale = engine.derive(&listings, RouteCategory::Sale, &FilterState::default());
    let frame = map.render(&sale, &SelectionState::Unselected);
    assert!(frame.recentered);
    assert_eq!(frame.viewport.center, GENERAL_MARKET_CENTER);
}

#[test]
fn cards_follow_view_order_and_describe_price() {
    let engine = FilterEngine::default();
    let mut weekly = listing("weekly", RouteCategory::Rent, 4_500, 1, "Dubai Marina");
    weekly.rental_freq = Some("Week".to_string());
    let listings = vec![
        listing("yearly", RouteCategory::Rent, 120_000, 2, "JLT"),
        weekly,
    ];
    let view = engine.derive(&listings, RouteCategory::Rent, &FilterState::default());
    let list: ListViewAdapter<CardSlot> = ListViewAdapter::new();

    let cards = list.render(&view, &SelectionState::Selected(ListingId::new("weekly")));

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].position, 0);
    assert_eq!(cards[0].price_display, "120,000 AED / Year");
    assert_eq!(cards[0].badge, "FOR RENT");
    assert!(!cards[0].selected);
    assert_eq!(cards[1].price_display, "4,500 AED / Week");
    assert!(cards[1].selected);
}

#[test]
fn distress_and_uk_cards_carry_their_badges() {
    let engine = FilterEngine::default();
    let mut distress = listing("deal", RouteCategory::Sale, 1_700_000, 2, "Downtown Dubai");
    distress.is_distress = true;
    distress.original_price = Some(2_100_000);
    let mut uk = listing("uk", RouteCategory::UkInvestment, 185_000, 1, "Leeds, United Kingdom");
    uk.currency = Currency::Gbp;
    let listings = vec![distress, uk];
    let list: ListViewAdapter<CardSlot> = ListViewAdapter::new();

    let sale = engine.derive(&listings, RouteCategory::Sale, &FilterState::default());
    let cards = list.render(&sale, &SelectionState::Unselected);
    assert_eq!(cards[0].badge, "DISTRESS DEAL");
    assert_eq!(cards[0].original_price_display.as_deref(), Some("2,100,000"));

    let uk_view = engine.derive(&listings, RouteCategory::UkInvestment, &FilterState::default());
    let cards = list.render(&uk_view, &SelectionState::Unselected);
    assert_eq!(cards[0].badge, "UK INVESTMENT");
    assert_eq!(cards[0].price_display, "185,000 £");
}

#[test]
fn cards_surface_featured_flag_and_status() {
    let engine = FilterEngine::default();
    let mut featured = listing("featured", RouteCategory::OffPlan, 2_400_000, 2, "Dubai Hills");
    featured.is_featured = true;
    featured.status = "Handover 2027".to_string();
    let mut plain = listing("plain", RouteCategory::OffPlan, 900_000, 1, "Arjan");
    plain.status = "  ".to_string();
    let listings = vec![featured, plain];
    let list: ListViewAdapter<CardSlot> = ListViewAdapter::new();

    let view = engine.derive(&listings, RouteCategory::OffPlan, &FilterState::default());
    let cards = list.render(&view, &SelectionState::Unselected);

    let featured = cards
        .iter()
        .find(|card| card.listing_id.as_str() == "featured")
        .expect("featured card");
    assert!(featured.featured);
    assert_eq!(featured.status.as_deref(), Some("Handover 2027"));

    let plain = cards
        .iter()
        .find(|card| card.listing_id.as_str() == "plain")
        .expect("plain card");
    assert!(!plain.featured);
    assert_eq!(plain.status, None);
}

#[test]
fn map_and_list_show_the_same_subset() {
    let mut session =
        DiscoverySession::new(FilterEngine::default(), RouteCategory::Sale, market());
    session.set_filter(FilterPatch::min_price(1_000_000));
    session.select_by_id(ListingId::new("marina-2br"));

    let frame = session.render();
    let card_ids: Vec<_> = frame.cards.iter().map(|card| card.listing_id.clone()).collect();
    for marker in &frame.map.markers {
        assert!(card_ids.contains(&marker.listing_id));
    }
    let selected_card = frame
        .cards
        .iter()
        .find(|card| card.selected)
        .map(|card| card.listing_id.clone());
    let elevated_marker = frame.map.elevated().next().map(|marker| marker.listing_id.clone());
    assert_eq!(selected_card, elevated_marker);
}
