use crate::discovery::domain::{Currency, Listing, ListingId, RouteCategory};
use crate::discovery::engine::DerivedView;

pub(crate) fn listing(
    id: &str,
    category: RouteCategory,
    price: u64,
    beds: u32,
    location: &str,
) -> Listing {
    Listing {
        id: ListingId::new(id),
        category,
        title: format!("Listing {id}"),
        description: String::new(),
        location: location.to_string(),
        price,
        currency: Currency::Aed,
        beds,
        baths: beds,
        lat: None,
        lng: None,
        property_type: "Apartment".to_string(),
        status: "Active".to_string(),
        is_featured: false,
        is_distress: false,
        original_price: None,
        rental_freq: None,
    }
}

pub(crate) fn geolocated(mut listing: Listing, lat: f64, lng: f64) -> Listing {
    listing.lat = Some(lat);
    listing.lng = Some(lng);
    listing
}

pub(crate) fn titled(mut listing: Listing, title: &str) -> Listing {
    listing.title = title.to_string();
    listing
}

/// Mixed Dubai and UK inventory across every category.
pub(crate) fn market() -> Vec<Listing> {
    vec![
        geolocated(
            titled(
                listing("marina-2br", RouteCategory::Sale, 2_000_000, 2, "Dubai Marina"),
                "Marina Apartment with sea view",
            ),
            25.0805,
            55.1403,
        ),
        geolocated(
            titled(
                listing("palm-villa", RouteCategory::Sale, 18_500_000, 6, "Palm Jumeirah"),
                "Signature Villa on the fronds",
            ),
            25.1124,
            55.1390,
        ),
        titled(
            listing("jvc-studio", RouteCategory::Sale, 650_000, 0, "Jumeirah Village Circle"),
            "Compact studio apartment",
        ),
        geolocated(
            titled(
                listing("bb-penthouse", RouteCategory::Sale, 9_200_000, 4, "Business Bay"),
                "Canal Penthouse",
            ),
            25.1865,
            55.2650,
        ),
        geolocated(
            listing("jbr-rental", RouteCategory::Rent, 90_000, 2, "JBR"),
            25.0780,
            55.1340,
        ),
        listing("creek-rental", RouteCategory::Rent, 145_000, 3, "Dubai Creek Harbour"),
        geolocated(
            listing("hills-offplan", RouteCategory::OffPlan, 3_800_000, 3, "Dubai Hills Estate"),
            25.1050,
            55.2450,
        ),
        listing("creek-offplan", RouteCategory::OffPlan, 1_450_000, 1, "Dubai Creek Harbour"),
        listing("jvt-offplan", RouteCategory::OffPlan, 950_000, 1, "Jumeirah Village Triangle"),
        geolocated(
            listing(
                "manchester-sale",
                RouteCategory::Sale,
                250_000,
                2,
                "Manchester, United Kingdom",
            ),
            53.4794,
            -2.2453,
        ),
        listing(
            "leeds-uk",
            RouteCategory::UkInvestment,
            185_000,
            1,
            "Leeds, United Kingdom",
        ),
    ]
}

pub(crate) fn sorted_ids(view: &DerivedView) -> Vec<String> {
    let mut ids: Vec<String> = view.ids().into_iter().map(str::to_string).collect();
    ids.sort();
    ids
}
