use metrics_exporter_prometheus::PrometheusHandle;
use property_discovery::discovery::{
    CatalogError, Currency, InMemoryCatalog, Listing, ListingCsvImporter, ListingId,
    RouteCategory,
};
use property_discovery::error::AppError;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Imports the configured export, or falls back to the bundled sample inventory.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<InMemoryCatalog, AppError> {
    match path {
        Some(path) => ListingCsvImporter::from_path(path).map_err(AppError::from),
        None => sample_catalog().map_err(AppError::from),
    }
}

pub(crate) fn sample_catalog() -> Result<InMemoryCatalog, CatalogError> {
    InMemoryCatalog::new(vec![
        sample(
            "gh-1001",
            RouteCategory::Sale,
            "Marina Gate Apartment",
            "Dubai Marina",
            2_450_000,
            2,
            Some((25.0857, 55.1462)),
        ),
        sample(
            "gh-1002",
            RouteCategory::Sale,
            "Frond Villa with private beach",
            "Palm Jumeirah",
            18_500_000,
            6,
            Some((25.1124, 55.1390)),
        ),
        sample(
            "gh-1003",
            RouteCategory::Sale,
            "Canal Penthouse",
            "Business Bay",
            9_200_000,
            4,
            Some((25.1865, 55.2650)),
        ),
        sample(
            "gh-1004",
            RouteCategory::Sale,
            "Family Townhouse",
            "Arabian Ranches",
            3_100_000,
            3,
            None,
        ),
        sample(
            "gh-2001",
            RouteCategory::Rent,
            "JBR Sea View Apartment",
            "JBR",
            140_000,
            2,
            Some((25.0780, 55.1340)),
        ),
        sample(
            "gh-2002",
            RouteCategory::Rent,
            "Downtown Studio",
            "Downtown Dubai",
            85_000,
            0,
            Some((25.1972, 55.2744)),
        ),
        sample(
            "gh-3001",
            RouteCategory::OffPlan,
            "Hills Park Townhouse",
            "Dubai Hills Estate",
            3_800_000,
            3,
            Some((25.1050, 55.2450)),
        ),
        sample(
            "gh-3002",
            RouteCategory::OffPlan,
            "Creek Waters Apartment",
            "Dubai Creek Harbour",
            1_450_000,
            1,
            Some((25.2000, 55.3450)),
        ),
        sample(
            "gh-3003",
            RouteCategory::OffPlan,
            "JVT Garden Villa",
            "Jumeirah Village Triangle",
            950_000,
            1,
            None,
        ),
        Listing {
            currency: Currency::Gbp,
            ..sample(
                "gh-4001",
                RouteCategory::UkInvestment,
                "Supported Living Portfolio",
                "Manchester, United Kingdom",
                185_000,
                1,
                Some((53.4794, -2.2453)),
            )
        },
        Listing {
            currency: Currency::Gbp,
            ..sample(
                "gh-4002",
                RouteCategory::Sale,
                "Victorian Terrace",
                "Leeds, United Kingdom",
                240_000,
                3,
                Some((53.8008, -1.5491)),
            )
        },
    ])
}

fn sample(
    id: &str,
    category: RouteCategory,
    title: &str,
    location: &str,
    price: u64,
    beds: u32,
    position: Option<(f64, f64)>,
) -> Listing {
    Listing {
        id: ListingId::new(id),
        category,
        title: title.to_string(),
        description: format!("{title} in {location}."),
        location: location.to_string(),
        price,
        currency: Currency::Aed,
        beds,
        baths: beds.max(1),
        lat: position.map(|(lat, _)| lat),
        lng: position.map(|(_, lng)| lng),
        property_type: String::new(),
        status: "Active".to_string(),
        is_featured: false,
        is_distress: false,
        original_price: None,
        rental_freq: None,
    }
}

pub(crate) fn parse_route(raw: &str) -> Result<RouteCategory, String> {
    raw.parse::<RouteCategory>().map_err(|err| err.to_string())
}
