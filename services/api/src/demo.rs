use crate::infra::{load_catalog, parse_route};
use clap::Args;
use property_discovery::config::DEFAULT_UK_MARKER;
use property_discovery::discovery::{
    CardRegion, DiscoveryFrame, DiscoverySession, EmptyState, FilterEngine, FilterPatch,
    ListingId, ListingSource, MarkerStyle, OrderingPolicy, RouteCategory, ScrollOutcome,
};
use property_discovery::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
    /// Route category: sale, rent, off-plan or uk-investment
    #[arg(long, value_parser = parse_route)]
    pub(crate) route: RouteCategory,
    /// Location search term matched against location, title and description
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Minimum price
    #[arg(long)]
    pub(crate) min_price: Option<String>,
    /// Maximum price
    #[arg(long)]
    pub(crate) max_price: Option<String>,
    /// Bedrooms: any, an exact count, or 5+
    #[arg(long)]
    pub(crate) beds: Option<String>,
    /// Property type token matched against titles (villa, apartment, ...)
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Listing id to highlight on both views
    #[arg(long)]
    pub(crate) select: Option<String>,
    /// Listing CSV export (defaults to the bundled sample catalog)
    #[arg(long)]
    pub(crate) listings_csv: Option<PathBuf>,
    /// Substring marking UK-market locations
    #[arg(long, default_value = DEFAULT_UK_MARKER)]
    pub(crate) uk_marker: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Listing CSV export (defaults to the bundled sample catalog)
    #[arg(long)]
    pub(crate) listings_csv: Option<PathBuf>,
}

pub(crate) fn run_search_command(args: SearchArgs) -> Result<(), AppError> {
    let SearchArgs {
        route,
        search,
        min_price,
        max_price,
        beds,
        category,
        select,
        listings_csv,
        uk_marker,
    } = args;

    let catalog = load_catalog(listings_csv.as_deref())?;
    let listings = catalog.listings(route)?;
    let mut session = DiscoverySession::new(FilterEngine::new(uk_marker), route, listings);
    session.set_search_term(search);
    session.set_filter(FilterPatch {
        min_price,
        max_price,
        beds,
        category,
    });

    let scroll = select.map(|id| session.select_by_id(ListingId::new(id)));
    let frame = session.render();
    render_frame(&frame);

    if let Some(outcome) = scroll {
        match outcome {
            ScrollOutcome::Requested(_) => println!("\nSelected card scrolled into view"),
            ScrollOutcome::NotMounted => {
                println!("\nSelected listing is not in the current results")
            }
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.listings_csv.as_deref())?;
    let route = RouteCategory::Sale;
    let mut session = DiscoverySession::new(
        FilterEngine::default(),
        route,
        catalog.listings(route)?,
    );

    println!("Property discovery demo");
    println!("\n== Initial view");
    render_frame(&session.render());

    let Some(first) = session.derived_view().listings().first().map(|l| l.id.clone()) else {
        println!("\nCatalog has no {route} listings; nothing else to show");
        return Ok(());
    };

    println!("\n== Marker click on {first}");
    session.click_marker(first.clone());
    render_frame(&session.render());

    println!("\n== Contact button on {first} (does not change selection)");
    session.click_card(&first, CardRegion::ContactAction);
    println!(
        "Selection: {}",
        session
            .selection()
            .map(ListingId::to_string)
            .unwrap_or_else(|| "none".to_string())
    );

    println!("\n== Minimum price 5M (selection kept, highlight hidden if filtered out)");
    session.set_filter(FilterPatch::min_price(5_000_000));
    render_frame(&session.render());

    println!("\n== Clear filters");
    session.clear_filters();
    render_frame(&session.render());

    println!("\n== Switch to off-plan (order reshuffles on every recompute)");
    session.set_listings(catalog.listings(RouteCategory::OffPlan)?);
    session.set_route(RouteCategory::OffPlan, None);
    render_frame(&session.render());

    Ok(())
}

pub(crate) fn render_frame(frame: &DiscoveryFrame) {
    println!("{} ({} found)", frame.title, frame.result_count);
    println!("{}", frame.description);
    if frame.ordering == OrderingPolicy::ShuffleOnRead {
        println!("Order: shuffled for freshness");
    }

    let viewport = frame.map.viewport;
    println!(
        "Map centered at {:.4}, {:.4} (zoom {})",
        viewport.center.lat, viewport.center.lng, viewport.zoom
    );
    for marker in &frame.map.markers {
        let flag = if marker.style == MarkerStyle::Elevated {
            " *"
        } else {
            ""
        };
        println!("  [{}] {}{}", marker.label, marker.listing_id, flag);
    }

    match frame.empty_state {
        Some(EmptyState::NoListings) => println!("No properties available."),
        Some(EmptyState::FiltersTooStrict { search_hint }) => {
            println!("No properties match your filters.");
            if search_hint {
                println!("Try checking the spelling or remove the location filter.");
            }
        }
        None => {
            for card in &frame.cards {
                let marker = if card.selected { ">" } else { " " };
                println!(
                    "{} {}. {} | {} | {} | {} bd / {} ba | {}",
                    marker,
                    card.position + 1,
                    card.title,
                    card.location,
                    card.price_display,
                    card.beds,
                    card.baths,
                    card.badge
                );
            }
        }
    }
}
