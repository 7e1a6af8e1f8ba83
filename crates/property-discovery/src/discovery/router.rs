use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use super::catalog::{ListingSource, ListingSourceError};
use super::domain::{ListingId, RouteCategory};
use super::engine::FilterEngine;
use super::filters::{FilterPatch, FilterState};
use super::selection::ScrollOutcome;
use super::session::{DiscoveryFrame, DiscoverySession};

/// Search request as issued by the listings page.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub route: RouteCategory,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub filters: FilterPatch,
    #[serde(default)]
    pub selected_id: Option<ListingId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    #[serde(flatten)]
    pub frame: DiscoveryFrame,
    /// Card position the list should scroll to, when the selected card is mounted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_target: Option<usize>,
}

struct DiscoveryState<S> {
    source: Arc<S>,
    engine: FilterEngine,
}

impl<S> Clone for DiscoveryState<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            engine: self.engine.clone(),
        }
    }
}

/// Router builder exposing the listings search endpoint.
pub fn discovery_router<S>(source: Arc<S>, engine: FilterEngine) -> Router
where
    S: ListingSource + 'static,
{
    Router::new()
        .route("/api/v1/listings/search", post(search_handler::<S>))
        .with_state(DiscoveryState { source, engine })
}

/// Runs one request through a fresh session.
pub fn run_search<S: ListingSource + ?Sized>(
    source: &S,
    engine: FilterEngine,
    request: SearchRequest,
) -> Result<SearchResponse, ListingSourceError> {
    let SearchRequest {
        route,
        search,
        filters,
        selected_id,
    } = request;

    let mut state = FilterState::default();
    state.set_search_term(search);
    state.merge(filters);

    let listings = source.listings(route)?;
    let mut session = DiscoverySession::with_filters(engine, route, listings, state);

    let scroll_target = match selected_id {
        Some(id) => match session.select_by_id(id.clone()) {
            ScrollOutcome::Requested(_) => session
                .card_registry()
                .get(&id)
                .map(|slot| slot.position),
            ScrollOutcome::NotMounted => None,
        },
        None => None,
    };

    Ok(SearchResponse {
        frame: session.render(),
        scroll_target,
    })
}

async fn search_handler<S>(
    State(state): State<DiscoveryState<S>>,
    Json(request): Json<SearchRequest>,
) -> Response
where
    S: ListingSource + 'static,
{
    match run_search(state.source.as_ref(), state.engine.clone(), request) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => {
            warn!(error = %err, "listing source failed during search");
            let payload = json!({ "error": err.to_string() });
            (StatusCode::SERVICE_UNAVAILABLE, Json(payload)).into_response()
        }
    }
}
