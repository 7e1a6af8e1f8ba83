use super::common::*;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::discovery::catalog::{InMemoryCatalog, ListingSource, ListingSourceError};
use crate::discovery::domain::{Listing, ListingId, RouteCategory};
use crate::discovery::engine::FilterEngine;
use crate::discovery::filters::FilterPatch;
use crate::discovery::router::{discovery_router, run_search, SearchRequest};

struct OfflineSource;

impl ListingSource for OfflineSource {
    fn listings(&self, _route: RouteCategory) -> Result<Vec<Listing>, ListingSourceError> {
        Err(ListingSourceError::Unavailable("catalog offline".to_string()))
    }
}

fn catalog() -> Arc<InMemoryCatalog> {
    Arc::new(InMemoryCatalog::new(market()).expect("unique ids"))
}

async fn post_search<S: ListingSource + 'static>(source: Arc<S>, body: Value) -> (StatusCode, Value) {
    let app = discovery_router(source, FilterEngine::default());
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/listings/search")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds");

    let response = app.oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    let payload = serde_json::from_slice(&bytes).expect("json body");
    (status, payload)
}

#[test]
fn run_search_reports_scroll_target_for_mounted_selection() {
    let response = run_search(
        catalog().as_ref(),
        FilterEngine::default(),
        SearchRequest {
            route: RouteCategory::Sale,
            search: None,
            filters: FilterPatch::min_price(1_000_000),
            selected_id: Some(ListingId::new("bb-penthouse")),
        },
    )
    .expect("search succeeds");

    assert_eq!(response.frame.result_count, 3);
    assert_eq!(response.scroll_target, Some(2));
}

#[test]
fn run_search_omits_scroll_target_for_stale_selection() {
    let response = run_search(
        catalog().as_ref(),
        FilterEngine::default(),
        SearchRequest {
            route: RouteCategory::Rent,
            search: None,
            filters: FilterPatch::default(),
            selected_id: Some(ListingId::new("palm-villa")),
        },
    )
    .expect("search succeeds");

    assert_eq!(response.scroll_target, None);
    assert!(response.frame.cards.iter().all(|card| !card.selected));
}

#[tokio::test]
async fn search_endpoint_renders_uk_route() {
    let (status, body) = post_search(
        catalog(),
        json!({ "route": "uk-investment", "filters": { "max_price": "200000" } }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "UK Investment Opportunities");
    assert_eq!(body["result_count"], 1);
    assert_eq!(body["cards"][0]["listing_id"], "leeds-uk");
    assert_eq!(body["map"]["viewport"]["zoom"], 6);
    assert_eq!(body["ordering"], "stable");
}

#[tokio::test]
async fn search_endpoint_normalizes_numeric_and_odd_filter_values() {
    let (status, body) = post_search(
        catalog(),
        json!({
            "route": "sale",
            "filters": { "min_price": 3000000, "beds": 4, "max_price": true }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result_count"], 1);
    assert_eq!(body["cards"][0]["listing_id"], "bb-penthouse");
    assert_eq!(body["has_active_filters"], true);
}

#[tokio::test]
async fn search_endpoint_accepts_route_aliases() {
    let (status, body) = post_search(catalog(), json!({ "route": "buy" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["route"], "sale");
    assert_eq!(body["result_count"], 4);
}

#[tokio::test]
async fn search_endpoint_reports_empty_state() {
    let (status, body) = post_search(
        catalog(),
        json!({ "route": "sale", "search": "Atlantis", "filters": { "beds": "3" } }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result_count"], 0);
    assert_eq!(body["title"], "Properties in Atlantis");
    assert_eq!(
        body["empty_state"],
        json!({ "kind": "filters_too_strict", "search_hint": true })
    );
}

#[tokio::test]
async fn search_endpoint_marks_off_plan_as_shuffled() {
    let (status, body) = post_search(catalog(), json!({ "route": "off-plan" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ordering"], "shuffle_on_read");
    let mut ids: Vec<String> = body["cards"]
        .as_array()
        .expect("cards array")
        .iter()
        .map(|card| card["listing_id"].as_str().expect("id").to_string())
        .collect();
    ids.sort();
    assert_eq!(ids, vec!["creek-offplan", "hills-offplan", "jvt-offplan"]);
}

#[tokio::test]
async fn search_endpoint_returns_unavailable_when_source_fails() {
    let (status, body) = post_search(Arc::new(OfflineSource), json!({ "route": "rent" })).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("catalog offline"));
}
