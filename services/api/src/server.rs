use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState};
use crate::routes::with_discovery_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use property_discovery::config::AppConfig;
use property_discovery::discovery::FilterEngine;
use property_discovery::error::AppError;
use property_discovery::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = Arc::new(load_catalog(config.discovery.listings_csv.as_deref())?);
    let engine = FilterEngine::new(config.discovery.uk_marker.clone());
    info!(listings = catalog.len(), uk_marker = %engine.uk_marker(), "catalog loaded");

    let app = with_discovery_routes(catalog, engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "property discovery service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
