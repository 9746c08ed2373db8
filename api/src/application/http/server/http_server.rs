use std::sync::{Arc, OnceLock};

use axum::{
    Router,
    http::{
        HeaderValue, Method,
        header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, LOCATION},
    },
    routing::get,
};
use axum_prometheus::{PrometheusMetricLayer, metrics_exporter_prometheus::PrometheusHandle};
use quill_core::{application::create_service, domain::common::QuillConfig};
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::{debug, info_span, warn};

use crate::application::http::{
    file::router::file_routes, health::health_routes, server::app_state::AppState,
};
use crate::args::Args;

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let quill_config = QuillConfig::from(args.as_ref().clone());
    let service = create_service(quill_config).await?;

    Ok(AppState::new(args, service))
}

/// The Prometheus recorder is process-global and can only be installed once.
fn metrics() -> (PrometheusMetricLayer<'static>, PrometheusHandle) {
    static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

    let handle = HANDLE
        .get_or_init(|| PrometheusMetricLayer::pair().1)
        .clone();

    (PrometheusMetricLayer::new(), handle)
}

/// Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid allowed origin {}: {}", origin, e);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            CONTENT_LENGTH,
            ACCEPT,
            LOCATION,
        ])
        .expose_headers([LOCATION])
        .allow_credentials(true);

    let (prometheus_layer, metric_handle) = metrics();

    let root_path = state.args.server.root_path.clone();
    let url_prefix = state.args.uploads.url_prefix.clone();
    let uploads = ServeDir::new(&state.args.uploads.dir);

    let router = axum::Router::new()
        .merge(file_routes(state.clone()))
        .merge(health_routes(&root_path))
        .nest_service(&url_prefix, uploads)
        .route(
            &format!("{}/metrics", root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .with_state(state);

    Ok(router)
}
