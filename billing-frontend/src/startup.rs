use axum::{middleware::from_fn, routing::get, Router};
use service_core::middleware::request_id::{
    propagate_request_id_layer, request_id_of, set_request_id_layer,
};
use service_core::middleware::security_headers::security_headers_middleware;
use tower_http::trace::TraceLayer;

use crate::handlers::{app::health_check, billing::billing_page, metrics::metrics};
use crate::middleware::metrics::metrics_middleware;
use crate::pages::billing::BILLING_PATH;
use crate::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .route(BILLING_PATH, get(billing_page))
        .route("/dashboard/billing", get(billing_page))
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(metrics_middleware))
        .layer(propagate_request_id_layer())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    request_id = %request_id_of(request),
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Outermost, so the trace span already sees the request id
        .layer(set_request_id_layer())
        .with_state(state)
}
