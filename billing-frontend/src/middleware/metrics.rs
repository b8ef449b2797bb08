use crate::services::metrics::metrics;
use axum::{extract::{MatchedPath, Request}, middleware::Next, response::Response};
use std::time::Instant;

pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    // Route template, so label cardinality stays bounded
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(req).await;

    if let Some(m) = metrics() {
        let status = response.status().as_u16().to_string();
        let labels = [method.as_str(), path.as_str(), status.as_str()];

        m.http_requests_total.with_label_values(&labels).inc();
        m.http_request_duration_seconds
            .with_label_values(&labels)
            .observe(start.elapsed().as_secs_f64());
    }

    response
}
