use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use std::sync::OnceLock;

static METRICS: OnceLock<Metrics> = OnceLock::new();

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounterVec,
    pub http_request_duration_seconds: HistogramVec,
    pub billing_page_views_total: IntCounterVec,
    pub backend_fetch_failures_total: IntCounterVec,
}

impl Metrics {
    fn new() -> Self {
        let registry = Registry::new();

        let http_requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests"),
            &["method", "path", "status"],
        )
        .expect("metric can be created");

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request duration in seconds",
            ),
            &["method", "path", "status"],
        )
        .expect("metric can be created");

        let billing_page_views_total = IntCounterVec::new(
            Opts::new(
                "billing_page_views_total",
                "Billing page requests by outcome (redirect, pro, free)",
            ),
            &["outcome"],
        )
        .expect("metric can be created");

        let backend_fetch_failures_total = IntCounterVec::new(
            Opts::new(
                "backend_fetch_failures_total",
                "Backend reads that failed and were rendered as absent data",
            ),
            &["operation"],
        )
        .expect("metric can be created");

        for collector in [
            Box::new(http_requests_total.clone()) as Box<dyn prometheus::core::Collector>,
            Box::new(http_request_duration_seconds.clone()),
            Box::new(billing_page_views_total.clone()),
            Box::new(backend_fetch_failures_total.clone()),
        ] {
            registry
                .register(collector)
                .expect("collector can be registered");
        }

        Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            billing_page_views_total,
            backend_fetch_failures_total,
        }
    }
}

/// Creates the process registry. Repeated calls are no-ops.
pub fn init_metrics() {
    METRICS.get_or_init(Metrics::new);
}

/// `None` until [`init_metrics`] has run; recording is then skipped.
pub fn metrics() -> Option<&'static Metrics> {
    METRICS.get()
}

pub fn record_page_view(outcome: &str) {
    if let Some(m) = metrics() {
        m.billing_page_views_total.with_label_values(&[outcome]).inc();
    }
}

pub fn record_fetch_failure(operation: &str) {
    if let Some(m) = metrics() {
        m.backend_fetch_failures_total
            .with_label_values(&[operation])
            .inc();
    }
}

/// Prometheus text exposition of every registered metric.
pub fn gather() -> anyhow::Result<Option<String>> {
    let Some(m) = metrics() else {
        return Ok(None);
    };

    let mut buffer = Vec::new();
    TextEncoder::new().encode(&m.registry.gather(), &mut buffer)?;
    Ok(Some(String::from_utf8(buffer)?))
}
