use crate::config::TelemetrySettings;
use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{Resource, runtime, trace as sdktrace};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `settings.log_level`. The OpenTelemetry layer is only
/// attached when an OTLP endpoint is configured, so local runs and tests do
/// not need a collector.
pub fn init_tracing(settings: &TelemetrySettings) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    let telemetry = match settings.otlp_endpoint.as_deref() {
        Some(endpoint) => {
            let tracer = otlp_tracer(&settings.service_name, endpoint).map_err(|e| {
                anyhow::anyhow!(
                    "Failed to initialize OTLP tracer for service '{}' at endpoint '{}': {}",
                    settings.service_name,
                    endpoint,
                    e
                )
            })?;
            Some(tracing_opentelemetry::layer().with_tracer(tracer))
        }
        None => None,
    };

    let json_layer = settings.json.then(|| {
        fmt::layer()
            .with_file(true)
            .with_line_number(true)
            .json()
            .flatten_event(true)
    });
    let text_layer = (!settings.json).then(|| fmt::layer());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(telemetry)
        .with(json_layer)
        .with(text_layer)
        .try_init()?;

    Ok(())
}

/// Flush pending spans to the collector. Safe to call when export is disabled.
pub fn shutdown_tracing() {
    opentelemetry::global::shutdown_tracer_provider();
}

fn otlp_tracer(
    service_name: &str,
    endpoint: &str,
) -> Result<sdktrace::Tracer, opentelemetry::trace::TraceError> {
    let exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(endpoint);

    opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(exporter)
        .with_trace_config(sdktrace::config().with_resource(Resource::new(vec![
            KeyValue::new("service.name", service_name.to_string()),
        ])))
        .install_batch(runtime::Tokio)
}
