use serde::Deserialize;

/// Logging and trace export settings shared by every service binary.
#[derive(Debug, Deserialize, Clone)]
pub struct TelemetrySettings {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    /// Fallback filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// OTLP gRPC collector, e.g. `http://tempo:4317`. Export is disabled when unset.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
    /// Emit flattened JSON lines instead of human-readable output.
    #[serde(default = "default_json")]
    pub json: bool,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            log_level: default_log_level(),
            otlp_endpoint: None,
            json: default_json(),
        }
    }
}

fn default_service_name() -> String {
    "billing-frontend".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_json() -> bool {
    true
}
