use secrecy::Secret;
use serde::Deserialize;
use service_core::config::TelemetrySettings;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub backend: BackendSettings,
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub billing: BillingSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

#[derive(Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Clone)]
pub struct BackendSettings {
    /// Project URL of the managed auth/data service, without trailing slash.
    pub url: String,
    /// Public (anon) API key sent as `apikey` on every call.
    pub anon_key: Secret<String>,
}

#[derive(Deserialize, Clone)]
pub struct SessionSettings {
    /// Cookie carrying the visitor's access token.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
        }
    }
}

fn default_cookie_name() -> String {
    "sb-access-token".to_string()
}

#[derive(Deserialize, Clone)]
pub struct BillingSettings {
    /// Form action of the manage-subscription control. The provider-hosted
    /// portal flow lives behind this path.
    #[serde(default = "default_manage_subscription_action")]
    pub manage_subscription_action: String,
}

impl Default for BillingSettings {
    fn default() -> Self {
        Self {
            manage_subscription_action: default_manage_subscription_action(),
        }
    }
}

fn default_manage_subscription_action() -> String {
    "/api/billing/portal".to_string()
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;

    // Works from the workspace root and from inside the crate directory
    let configuration_directory = if base_path.ends_with("billing-frontend") {
        base_path.join("config")
    } else {
        base_path.join("billing-frontend").join("config")
    };

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
