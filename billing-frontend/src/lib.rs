pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod pages;
pub mod services;
pub mod startup;

use config::{BillingSettings, SessionSettings};
use services::backend::BackendClient;
use std::sync::Arc;

/// Shared application state. The backend client is injected here and handed
/// to the page renderer on every request.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn BackendClient>,
    pub session: Arc<SessionSettings>,
    pub billing: Arc<BillingSettings>,
}

impl AppState {
    pub fn new(
        backend: Arc<dyn BackendClient>,
        session: SessionSettings,
        billing: BillingSettings,
    ) -> Self {
        Self {
            backend,
            session: Arc::new(session),
            billing: Arc::new(billing),
        }
    }
}
