use crate::config::BillingSettings;
use crate::models::RequestContext;
use crate::pages::billing::{
    render_billing, BillingOutcome, BillingView, BILLING_PATH, DASHBOARD_PATH, PRICING_PATH,
};
use crate::AppState;
use askama::Template;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

#[derive(Template)]
#[template(path = "billing.html")]
pub struct BillingTemplate {
    pub view: BillingView,
    pub current_page: &'static str,
    pub manage_subscription_action: String,
    pub pricing_path: &'static str,
    pub dashboard_path: &'static str,
    pub billing_path: &'static str,
}

impl BillingTemplate {
    pub fn new(view: BillingView, settings: &BillingSettings) -> Self {
        Self {
            view,
            current_page: "billing",
            manage_subscription_action: settings.manage_subscription_action.clone(),
            pricing_path: PRICING_PATH,
            dashboard_path: DASHBOARD_PATH,
            billing_path: BILLING_PATH,
        }
    }
}

pub async fn billing_page(State(state): State<AppState>, jar: CookieJar) -> Response {
    let ctx = RequestContext::from_cookies(&jar, &state.session.cookie_name);

    match render_billing(state.backend.as_ref(), &ctx).await {
        BillingOutcome::Redirect(target) => Redirect::to(target).into_response(),
        BillingOutcome::Render(view) => BillingTemplate::new(view, &state.billing).into_response(),
    }
}
