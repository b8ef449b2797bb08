//! Billing page: session check, profile and team reads, tier-dependent view.

use crate::models::{Profile, RequestContext, TeamMembership};
use crate::services::backend::BackendClient;
use crate::services::metrics;

pub const LOGIN_PATH: &str = "/login";
pub const PRICING_PATH: &str = "/pricing";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const BILLING_PATH: &str = "/billing";

/// Paid tier, decided solely by the profile's subscription flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    Pro,
    Free,
}

impl Plan {
    pub fn from_subscription(has_subscription: bool) -> Self {
        if has_subscription {
            Plan::Pro
        } else {
            Plan::Free
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Plan::Pro => "Pro",
            Plan::Free => "Free",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Plan::Pro => "Pro Plan",
            Plan::Free => "Free Plan",
        }
    }

    pub fn status(self) -> &'static str {
        match self {
            Plan::Pro => "Active",
            Plan::Free => "No active subscription",
        }
    }

    pub fn generation_limit(self) -> u64 {
        match self {
            Plan::Pro => 1000,
            Plan::Free => 100,
        }
    }

    pub fn storage_limit_gb(self) -> u64 {
        match self {
            Plan::Pro => 10,
            Plan::Free => 1,
        }
    }
}

/// One row of the usage panel.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageRow {
    pub label: &'static str,
    pub summary: String,
    pub percent_used: u64,
}

impl UsageRow {
    fn new(label: &'static str, used: u64, limit: u64, summary: String) -> Self {
        let percent_used = if limit == 0 {
            0
        } else {
            (used.saturating_mul(100) / limit).min(100)
        };
        Self {
            label,
            summary,
            percent_used,
        }
    }
}

/// Everything the billing template needs, derived once per request.
#[derive(Debug, Clone)]
pub struct BillingView {
    pub profile: Option<Profile>,
    pub memberships: Vec<TeamMembership>,
    pub has_subscription: bool,
    pub plan: Plan,
}

impl BillingView {
    pub fn new(profile: Option<Profile>, memberships: Vec<TeamMembership>) -> Self {
        let has_subscription = profile.as_ref().is_some_and(Profile::is_subscribed);
        Self {
            profile,
            memberships,
            has_subscription,
            plan: Plan::from_subscription(has_subscription),
        }
    }

    /// Usage is not metered yet: current usage is always zero.
    pub fn usage(&self) -> Vec<UsageRow> {
        let generations_used = 0;
        let storage_used_mb = 0;

        vec![
            UsageRow::new(
                "AI Generations",
                generations_used,
                self.plan.generation_limit(),
                format!("{} / {}", generations_used, self.plan.generation_limit()),
            ),
            UsageRow::new(
                "Storage",
                storage_used_mb,
                self.plan.storage_limit_gb() * 1024,
                format!(
                    "{} MB / {} GB",
                    storage_used_mb,
                    self.plan.storage_limit_gb()
                ),
            ),
        ]
    }
}

pub enum BillingOutcome {
    Redirect(&'static str),
    Render(BillingView),
}

/// Resolve the session, load the visitor's data and build the view.
///
/// Only a missing session changes control flow. Failed reads are logged,
/// counted and rendered as absent data.
pub async fn render_billing(backend: &dyn BackendClient, ctx: &RequestContext) -> BillingOutcome {
    let session = match backend.get_session(ctx).await {
        Ok(Some(session)) => session,
        Ok(None) => {
            metrics::record_page_view("redirect");
            return BillingOutcome::Redirect(LOGIN_PATH);
        }
        Err(e) => {
            tracing::warn!(error = %e, "Session lookup failed, treating visitor as signed out");
            metrics::record_fetch_failure("session");
            metrics::record_page_view("redirect");
            return BillingOutcome::Redirect(LOGIN_PATH);
        }
    };

    let profile = backend.get_profile(&session).await.unwrap_or_else(|e| {
        tracing::warn!(user_id = %session.user_id, error = %e, "Profile fetch failed");
        metrics::record_fetch_failure("profile");
        None
    });

    let memberships = backend.get_memberships(&session).await.unwrap_or_else(|e| {
        tracing::warn!(user_id = %session.user_id, error = %e, "Membership fetch failed");
        metrics::record_fetch_failure("memberships");
        Vec::new()
    });

    let view = BillingView::new(profile, memberships);
    metrics::record_page_view(if view.has_subscription { "pro" } else { "free" });

    tracing::info!(
        user_id = %session.user_id,
        plan = view.plan.label(),
        teams = view.memberships.len(),
        "Rendering billing page"
    );

    BillingOutcome::Render(view)
}
