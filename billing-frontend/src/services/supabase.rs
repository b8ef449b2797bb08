use crate::config::BackendSettings;
use crate::models::session::AuthUser;
use crate::models::{Profile, RequestContext, Session, TeamMembership};
use crate::services::backend::{BackendClient, BackendError};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use service_core::observability::PropagateTraceContext;

const USER_PATH: &str = "/auth/v1/user";
const PROFILES_PATH: &str = "/rest/v1/profiles";
const MEMBERSHIPS_PATH: &str = "/rest/v1/team_memberships";

/// Longest slice of an error body kept for logs.
const BODY_EXCERPT_LEN: usize = 256;

/// HTTP client for a Supabase project: GoTrue for sessions, PostgREST for rows.
///
/// Reads are sent with the visitor's own access token, so row-level security
/// limits them to that visitor's rows.
pub struct SupabaseClient {
    client: Client,
    settings: BackendSettings,
}

impl SupabaseClient {
    pub fn new(settings: BackendSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    pub fn base_url(&self) -> &str {
        self.settings.url.trim_end_matches('/')
    }

    fn get(&self, path: &str, access_token: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url(), path);

        self.client
            .get(url)
            .header("apikey", self.settings.anon_key.expose_secret())
            .bearer_auth(access_token)
            .with_trace_context()
    }

    async fn read_rows<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        session: &Session,
    ) -> Result<Vec<T>, BackendError> {
        let response = self
            .get(path, session.access_token())
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(unexpected_status(status, response).await);
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl BackendClient for SupabaseClient {
    async fn get_session(&self, ctx: &RequestContext) -> Result<Option<Session>, BackendError> {
        let Some(token) = ctx.access_token() else {
            tracing::debug!("No access token on request");
            return Ok(None);
        };

        let response = self.get(USER_PATH, token).send().await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                tracing::debug!(status = %response.status(), "Access token rejected");
                Ok(None)
            }
            status if status.is_success() => {
                let body = response.bytes().await?;
                let user: AuthUser = serde_json::from_slice(&body)?;
                Ok(Some(Session::new(
                    user.id,
                    user.email,
                    Secret::new(token.to_string()),
                )))
            }
            status => Err(unexpected_status(status, response).await),
        }
    }

    #[tracing::instrument(skip(self, session), fields(user_id = %session.user_id))]
    async fn get_profile(&self, session: &Session) -> Result<Option<Profile>, BackendError> {
        let query = [
            ("select", Profile::SELECT.to_string()),
            ("id", format!("eq.{}", session.user_id)),
        ];
        let mut rows: Vec<Profile> = self.read_rows(PROFILES_PATH, &query, session).await?;

        match rows.len() {
            0 => Ok(None),
            1 => Ok(rows.pop()),
            n => Err(BackendError::UnexpectedRows(n)),
        }
    }

    #[tracing::instrument(skip(self, session), fields(user_id = %session.user_id))]
    async fn get_memberships(
        &self,
        session: &Session,
    ) -> Result<Vec<TeamMembership>, BackendError> {
        // No column filter: row-level security scopes memberships to the bearer
        let query = [("select", TeamMembership::SELECT.to_string())];
        self.read_rows(MEMBERSHIPS_PATH, &query, session).await
    }
}

async fn unexpected_status(status: StatusCode, response: reqwest::Response) -> BackendError {
    let body = response.text().await.unwrap_or_default();
    let body = match body.char_indices().nth(BODY_EXCERPT_LEN) {
        Some((cut, _)) => body[..cut].to_string(),
        None => body,
    };
    BackendError::Status { status, body }
}
