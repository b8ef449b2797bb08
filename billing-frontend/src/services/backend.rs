use crate::models::{Profile, RequestContext, Session, TeamMembership};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Expected at most one row, got {0}")]
    UnexpectedRows(usize),
}

/// Read-only view of the managed auth/data service.
///
/// Every method may legitimately find nothing; `Err` is reserved for calls
/// that could not be completed.
#[async_trait]
pub trait BackendClient: Send + Sync {
    async fn get_session(&self, ctx: &RequestContext) -> Result<Option<Session>, BackendError>;

    /// The visitor's single profile row.
    async fn get_profile(&self, session: &Session) -> Result<Option<Profile>, BackendError>;

    async fn get_memberships(
        &self,
        session: &Session,
    ) -> Result<Vec<TeamMembership>, BackendError>;
}
