use axum_extra::extract::CookieJar;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

/// What the auth lookup gets to see of an inbound request.
#[derive(Default)]
pub struct RequestContext {
    access_token: Option<Secret<String>>,
}

impl RequestContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_access_token(token: impl Into<String>) -> Self {
        Self {
            access_token: Some(Secret::new(token.into())),
        }
    }

    /// Reads the access token from `cookie_name`. Blank cookies count as absent.
    pub fn from_cookies(jar: &CookieJar, cookie_name: &str) -> Self {
        match jar.get(cookie_name).map(|cookie| cookie.value().trim()) {
            Some(token) if !token.is_empty() => Self::with_access_token(token),
            _ => Self::anonymous(),
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token
            .as_ref()
            .map(|token| token.expose_secret().as_str())
    }
}

/// Authenticated visitor, as confirmed by the auth service for this request.
pub struct Session {
    pub user_id: String,
    pub email: Option<String>,
    access_token: Secret<String>,
}

impl Session {
    pub fn new(user_id: impl Into<String>, email: Option<String>, access_token: Secret<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email,
            access_token,
        }
    }

    pub fn access_token(&self) -> &str {
        self.access_token.expose_secret()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Body of the auth service's current-user endpoint.
#[derive(Debug, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}
