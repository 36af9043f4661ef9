//! Password sign-in, token refresh and sign-out against the auth API

use chrono::{DateTime, Duration, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info};
use uuid::Uuid;
use crate::utils::errors::{BackendError, BackendResult};
use super::client::{decode, BackendClient};

/// User attached to a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: Value,
}

impl AuthUser {
    /// Role stored in the user's metadata
    pub fn role(&self) -> Option<&str> {
        self.user_metadata.get("role").and_then(Value::as_str)
    }
}

/// Signed-in session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
    pub user: AuthUser,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Whether the token expires within `margin` of `now`
    pub fn expires_within(&self, now: DateTime<Utc>, margin: Duration) -> bool {
        now + margin >= self.expires_at
    }

    pub fn email(&self) -> Option<&str> {
        self.user.email.as_deref()
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    expires_in: i64,
    #[serde(default)]
    expires_at: Option<i64>,
    user: AuthUser,
}

impl TokenResponse {
    fn into_session(self, now: DateTime<Utc>) -> Session {
        let expires_at = self
            .expires_at
            .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0))
            .unwrap_or_else(|| now + Duration::seconds(self.expires_in));

        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        }
    }
}

/// Bad credentials come back as HTTP 400 `invalid_grant`
fn credentials_error(error: BackendError) -> BackendError {
    match error {
        BackendError::Rejected { status: 400, message, .. } => BackendError::Unauthorized(message),
        other => other,
    }
}

impl BackendClient {
    /// `POST /auth/v1/token?grant_type=password`
    ///
    /// On success subsequent data requests carry the session's access token.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> BackendResult<Session> {
        debug!(email = %email, "Signing in with password");
        let session = self
            .token_request("password", json!({ "email": email, "password": password }))
            .await?;
        self.set_access_token(Some(session.access_token.clone()));
        info!(user_id = %session.user.id, "Signed in");
        Ok(session)
    }

    /// `POST /auth/v1/token?grant_type=refresh_token`
    pub async fn refresh_session(&self, refresh_token: &str) -> BackendResult<Session> {
        let session = self
            .token_request("refresh_token", json!({ "refresh_token": refresh_token }))
            .await?;
        self.set_access_token(Some(session.access_token.clone()));
        debug!(user_id = %session.user.id, expires_at = %session.expires_at, "Session refreshed");
        Ok(session)
    }

    /// `POST /auth/v1/logout`; the local token is dropped even if the call fails
    pub async fn sign_out(&self, session: &Session) -> BackendResult<()> {
        self.set_access_token(None);
        let url = self.auth_url("logout")?;
        let request = self.request_with_token(Method::POST, url, &session.access_token);
        self.send(request, "logout", "auth").await?;
        info!(user_id = %session.user.id, "Signed out");
        Ok(())
    }

    async fn token_request(&self, grant_type: &str, body: Value) -> BackendResult<Session> {
        let mut url = self.auth_url("token")?;
        url.query_pairs_mut().append_pair("grant_type", grant_type);

        let request = self
            .request_with_token(Method::POST, url, self.anon_key())
            .json(&body);
        let response = self
            .send(request, "token", "auth")
            .await
            .map_err(credentials_error)?;
        let token: TokenResponse = decode(response).await?;
        Ok(token.into_session(Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(expires_at: Option<i64>) -> TokenResponse {
        serde_json::from_value(json!({
            "access_token": "access",
            "token_type": "bearer",
            "expires_in": 3600,
            "expires_at": expires_at,
            "refresh_token": "refresh",
            "user": {
                "id": "7f1c6a52-1a6e-4a8e-9b8f-2f0b5a1d3c44",
                "email": "admin@example.com",
                "user_metadata": { "role": "admin" }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_expiry_from_expires_in() {
        let now = Utc::now();
        let session = token(None).into_session(now);
        assert_eq!(session.expires_at, now + Duration::seconds(3600));
        assert!(!session.is_expired(now));
        assert!(session.expires_within(now, Duration::seconds(3600)));
        assert_eq!(session.user.role(), Some("admin"));
    }

    #[test]
    fn test_expiry_prefers_absolute_timestamp() {
        let session = token(Some(1_700_000_000)).into_session(Utc::now());
        assert_eq!(session.expires_at.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_missing_metadata_has_no_role() {
        let user: AuthUser = serde_json::from_value(json!({
            "id": "7f1c6a52-1a6e-4a8e-9b8f-2f0b5a1d3c44"
        }))
        .unwrap();
        assert_eq!(user.role(), None);
        assert_eq!(user.email, None);
    }

    #[test]
    fn test_invalid_grant_is_unauthorized() {
        let error = BackendError::Rejected {
            status: 400,
            code: Some("invalid_grant".to_string()),
            message: "Invalid login credentials".to_string(),
        };
        assert_eq!(
            credentials_error(error),
            BackendError::Unauthorized("Invalid login credentials".to_string())
        );
    }
}
