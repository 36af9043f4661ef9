//! Authentication middleware
//!
//! Guards back-office operations behind a live session and, optionally, a
//! role stored in the user's metadata.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use crate::backend::Session;
use crate::config::AdminConfig;
use crate::utils::errors::{PortalError, Result};

/// Session guard for admin operations
#[derive(Debug, Clone, Default)]
pub struct AuthMiddleware {
    required_role: Option<String>,
}

impl AuthMiddleware {
    pub fn new(required_role: Option<String>) -> Self {
        Self { required_role }
    }

    pub fn from_config(config: &AdminConfig) -> Self {
        Self::new(config.required_role.clone())
    }

    pub fn required_role(&self) -> Option<&str> {
        self.required_role.as_deref()
    }

    /// Check that the session has the configured role
    pub fn check_role(&self, session: &Session) -> Result<()> {
        let Some(required) = self.required_role.as_deref() else {
            return Ok(());
        };

        if session.user.role() == Some(required) {
            debug!(user_id = %session.user.id, role = required, "Role check passed");
            Ok(())
        } else {
            warn!(
                user_id = %session.user.id,
                role = session.user.role().unwrap_or("none"),
                required = required,
                "Unauthorized admin access attempt"
            );
            Err(PortalError::PermissionDenied(format!("role `{}` required", required)))
        }
    }

    /// Check that the session is live and allowed into the back office
    pub fn authorize(&self, session: &Session, now: DateTime<Utc>) -> Result<()> {
        if session.is_expired(now) {
            warn!(user_id = %session.user.id, "Expired session used for admin access");
            return Err(PortalError::Authentication("session expired".to_string()));
        }
        self.check_role(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::AuthUser;
    use assert_matches::assert_matches;
    use chrono::Duration;
    use serde_json::json;
    use uuid::Uuid;

    fn session(role: Option<&str>, expires_in: i64) -> Session {
        Session {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            expires_at: Utc::now() + Duration::seconds(expires_in),
            user: AuthUser {
                id: Uuid::new_v4(),
                email: Some("admin@example.com".to_string()),
                user_metadata: role.map_or(json!({}), |r| json!({ "role": r })),
            },
        }
    }

    #[test]
    fn test_any_live_session_passes_without_required_role() {
        let guard = AuthMiddleware::default();
        assert!(guard.authorize(&session(None, 3600), Utc::now()).is_ok());
    }

    #[test]
    fn test_role_is_enforced() {
        let guard = AuthMiddleware::new(Some("admin".to_string()));
        assert!(guard.authorize(&session(Some("admin"), 3600), Utc::now()).is_ok());
        assert_matches!(
            guard.authorize(&session(Some("editor"), 3600), Utc::now()),
            Err(PortalError::PermissionDenied(_))
        );
        assert_matches!(
            guard.authorize(&session(None, 3600), Utc::now()),
            Err(PortalError::PermissionDenied(_))
        );
    }

    #[test]
    fn test_expired_session_is_rejected() {
        let guard = AuthMiddleware::default();
        assert_matches!(
            guard.authorize(&session(None, -10), Utc::now()),
            Err(PortalError::Authentication(_))
        );
    }
}
