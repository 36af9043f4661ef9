//! Authentication service implementation
//!
//! Admin password login throttled per e-mail, session refresh and logout.

use chrono::{Duration, Utc};
use tracing::{debug, info, warn};
use crate::backend::{BackendClient, Session};
use crate::config::Settings;
use crate::middleware::{AuthMiddleware, RateLimitConfig, RateLimitMiddleware};
use crate::models::Validate;
use crate::utils::errors::{BackendError, PortalError, Result, ValidationError};
use crate::utils::helpers::is_valid_email;

/// Refresh sessions that expire within this many seconds
const REFRESH_MARGIN_SECONDS: i64 = 60;

/// Login credentials as typed on the admin login form
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Validate for Credentials {
    fn validated(self) -> std::result::Result<Self, ValidationError> {
        let email = self.email.trim().to_lowercase();
        if email.is_empty() {
            return Err(ValidationError::MissingField("email"));
        }
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password.is_empty() {
            return Err(ValidationError::MissingField("password"));
        }
        Ok(Self {
            email,
            password: self.password,
        })
    }
}

#[derive(Debug, Clone)]
pub struct AuthService {
    client: BackendClient,
    limiter: RateLimitMiddleware,
    guard: AuthMiddleware,
}

impl AuthService {
    pub fn new(client: BackendClient, settings: &Settings) -> Self {
        Self {
            client,
            limiter: RateLimitMiddleware::new(RateLimitConfig::from(&settings.admin)),
            guard: AuthMiddleware::from_config(&settings.admin),
        }
    }

    pub fn limiter(&self) -> &RateLimitMiddleware {
        &self.limiter
    }

    /// Sign in an admin
    ///
    /// Each attempt counts against the e-mail's login window; a successful
    /// login clears it. Sessions without the required role are signed out
    /// again and rejected.
    pub async fn login(&self, credentials: Credentials) -> Result<Session> {
        let credentials = credentials.validated()?;
        self.limiter.check_rate_limit(&credentials.email)?;

        let session = match self
            .client
            .sign_in_with_password(&credentials.email, &credentials.password)
            .await
        {
            Ok(session) => session,
            Err(BackendError::Unauthorized(message)) => {
                warn!(email = %credentials.email, "Admin login rejected");
                return Err(PortalError::Authentication(message));
            }
            Err(e) => return Err(e.into()),
        };

        self.limiter.clear(&credentials.email);

        if let Err(e) = self.guard.check_role(&session) {
            if let Err(sign_out_error) = self.client.sign_out(&session).await {
                debug!(error = %sign_out_error, "Sign-out after role rejection failed");
            }
            return Err(e);
        }

        info!(email = %credentials.email, "Admin logged in");
        Ok(session)
    }

    /// Refresh the session if it is about to expire
    pub async fn ensure_fresh(&self, session: Session) -> Result<Session> {
        if session.expires_within(Utc::now(), Duration::seconds(REFRESH_MARGIN_SECONDS)) {
            self.refresh(&session).await
        } else {
            Ok(session)
        }
    }

    pub async fn refresh(&self, session: &Session) -> Result<Session> {
        match self.client.refresh_session(&session.refresh_token).await {
            Ok(session) => Ok(session),
            Err(BackendError::Unauthorized(message)) => Err(PortalError::Authentication(message)),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn logout(&self, session: &Session) -> Result<()> {
        self.client.sign_out(session).await?;
        info!(email = session.email().unwrap_or("unknown"), "Admin logged out");
        Ok(())
    }
}
