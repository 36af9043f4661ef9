//! Newsletter subscription service

use tracing::{info, warn};
use crate::backend::BackendService;
use crate::config::Settings;
use crate::models::NewsletterSubscriber;
use crate::state::NewsletterForm;
use crate::utils::errors::{PortalError, Result};

#[derive(Debug, Clone)]
pub struct NewsletterService {
    backend: BackendService,
    settings: Settings,
}

impl NewsletterService {
    pub fn new(backend: BackendService, settings: Settings) -> Self {
        Self { backend, settings }
    }

    pub fn is_enabled(&self) -> bool {
        self.settings.features.newsletter
    }

    /// Subscribe the form's e-mail; the form is cleared on success
    ///
    /// An address that is already subscribed comes back as a duplicate
    /// backend error.
    pub async fn subscribe(&self, form: &mut NewsletterForm) -> Result<NewsletterSubscriber> {
        if !self.is_enabled() {
            return Err(PortalError::PermissionDenied("newsletter is disabled".to_string()));
        }

        let request = form.to_request()?;
        match self.backend.subscribers.create(request).await {
            Ok(subscriber) => {
                info!(subscriber_id = %subscriber.id, "Newsletter subscription stored");
                form.clear();
                Ok(subscriber)
            }
            Err(e) => {
                if e.is_duplicate() {
                    info!(email = %form.email, "E-mail already subscribed");
                } else {
                    warn!(error = %e, "Newsletter subscription failed");
                }
                Err(e)
            }
        }
    }
}
