//! Registration service implementation
//!
//! Loads the course catalog for the registration page and submits a
//! visitor's draft.

use tracing::{info, warn};
use crate::backend::BackendService;
use crate::config::Settings;
use crate::models::{Course, Record, Registration};
use crate::pricing::PriceQuote;
use crate::state::RegistrationDraft;
use crate::utils::errors::{PortalError, Result};
use crate::utils::logging::log_registration;
use super::Loaded;

/// A stored registration together with the price quoted at submission
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationReceipt {
    pub registration: Registration,
    pub quote: PriceQuote,
}

#[derive(Debug, Clone)]
pub struct RegistrationService {
    backend: BackendService,
    settings: Settings,
}

impl RegistrationService {
    pub fn new(backend: BackendService, settings: Settings) -> Self {
        Self { backend, settings }
    }

    pub fn is_open(&self) -> bool {
        self.settings.features.registration_open
    }

    /// Load the catalog, dropping selected courses that are no longer offered
    ///
    /// A failed load yields an empty catalog.
    pub async fn load_catalog(&self, draft: &mut RegistrationDraft) -> Loaded<Course> {
        let loaded = Loaded::from_result(Course::KIND, self.backend.courses.list().await);
        let offered: Vec<_> = loaded.records.iter().map(|course| course.id).collect();
        if loaded.error.is_none() {
            draft.selection_mut().retain_offered(&offered);
        }
        loaded
    }

    /// Validate and submit the draft
    ///
    /// The draft is cleared only when the backend accepted the registration.
    pub async fn submit(&self, draft: &mut RegistrationDraft) -> Result<RegistrationReceipt> {
        if !self.is_open() {
            return Err(PortalError::PermissionDenied("registrations are closed".to_string()));
        }

        let quote = draft.quote();
        let request = draft.to_request()?;
        let email = request.email.trim().to_lowercase();

        let registration = match self.backend.registrations.create(request).await {
            Ok(registration) => registration,
            Err(e) => {
                warn!(email = %email, error = %e, duplicate = e.is_duplicate(), "Registration failed");
                return Err(e);
            }
        };

        log_registration(
            &registration.email,
            quote.course_count,
            &quote.total.display_with(&self.settings.pricing.currency_prefix),
        );
        info!(registration_id = %registration.id, "Registration stored");
        draft.clear();

        Ok(RegistrationReceipt { registration, quote })
    }
}
