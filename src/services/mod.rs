//! Services module
//!
//! This module contains business logic services

pub mod admin;
pub mod auth;
pub mod newsletter;
pub mod notification;
pub mod registration;

// Re-export commonly used services
pub use admin::{AdminService, DashboardSnapshot, DashboardStats};
pub use auth::{AuthService, Credentials};
pub use newsletter::NewsletterService;
pub use notification::{AdminAction, Notice, NoticeKind, NotificationService};
pub use registration::{RegistrationReceipt, RegistrationService};

use tracing::error;
use crate::backend::{BackendClient, BackendService};
use crate::config::Settings;
use crate::models::RecordKind;
use crate::utils::errors::{PortalError, Result};
use crate::view::{RecordTable, Sortable};

/// Outcome of listing a table; a failed load is an empty list plus the error
#[derive(Debug)]
pub struct Loaded<R> {
    pub records: Vec<R>,
    pub error: Option<PortalError>,
}

impl<R> Loaded<R> {
    pub fn from_result(kind: RecordKind, result: Result<Vec<R>>) -> Self {
        match result {
            Ok(records) => Self { records, error: None },
            Err(e) => {
                error!(table = kind.table(), error = %e, "Failed to load records, showing an empty list");
                Self {
                    records: Vec::new(),
                    error: Some(e),
                }
            }
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

impl<R: Sortable> Loaded<R> {
    /// Move the records into `table` and hand back the load error, if any
    pub fn fill(self, table: &mut RecordTable<R>) -> Option<PortalError> {
        table.replace(self.records);
        self.error
    }
}

/// Service factory for creating and managing all services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub backend: BackendService,
    pub registration_service: RegistrationService,
    pub newsletter_service: NewsletterService,
    pub admin_service: AdminService,
    pub auth_service: AuthService,
    pub notification_service: NotificationService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services sharing one backend client
    pub fn new(settings: Settings) -> Result<Self> {
        let client = BackendClient::new(&settings.backend)?;
        let backend = BackendService::new(client.clone());

        Ok(Self {
            registration_service: RegistrationService::new(backend.clone(), settings.clone()),
            newsletter_service: NewsletterService::new(backend.clone(), settings.clone()),
            admin_service: AdminService::new(backend.clone(), &settings)?,
            auth_service: AuthService::new(client, &settings),
            notification_service: NotificationService::new(&settings),
            backend,
        })
    }

    /// Health check for all services
    pub async fn health_check(&self) -> ServiceHealthStatus {
        ServiceHealthStatus {
            backend_reachable: self.backend.client.health_check().await,
            registration_open: self.registration_service.is_open(),
            newsletter_enabled: self.newsletter_service.is_enabled(),
        }
    }
}

/// Service health status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceHealthStatus {
    pub backend_reachable: bool,
    pub registration_open: bool,
    pub newsletter_enabled: bool,
}

impl ServiceHealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.backend_reachable
    }
}
