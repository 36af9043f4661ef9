//! Back-office service implementation
//!
//! Loads record tables, applies admin mutations and reloads the affected
//! table once the mutation has resolved. Every operation requires a session
//! accepted by the auth middleware.

use std::num::NonZeroUsize;
use chrono::{NaiveDate, Utc};
use futures::join;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;
use crate::backend::{BackendService, Session};
use crate::config::Settings;
use crate::middleware::AuthMiddleware;
use crate::models::{
    Course, Lecture, NewsletterSubscriber, Publication, Record, RecordKind, Registration,
    RegistrationStatus,
};
use crate::utils::errors::{PortalError, Result};
use crate::utils::logging::log_admin_action;
use crate::view::RecordTable;
use super::Loaded;

/// Headline counts shown on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_courses: usize,
    pub total_lectures: usize,
    pub total_publications: usize,
    pub total_registrations: usize,
    pub total_newsletter_subscribers: usize,
    pub pending_registrations: usize,
    pub upcoming_lectures: usize,
}

/// Everything the dashboard shows, loaded in one go
#[derive(Debug)]
pub struct DashboardSnapshot {
    pub courses: RecordTable<Course>,
    pub lectures: RecordTable<Lecture>,
    pub publications: RecordTable<Publication>,
    pub registrations: RecordTable<Registration>,
    pub subscribers: RecordTable<NewsletterSubscriber>,
    /// Tables that failed to load and are shown empty
    pub failures: Vec<(RecordKind, PortalError)>,
}

impl DashboardSnapshot {
    pub fn stats(&self, today: NaiveDate) -> DashboardStats {
        DashboardStats {
            total_courses: self.courses.len(),
            total_lectures: self.lectures.len(),
            total_publications: self.publications.len(),
            total_registrations: self.registrations.len(),
            total_newsletter_subscribers: self.subscribers.len(),
            pending_registrations: self
                .registrations
                .records()
                .iter()
                .filter(|r| r.status == RegistrationStatus::Pending)
                .count(),
            upcoming_lectures: self
                .lectures
                .records()
                .iter()
                .filter(|l| l.is_upcoming(today))
                .count(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct AdminService {
    backend: BackendService,
    auth: AuthMiddleware,
    page_size: NonZeroUsize,
}

impl AdminService {
    pub fn new(backend: BackendService, settings: &Settings) -> Result<Self> {
        let page_size = NonZeroUsize::new(settings.admin.page_size)
            .ok_or_else(|| PortalError::Config("admin.page_size must be greater than 0".to_string()))?;

        Ok(Self {
            backend,
            auth: AuthMiddleware::from_config(&settings.admin),
            page_size,
        })
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Empty table for `R` with the configured page size
    pub fn table<R: Record>(&self) -> RecordTable<R> {
        RecordTable::new(self.page_size).labeled(R::KIND.table())
    }

    fn authorize(&self, session: &Session) -> Result<()> {
        self.auth.authorize(session, Utc::now())
    }

    /// Replace the table's records with a fresh list
    ///
    /// On failure the table is emptied and the error returned for the caller
    /// to surface.
    pub async fn reload<R: Record>(&self, session: &Session, table: &mut RecordTable<R>) -> Result<()> {
        self.authorize(session)?;
        let loaded = Loaded::from_result(R::KIND, self.backend.repository::<R>().list().await);
        let error = loaded.fill(table);
        match error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub async fn create<R: Record>(
        &self,
        session: &Session,
        table: &mut RecordTable<R>,
        request: R::Create,
    ) -> Result<R> {
        self.authorize(session)?;
        let record = self.backend.repository::<R>().create(request).await?;
        let id = record.id().to_string();
        log_admin_action(session.email(), "create", R::KIND.table(), Some(&id));
        self.reload_after_mutation(table).await;
        Ok(record)
    }

    pub async fn update<R: Record>(
        &self,
        session: &Session,
        table: &mut RecordTable<R>,
        id: Uuid,
        request: R::Update,
    ) -> Result<R> {
        self.authorize(session)?;
        let record = self.backend.repository::<R>().update(id, request).await?;
        log_admin_action(session.email(), "update", R::KIND.table(), Some(&id.to_string()));
        self.reload_after_mutation(table).await;
        Ok(record)
    }

    pub async fn delete<R: Record>(
        &self,
        session: &Session,
        table: &mut RecordTable<R>,
        id: Uuid,
    ) -> Result<()> {
        self.authorize(session)?;
        self.backend.repository::<R>().delete(id).await?;
        log_admin_action(session.email(), "delete", R::KIND.table(), Some(&id.to_string()));
        self.reload_after_mutation(table).await;
        Ok(())
    }

    /// Reload after a mutation that already succeeded; a failed reload leaves
    /// the table empty but does not undo the mutation's success
    async fn reload_after_mutation<R: Record>(&self, table: &mut RecordTable<R>) {
        let loaded = Loaded::from_result(R::KIND, self.backend.repository::<R>().list().await);
        if let Some(e) = loaded.fill(table) {
            warn!(table = R::KIND.table(), error = %e, "Reload after mutation failed");
        }
    }

    /// Load the five dashboard lists concurrently
    pub async fn dashboard(&self, session: &Session) -> Result<DashboardSnapshot> {
        self.authorize(session)?;

        let (courses, lectures, publications, registrations, subscribers) = join!(
            self.backend.courses.list(),
            self.backend.lectures.list(),
            self.backend.publications.list(),
            self.backend.registrations.list(),
            self.backend.subscribers.list(),
        );

        let mut snapshot = DashboardSnapshot {
            courses: self.table(),
            lectures: self.table(),
            publications: self.table(),
            registrations: self.table(),
            subscribers: self.table(),
            failures: Vec::new(),
        };

        let mut failures = Vec::new();
        if let Some(e) = Loaded::from_result(Course::KIND, courses).fill(&mut snapshot.courses) {
            failures.push((Course::KIND, e));
        }
        if let Some(e) = Loaded::from_result(Lecture::KIND, lectures).fill(&mut snapshot.lectures) {
            failures.push((Lecture::KIND, e));
        }
        if let Some(e) = Loaded::from_result(Publication::KIND, publications).fill(&mut snapshot.publications) {
            failures.push((Publication::KIND, e));
        }
        if let Some(e) = Loaded::from_result(Registration::KIND, registrations).fill(&mut snapshot.registrations) {
            failures.push((Registration::KIND, e));
        }
        if let Some(e) = Loaded::from_result(NewsletterSubscriber::KIND, subscribers).fill(&mut snapshot.subscribers) {
            failures.push((NewsletterSubscriber::KIND, e));
        }
        snapshot.failures = failures;

        info!(
            failed_tables = snapshot.failures.len(),
            registrations = snapshot.registrations.len(),
            "Dashboard loaded"
        );
        Ok(snapshot)
    }
}
