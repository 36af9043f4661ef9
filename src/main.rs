//! Training Portal
//!
//! Back-office entry point: checks the backend, optionally signs in an admin
//! and logs the dashboard summary.

use anyhow::Context;
use chrono::Utc;
use tracing::{error, info, warn};

use training_portal::{
    config::Settings,
    models::RegistrationField,
    pricing,
    services::{Credentials, ServiceFactory},
    utils::{helpers::format_timestamp, logging},
    view::{get_page, SortDirection, ViewState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load settings")?;
    settings.validate()?;

    // Initialize logging; the guard must outlive every log call
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", training_portal::info());

    let services = ServiceFactory::new(settings.clone())?;

    let health = services.health_check().await;
    if !health.is_healthy() {
        warn!(?health, "Backend is not reachable");
    }

    for plan in pricing::plans() {
        info!(
            plan = plan.name,
            courses = plan.course_count,
            price = %plan.price.display_with(&settings.pricing.currency_prefix),
            discount_percent = plan.discount_percent,
            "Pricing plan"
        );
    }

    let (email, password) = match (
        std::env::var("PORTAL_ADMIN_EMAIL"),
        std::env::var("PORTAL_ADMIN_PASSWORD"),
    ) {
        (Ok(email), Ok(password)) => (email, password),
        _ => {
            info!("No admin credentials configured, skipping dashboard summary");
            return Ok(());
        }
    };

    let session = match services
        .auth_service
        .login(Credentials { email, password })
        .await
    {
        Ok(session) => session,
        Err(e) => {
            error!(error = %e, severity = %e.severity(), "Admin login failed");
            return Err(e.into());
        }
    };

    let snapshot = services.admin_service.dashboard(&session).await?;
    for (kind, failure) in &snapshot.failures {
        let notice = services.notification_service.load_failure(*kind, failure);
        warn!(table = kind.table(), notice = %notice.message, "Dashboard table unavailable");
    }

    let stats = snapshot.stats(Utc::now().date_naive());
    info!(
        courses = stats.total_courses,
        lectures = stats.total_lectures,
        publications = stats.total_publications,
        registrations = stats.total_registrations,
        pending = stats.pending_registrations,
        subscribers = stats.total_newsletter_subscribers,
        upcoming_lectures = stats.upcoming_lectures,
        "Dashboard summary"
    );

    let newest_first = ViewState::sorted_by(RegistrationField::CreatedAt, SortDirection::Descending);
    let page = get_page(
        snapshot.registrations.records(),
        &newest_first,
        services.admin_service.page_size(),
    );
    info!("Registrations ({})", page.info());
    for registration in &page.items {
        info!(
            name = %registration.name,
            email = %registration.email,
            status = %registration.status,
            courses = %registration.course_titles(snapshot.courses.records()),
            created_at = %format_timestamp(registration.created_at),
            "Registration"
        );
    }

    if let Err(e) = services.auth_service.logout(&session).await {
        warn!(error = %e, "Logout failed");
    }

    info!("{} finished.", training_portal::NAME);
    Ok(())
}
