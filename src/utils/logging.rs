//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the training portal.

use std::path::Path;
use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{PortalError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer when dropped, so the caller must
/// keep it alive for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let path = Path::new(&config.file_path);
    let directory = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| PortalError::Config(format!("Invalid log file path: {}", config.file_path)))?;

    let file_appender = tracing_appender::rolling::daily(directory, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking))
        .try_init()
        .map_err(|e| PortalError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a submitted registration
pub fn log_registration(email: &str, course_count: usize, total: &str) {
    info!(
        email = email,
        course_count = course_count,
        total = total,
        "Registration submitted"
    );
}

/// Log admin actions
pub fn log_admin_action(admin: Option<&str>, action: &str, table: &str, record_id: Option<&str>) {
    warn!(
        admin = admin,
        action = action,
        table = table,
        record_id = record_id,
        "Admin action performed"
    );
}

/// Log backend errors with context
pub fn log_backend_error(operation: &str, table: &str, error: &str) {
    error!(
        operation = operation,
        table = table,
        error = error,
        "Backend operation failed"
    );
}

/// Log backend round trips
pub fn log_backend_call(operation: &str, table: &str, duration_ms: u64, success: bool) {
    if success {
        debug!(
            operation = operation,
            table = table,
            duration_ms = duration_ms,
            "Backend call completed"
        );
    } else {
        warn!(
            operation = operation,
            table = table,
            duration_ms = duration_ms,
            "Backend call failed"
        );
    }
}

/// Log table view changes (sorting and paging)
pub fn log_view_change(table: &str, sort: Option<&str>, ascending: bool, page: usize) {
    debug!(
        table = table,
        sort = sort,
        ascending = ascending,
        page = page,
        "Table view changed"
    );
}
