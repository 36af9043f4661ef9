//! Training Portal
//!
//! Library backing a professional-training website and its back office:
//! tiered course pricing, the registration and newsletter flows, and
//! sortable, paginated admin tables over records kept in a hosted backend.

pub mod backend;
pub mod config;
pub mod middleware;
pub mod models;
pub mod pricing;
pub mod services;
pub mod state;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{PortalError, Result};

// Re-export main components for easy access
pub use backend::{BackendClient, BackendService, Session};
pub use pricing::{compute_total, Money, PriceQuote, Selection};
pub use services::ServiceFactory;
pub use view::{RecordTable, ViewState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
