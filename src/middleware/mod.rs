//! Middleware module
//!
//! This module contains guards applied before back-office operations

pub mod auth;
pub mod rate_limit;

// Re-export commonly used middleware
pub use auth::AuthMiddleware;
pub use rate_limit::{RateLimitConfig, RateLimitMiddleware, RateLimitStatus};
