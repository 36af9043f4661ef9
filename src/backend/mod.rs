//! Backend module
//!
//! This module talks to the hosted backend's data and auth APIs

pub mod auth;
pub mod client;
pub mod repository;
pub mod service;

// Re-export commonly used backend components
pub use auth::{AuthUser, Session};
pub use client::BackendClient;
pub use repository::TableRepository;
pub use service::BackendService;
