//! Error handling for the training portal
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the training portal
#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Record not found: {kind} {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Failures reported by the hosted backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Duplicate record: {0}")]
    Duplicate(String),

    #[error("Request rejected with HTTP {status}: {message}")]
    Rejected {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Not authorized: {0}")]
    Unauthorized(String),

    #[error("Backend request timed out")]
    Timeout,

    #[error("Backend unavailable")]
    Unavailable,

    #[error("Invalid backend response: {0}")]
    InvalidResponse(String),
}

/// Form validation failures, caught before any backend call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field `{0}` is required")]
    MissingField(&'static str),

    #[error("Invalid e-mail address")]
    InvalidEmail,

    #[error("Phone number must look like (XX) X XXXX-XXXX")]
    InvalidPhone,

    #[error("Select at least one course")]
    NoCoursesSelected,

    #[error("The terms of use must be accepted")]
    TermsNotAccepted,

    #[error("The privacy policy must be accepted")]
    PrivacyNotAccepted,

    #[error("Price must be greater than zero")]
    InvalidPrice,

    #[error("Number of spots must be greater than zero")]
    InvalidSpots,
}

/// Result type alias for portal operations
pub type Result<T> = std::result::Result<T, PortalError>;

/// Result type alias for raw backend calls
pub type BackendResult<T> = std::result::Result<T, BackendError>;

impl PortalError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            PortalError::Backend(e) => e.is_transient(),
            PortalError::Validation(_) => true,
            PortalError::Config(_) => false,
            PortalError::PermissionDenied(_) => false,
            PortalError::Authentication(_) => true,
            PortalError::NotFound { .. } => false,
            PortalError::Http(_) => true,
            PortalError::Serialization(_) => false,
            PortalError::Io(_) => true,
            PortalError::UrlParse(_) => false,
            PortalError::RateLimitExceeded => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PortalError::Config(_) => ErrorSeverity::Critical,
            PortalError::UrlParse(_) => ErrorSeverity::Critical,
            PortalError::PermissionDenied(_) => ErrorSeverity::Warning,
            PortalError::Authentication(_) => ErrorSeverity::Warning,
            PortalError::RateLimitExceeded => ErrorSeverity::Warning,
            PortalError::Validation(_) => ErrorSeverity::Info,
            PortalError::Backend(BackendError::Duplicate(_)) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }

    /// Whether the failure was a uniqueness conflict on the backend
    pub fn is_duplicate(&self) -> bool {
        matches!(self, PortalError::Backend(BackendError::Duplicate(_)))
    }

    /// Short message fit for showing to a site visitor or admin
    pub fn user_message(&self) -> String {
        match self {
            PortalError::Validation(e) => e.to_string(),
            PortalError::Backend(BackendError::Duplicate(_)) => {
                "This e-mail is already registered.".to_string()
            }
            PortalError::Backend(BackendError::Unauthorized(_))
            | PortalError::Authentication(_) => "Invalid credentials or expired session.".to_string(),
            PortalError::PermissionDenied(_) => "You are not allowed to do that.".to_string(),
            PortalError::RateLimitExceeded => {
                "Too many attempts. Please try again later.".to_string()
            }
            PortalError::Backend(BackendError::Timeout)
            | PortalError::Backend(BackendError::Unavailable) => {
                "The service is unreachable right now. Please try again.".to_string()
            }
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}

impl BackendError {
    /// PostgreSQL unique-violation code surfaced by the backend
    pub const UNIQUE_VIOLATION: &'static str = "23505";

    /// Network-level failures that may succeed on a later user action
    pub fn is_transient(&self) -> bool {
        matches!(self, BackendError::Timeout | BackendError::Unavailable)
    }
}

/// Error severity levels, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
