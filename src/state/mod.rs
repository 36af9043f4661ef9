//! State management module
//!
//! This module holds form state kept between user interactions

pub mod newsletter;
pub mod registration;

// Re-export commonly used state components
pub use newsletter::NewsletterForm;
pub use registration::RegistrationDraft;
