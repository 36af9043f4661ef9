//! Data models module
//!
//! This module contains all data structures exchanged with the backend

pub mod client;
pub mod content;
pub mod course;
pub mod lecture;
pub mod newsletter;
pub mod publication;
pub mod registration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;
use crate::utils::errors::ValidationError;
use crate::view::Sortable;

// Re-export commonly used models
pub use client::{Client, ClientField, CreateClientRequest, UpdateClientRequest};
pub use content::{Icon, ServiceArea};
pub use course::{Course, CourseArtwork, CourseField, CreateCourseRequest, UpdateCourseRequest};
pub use lecture::{CreateLectureRequest, Lecture, LectureField, UpdateLectureRequest};
pub use newsletter::{CreateSubscriberRequest, NewsletterSubscriber, SubscriberField, UpdateSubscriberRequest};
pub use publication::{CreatePublicationRequest, Publication, PublicationField, UpdatePublicationRequest};
pub use registration::{
    CreateRegistrationRequest, Registration, RegistrationField, RegistrationStatus,
    UpdateRegistrationRequest,
};

/// Record kinds managed through the back office
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Course,
    Lecture,
    Publication,
    Client,
    Registration,
    NewsletterSubscriber,
}

impl RecordKind {
    pub const ALL: [RecordKind; 6] = [
        RecordKind::Course,
        RecordKind::Lecture,
        RecordKind::Publication,
        RecordKind::Client,
        RecordKind::Registration,
        RecordKind::NewsletterSubscriber,
    ];

    /// Backend table name
    pub fn table(self) -> &'static str {
        match self {
            RecordKind::Course => "courses",
            RecordKind::Lecture => "lectures",
            RecordKind::Publication => "publications",
            RecordKind::Client => "clients",
            RecordKind::Registration => "registrations",
            RecordKind::NewsletterSubscriber => "newsletter_subscribers",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Course => "course",
            RecordKind::Lecture => "lecture",
            RecordKind::Publication => "publication",
            RecordKind::Client => "client",
            RecordKind::Registration => "registration",
            RecordKind::NewsletterSubscriber => "newsletter subscriber",
        }
    }

    /// Server-side ordering requested when listing, as `(column, ascending)`
    pub fn default_order(self) -> Option<(&'static str, bool)> {
        match self {
            RecordKind::Publication => Some(("created_at", false)),
            _ => None,
        }
    }
}

/// Request payloads checked before they are sent to the backend
pub trait Validate: Sized {
    /// Normalize the payload (trim, fill defaults) and reject invalid input
    fn validated(self) -> Result<Self, ValidationError>;
}

/// A row of one of the backend tables
pub trait Record: DeserializeOwned + Sortable + Clone + Send + Sync + 'static {
    const KIND: RecordKind;

    type Create: Serialize + Validate + Send + Sync;
    type Update: Serialize + Validate + Send + Sync;

    fn id(&self) -> Uuid;
}

/// Trimmed required text field
pub(crate) fn required(value: String, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Trimmed optional text field, blank becomes `None`
pub(crate) fn optional(value: Option<String>) -> Option<String> {
    crate::utils::helpers::non_blank(value.as_deref())
}

/// Required e-mail field
pub(crate) fn required_email(value: String) -> Result<String, ValidationError> {
    let email = required(value, "email")?.to_lowercase();
    if crate::utils::helpers::is_valid_email(&email) {
        Ok(email)
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Text field of a partial update; when present it must not be blank
pub(crate) fn required_if_present(
    value: Option<String>,
    field: &'static str,
) -> Result<Option<String>, ValidationError> {
    value.map(|value| required(value, field)).transpose()
}

/// E-mail field of a partial update
pub(crate) fn email_if_present(value: Option<String>) -> Result<Option<String>, ValidationError> {
    value.map(required_email).transpose()
}
