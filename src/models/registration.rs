//! Registration model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;
use crate::utils::errors::ValidationError;
use crate::utils::helpers::is_valid_phone;
use crate::view::{SortValue, Sortable};
use super::{optional, required, required_email, Course, Record, RecordKind, Validate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub course_ids: Vec<Uuid>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: RegistrationStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    #[default]
    Pending,
    Confirmed,
    Paid,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl RegistrationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RegistrationStatus::Pending => "pending",
            RegistrationStatus::Confirmed => "confirmed",
            RegistrationStatus::Paid => "paid",
            RegistrationStatus::Cancelled => "cancelled",
            RegistrationStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Registration {
    /// Titles of the registered courses, falling back to the raw id for
    /// courses that no longer exist
    pub fn course_titles(&self, catalog: &[Course]) -> String {
        self.course_ids
            .iter()
            .map(|id| {
                catalog
                    .iter()
                    .find(|course| course.id == *id)
                    .map_or_else(|| id.to_string(), |course| course.title.clone())
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationField {
    Name,
    Email,
    Phone,
    Status,
    CourseCount,
    CreatedAt,
}

impl Sortable for Registration {
    type Field = RegistrationField;

    fn sort_value(&self, field: RegistrationField) -> SortValue<'_> {
        match field {
            RegistrationField::Name => SortValue::from(&self.name),
            RegistrationField::Email => SortValue::from(&self.email),
            RegistrationField::Phone => SortValue::from(&self.phone),
            RegistrationField::Status => SortValue::Text(self.status.as_str()),
            RegistrationField::CourseCount => SortValue::Number(self.course_ids.len() as f64),
            RegistrationField::CreatedAt => SortValue::from(self.created_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRegistrationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course_ids: Vec<Uuid>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRegistrationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RegistrationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Validate for CreateRegistrationRequest {
    fn validated(self) -> Result<Self, ValidationError> {
        let name = required(self.name, "name")?;
        let email = required_email(self.email)?;
        let phone = required(self.phone, "phone")?;
        if !is_valid_phone(&phone) {
            return Err(ValidationError::InvalidPhone);
        }
        if self.course_ids.is_empty() {
            return Err(ValidationError::NoCoursesSelected);
        }

        Ok(Self {
            name,
            email,
            phone,
            course_ids: self.course_ids,
            message: optional(self.message),
        })
    }
}

// Status and the optional message have nothing to reject
impl Validate for UpdateRegistrationRequest {
    fn validated(self) -> Result<Self, ValidationError> {
        Ok(self)
    }
}

impl Record for Registration {
    const KIND: RecordKind = RecordKind::Registration;

    type Create = CreateRegistrationRequest;
    type Update = UpdateRegistrationRequest;

    fn id(&self) -> Uuid {
        self.id
    }
}
