//! Publication model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;
use crate::utils::errors::ValidationError;
use crate::view::{SortValue, Sortable};
use super::{optional, required, required_if_present, Record, RecordKind, Validate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub id: Uuid,
    pub title: String,
    /// Free-form category such as "Artigo" or "Livro"
    #[serde(rename = "type")]
    pub publication_type: String,
    pub description: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicationField {
    Title,
    Type,
    CreatedAt,
}

impl Sortable for Publication {
    type Field = PublicationField;

    fn sort_value(&self, field: PublicationField) -> SortValue<'_> {
        match field {
            PublicationField::Title => SortValue::from(&self.title),
            PublicationField::Type => SortValue::from(&self.publication_type),
            PublicationField::CreatedAt => SortValue::from(self.created_at),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePublicationRequest {
    pub title: String,
    #[serde(rename = "type")]
    pub publication_type: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePublicationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub publication_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Validate for CreatePublicationRequest {
    fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            title: required(self.title, "title")?,
            publication_type: required(self.publication_type, "type")?,
            description: required(self.description, "description")?,
            content: optional(self.content),
            image_url: optional(self.image_url),
            link: optional(self.link),
        })
    }
}

impl Validate for UpdatePublicationRequest {
    fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            title: required_if_present(self.title, "title")?,
            publication_type: required_if_present(self.publication_type, "type")?,
            description: required_if_present(self.description, "description")?,
            ..self
        })
    }
}

impl Record for Publication {
    const KIND: RecordKind = RecordKind::Publication;

    type Create = CreatePublicationRequest;
    type Update = UpdatePublicationRequest;

    fn id(&self) -> Uuid {
        self.id
    }
}
