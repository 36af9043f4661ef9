//! Course model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;
use crate::pricing::Money;
use crate::utils::errors::ValidationError;
use crate::view::{SortValue, Sortable};
use super::{optional, required, required_if_present, Record, RecordKind, Validate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub format: String,
    /// Listed price; registration pricing uses the tier table instead
    pub price: Money,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub artwork: Option<CourseArtwork>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Stock artwork a course can be illustrated with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseArtwork {
    EffectiveLeadership,
    TeamManagement,
    DigitalMarketing,
    SalesStrategy,
    EducationalManagement,
    ActiveMethodologies,
    ProjectManagement,
    LeaderDevelopment,
}

impl CourseArtwork {
    pub fn image_url(self) -> &'static str {
        match self {
            CourseArtwork::EffectiveLeadership => "https://images.unsplash.com/photo-1519389950473-47ba0277781c?auto=format&fit=crop&w=1350&q=80",
            CourseArtwork::TeamManagement => "https://images.unsplash.com/photo-1522071820081-009f0129c71c?auto=format&fit=crop&w=1350&q=80",
            CourseArtwork::DigitalMarketing => "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&w=1350&q=80",
            CourseArtwork::SalesStrategy => "https://images.unsplash.com/photo-1553484771-371a605b060b?auto=format&fit=crop&w=1350&q=80",
            CourseArtwork::EducationalManagement => "https://images.unsplash.com/photo-1524178232363-1fb2b075b655?auto=format&fit=crop&w=1350&q=80",
            CourseArtwork::ActiveMethodologies => "https://images.unsplash.com/photo-1552664730-d307ca884978?auto=format&fit=crop&w=1350&q=80",
            CourseArtwork::ProjectManagement => "https://images.unsplash.com/photo-1542744173-8e7e53415bb0?auto=format&fit=crop&w=1350&q=80",
            CourseArtwork::LeaderDevelopment => "https://images.unsplash.com/photo-1517245386807-bb43f82c33c4?auto=format&fit=crop&w=1350&q=80",
        }
    }
}

impl Course {
    /// Image shown on course cards: stock artwork wins over an uploaded URL
    pub fn display_image(&self) -> Option<&str> {
        self.artwork
            .map(CourseArtwork::image_url)
            .or(self.image_url.as_deref())
    }

    pub fn list_price(&self) -> Money {
        self.price
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseField {
    Title,
    Duration,
    Format,
    Price,
}

impl Sortable for Course {
    type Field = CourseField;

    fn sort_value(&self, field: CourseField) -> SortValue<'_> {
        match field {
            CourseField::Title => SortValue::from(&self.title),
            CourseField::Duration => SortValue::from(&self.duration),
            CourseField::Format => SortValue::from(&self.format),
            CourseField::Price => SortValue::Number(self.price.as_decimal()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCourseRequest {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub format: String,
    pub price: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artwork: Option<CourseArtwork>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCourseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artwork: Option<CourseArtwork>,
}

impl Validate for CreateCourseRequest {
    fn validated(self) -> Result<Self, ValidationError> {
        if !self.price.is_positive() {
            return Err(ValidationError::InvalidPrice);
        }
        Ok(Self {
            title: required(self.title, "title")?,
            description: required(self.description, "description")?,
            duration: required(self.duration, "duration")?,
            format: required(self.format, "format")?,
            price: self.price,
            image_url: optional(self.image_url),
            artwork: self.artwork,
        })
    }
}

impl Validate for UpdateCourseRequest {
    fn validated(self) -> Result<Self, ValidationError> {
        if self.price.is_some_and(|price| !price.is_positive()) {
            return Err(ValidationError::InvalidPrice);
        }
        Ok(Self {
            title: required_if_present(self.title, "title")?,
            description: required_if_present(self.description, "description")?,
            duration: required_if_present(self.duration, "duration")?,
            format: required_if_present(self.format, "format")?,
            ..self
        })
    }
}

impl Record for Course {
    const KIND: RecordKind = RecordKind::Course;

    type Create = CreateCourseRequest;
    type Update = UpdateCourseRequest;

    fn id(&self) -> Uuid {
        self.id
    }
}
