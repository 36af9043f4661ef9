//! Lecture model

use serde::{Deserialize, Serialize};
use chrono::{Datelike, NaiveDate};
use uuid::Uuid;
use crate::utils::errors::ValidationError;
use crate::view::{SortValue, Sortable};
use super::{optional, required, required_if_present, Record, RecordKind, Validate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lecture {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    /// Start time as entered, e.g. `19:30`
    pub time: String,
    pub location: String,
    pub spots: i32,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LectureField {
    Title,
    Date,
    Location,
    Spots,
}

impl Sortable for Lecture {
    type Field = LectureField;

    fn sort_value(&self, field: LectureField) -> SortValue<'_> {
        match field {
            LectureField::Title => SortValue::from(&self.title),
            LectureField::Date => SortValue::from(self.date.num_days_from_ce()),
            LectureField::Location => SortValue::from(&self.location),
            LectureField::Spots => SortValue::from(self.spots),
        }
    }
}

impl Lecture {
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.date >= today
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLectureRequest {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub spots: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLectureRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spots: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Validate for CreateLectureRequest {
    fn validated(self) -> Result<Self, ValidationError> {
        if self.spots <= 0 {
            return Err(ValidationError::InvalidSpots);
        }
        Ok(Self {
            title: required(self.title, "title")?,
            description: required(self.description, "description")?,
            date: self.date,
            time: required(self.time, "time")?,
            location: required(self.location, "location")?,
            spots: self.spots,
            image_url: optional(self.image_url),
        })
    }
}

impl Validate for UpdateLectureRequest {
    fn validated(self) -> Result<Self, ValidationError> {
        if self.spots.is_some_and(|spots| spots <= 0) {
            return Err(ValidationError::InvalidSpots);
        }
        Ok(Self {
            title: required_if_present(self.title, "title")?,
            description: required_if_present(self.description, "description")?,
            time: required_if_present(self.time, "time")?,
            location: required_if_present(self.location, "location")?,
            ..self
        })
    }
}

impl Record for Lecture {
    const KIND: RecordKind = RecordKind::Lecture;

    type Create = CreateLectureRequest;
    type Update = UpdateLectureRequest;

    fn id(&self) -> Uuid {
        self.id
    }
}
