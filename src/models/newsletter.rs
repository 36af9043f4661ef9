//! Newsletter subscriber model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;
use crate::utils::errors::ValidationError;
use crate::view::{SortValue, Sortable};
use super::{
    email_if_present, required, required_email, required_if_present, Record, RecordKind, Validate,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsletterSubscriber {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriberField {
    Name,
    Email,
    CreatedAt,
}

impl Sortable for NewsletterSubscriber {
    type Field = SubscriberField;

    fn sort_value(&self, field: SubscriberField) -> SortValue<'_> {
        match field {
            SubscriberField::Name => SortValue::from(&self.name),
            SubscriberField::Email => SortValue::from(&self.email),
            SubscriberField::CreatedAt => SortValue::from(self.created_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSubscriberRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSubscriberRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Validate for CreateSubscriberRequest {
    fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required(self.name, "name")?,
            email: required_email(self.email)?,
        })
    }
}

impl Validate for UpdateSubscriberRequest {
    fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required_if_present(self.name, "name")?,
            email: email_if_present(self.email)?,
        })
    }
}

impl Record for NewsletterSubscriber {
    const KIND: RecordKind = RecordKind::NewsletterSubscriber;

    type Create = CreateSubscriberRequest;
    type Update = UpdateSubscriberRequest;

    fn id(&self) -> Uuid {
        self.id
    }
}
