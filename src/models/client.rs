//! Client model

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::errors::ValidationError;
use crate::utils::helpers::default_avatar_url;
use crate::view::{SortValue, Sortable};
use super::{
    email_if_present, optional, required, required_email, required_if_present, Record,
    RecordKind, Validate,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub profession: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientField {
    Name,
    Email,
    Profession,
    Company,
}

impl Sortable for Client {
    type Field = ClientField;

    fn sort_value(&self, field: ClientField) -> SortValue<'_> {
        match field {
            ClientField::Name => SortValue::from(&self.name),
            ClientField::Email => SortValue::from(&self.email),
            ClientField::Profession => SortValue::from(&self.profession),
            ClientField::Company => SortValue::from(self.company.as_ref()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClientRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub profession: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Filled with a generated avatar when left empty
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateClientRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Validate for CreateClientRequest {
    fn validated(self) -> Result<Self, ValidationError> {
        let name = required(self.name, "name")?;
        let avatar_url = optional(self.avatar_url).unwrap_or_else(|| default_avatar_url(&name));
        Ok(Self {
            email: required_email(self.email)?,
            phone: required(self.phone, "phone")?,
            profession: required(self.profession, "profession")?,
            company: optional(self.company),
            notes: optional(self.notes),
            avatar_url: Some(avatar_url),
            name,
        })
    }
}

impl Validate for UpdateClientRequest {
    fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required_if_present(self.name, "name")?,
            email: email_if_present(self.email)?,
            phone: required_if_present(self.phone, "phone")?,
            profession: required_if_present(self.profession, "profession")?,
            ..self
        })
    }
}

impl Record for Client {
    const KIND: RecordKind = RecordKind::Client;

    type Create = CreateClientRequest;
    type Update = UpdateClientRequest;

    fn id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(avatar_url: Option<&str>) -> CreateClientRequest {
        CreateClientRequest {
            name: "Ana Souza".to_string(),
            email: "ana@example.com".to_string(),
            phone: "(11) 9 8765-4321".to_string(),
            profession: "Gerente".to_string(),
            company: Some(String::new()),
            notes: None,
            avatar_url: avatar_url.map(str::to_string),
        }
    }

    #[test]
    fn test_missing_avatar_gets_generated_one() {
        let client = request(None).validated().unwrap();
        assert_eq!(client.avatar_url.as_deref(), Some(default_avatar_url("Ana Souza").as_str()));
        assert!(client.company.is_none());
    }

    #[test]
    fn test_explicit_avatar_is_kept() {
        let client = request(Some("https://cdn.example.com/ana.png")).validated().unwrap();
        assert_eq!(client.avatar_url.as_deref(), Some("https://cdn.example.com/ana.png"));
    }

    #[test]
    fn test_update_checks_present_email() {
        let update = UpdateClientRequest {
            email: Some("not-an-email".to_string()),
            ..Default::default()
        };
        assert_eq!(update.validated().unwrap_err(), ValidationError::InvalidEmail);

        let update = UpdateClientRequest {
            email: Some(" Ana@Example.com".to_string()),
            notes: Some("".to_string()),
            ..Default::default()
        }
        .validated()
        .unwrap();
        assert_eq!(update.email.as_deref(), Some("ana@example.com"));
        assert_eq!(update.notes.as_deref(), Some(""));
    }
}
