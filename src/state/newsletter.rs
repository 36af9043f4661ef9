//! Newsletter sign-up form state

use crate::models::CreateSubscriberRequest;
use crate::utils::errors::ValidationError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterForm {
    pub name: String,
    pub email: String,
    pub privacy_accepted: bool,
}

impl NewsletterForm {
    pub fn new(name: &str, email: &str, privacy_accepted: bool) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            privacy_accepted,
        }
    }

    pub fn to_request(&self) -> Result<CreateSubscriberRequest, ValidationError> {
        if !self.privacy_accepted {
            return Err(ValidationError::PrivacyNotAccepted);
        }
        Ok(CreateSubscriberRequest {
            name: self.name.clone(),
            email: self.email.clone(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
