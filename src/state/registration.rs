//! Registration form state
//!
//! Holds what a visitor has typed and picked so far. The draft is the only
//! place the course selection lives; it is cleared after a successful
//! submission and left intact after a failed one.

use uuid::Uuid;
use crate::models::CreateRegistrationRequest;
use crate::pricing::{PriceQuote, Selection};
use crate::utils::errors::ValidationError;
use crate::utils::helpers::{format_phone_number, non_blank, normalize_whitespace};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationDraft {
    name: String,
    email: String,
    phone: String,
    message: String,
    selection: Selection,
    terms_accepted: bool,
}

impl RegistrationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_string();
    }

    /// Store the phone masked as `(XX) X XXXX-XXXX` while it is typed
    pub fn set_phone(&mut self, raw: &str) {
        self.phone = format_phone_number(raw);
    }

    pub fn set_message(&mut self, message: &str) {
        self.message = message.to_string();
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) {
        self.terms_accepted = accepted;
    }

    /// Toggle a course and return whether it is now selected
    pub fn toggle_course(&mut self, course_id: Uuid) -> bool {
        self.selection.toggle(course_id)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    /// Price of the current selection
    pub fn quote(&self) -> PriceQuote {
        self.selection.quote()
    }

    /// Build the insert payload; field-level checks happen in `validated()`
    pub fn to_request(&self) -> Result<CreateRegistrationRequest, ValidationError> {
        if !self.terms_accepted {
            return Err(ValidationError::TermsNotAccepted);
        }

        Ok(CreateRegistrationRequest {
            name: normalize_whitespace(&self.name),
            email: self.email.clone(),
            phone: self.phone.clone(),
            course_ids: self.selection.ids().to_vec(),
            message: non_blank(Some(&self.message)),
        })
    }

    /// Reset every field and the selection
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Validate;
    use crate::pricing::Money;

    fn filled() -> RegistrationDraft {
        let mut draft = RegistrationDraft::new();
        draft.set_name("  Ana   Souza ");
        draft.set_email("ana@example.com");
        draft.set_phone("11987654321");
        draft.set_terms_accepted(true);
        draft
    }

    #[test]
    fn test_phone_is_masked_while_typing() {
        let mut draft = RegistrationDraft::new();
        draft.set_phone("11a98765-4321 99");
        assert_eq!(draft.phone(), "(11) 9 8765-4321");
    }

    #[test]
    fn test_quote_follows_toggles() {
        let mut draft = filled();
        let ids: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
        for id in &ids {
            draft.toggle_course(*id);
        }
        assert_eq!(draft.quote().total, Money::from_cents(13_500));

        draft.toggle_course(ids[0]);
        assert_eq!(draft.quote().total, Money::from_cents(10_000));
    }

    #[test]
    fn test_terms_are_required() {
        let mut draft = filled();
        draft.toggle_course(Uuid::new_v4());
        draft.set_terms_accepted(false);
        assert_eq!(draft.to_request().unwrap_err(), ValidationError::TermsNotAccepted);
    }

    #[test]
    fn test_request_carries_selection_in_pick_order() {
        let mut draft = filled();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        draft.toggle_course(first);
        draft.toggle_course(second);
        draft.set_message("   ");

        let request = draft.to_request().unwrap().validated().unwrap();
        assert_eq!(request.name, "Ana Souza");
        assert_eq!(request.course_ids, vec![first, second]);
        assert_eq!(request.message, None);
    }

    #[test]
    fn test_empty_selection_fails_validation() {
        let request = filled().to_request().unwrap();
        assert_eq!(request.validated().unwrap_err(), ValidationError::NoCoursesSelected);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut draft = filled();
        draft.toggle_course(Uuid::new_v4());
        draft.clear();
        assert_eq!(draft, RegistrationDraft::default());
        assert!(draft.quote().is_empty());
    }
}
