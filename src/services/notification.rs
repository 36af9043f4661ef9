//! Notification service implementation
//!
//! Turns service outcomes into short notices for the visitor or admin. The
//! front end renders them as toasts; this crate only decides the wording and
//! the kind.

use serde::Serialize;
use tracing::debug;
use crate::config::Settings;
use crate::models::{NewsletterSubscriber, RecordKind};
use crate::utils::errors::{ErrorSeverity, PortalError, Result};
use super::registration::RegistrationReceipt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
    /// Confirmation that carries an amount due
    Payment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<String>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
            total_price: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            total_price: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Admin mutation reported by a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    Created,
    Updated,
    Deleted,
}

impl AdminAction {
    pub fn as_str(self) -> &'static str {
        match self {
            AdminAction::Created => "created",
            AdminAction::Updated => "updated",
            AdminAction::Deleted => "deleted",
        }
    }
}

/// Builds user-facing notices
#[derive(Debug, Clone)]
pub struct NotificationService {
    currency_prefix: String,
}

impl NotificationService {
    pub fn new(settings: &Settings) -> Self {
        Self {
            currency_prefix: settings.pricing.currency_prefix.clone(),
        }
    }

    pub fn currency_prefix(&self) -> &str {
        &self.currency_prefix
    }

    pub fn registration_result(&self, result: &Result<RegistrationReceipt>) -> Notice {
        match result {
            Ok(receipt) => Notice {
                kind: NoticeKind::Payment,
                message: "Registration received! We will contact you shortly.".to_string(),
                total_price: Some(receipt.quote.total.display_with(&self.currency_prefix)),
            },
            Err(e) => self.failure(e),
        }
    }

    pub fn subscription_result(&self, result: &Result<NewsletterSubscriber>) -> Notice {
        match result {
            Ok(_) => Notice::success("Subscription confirmed! Thank you for subscribing."),
            Err(e) => self.failure(e),
        }
    }

    pub fn admin_result<T>(&self, kind: RecordKind, action: AdminAction, result: &Result<T>) -> Notice {
        match result {
            Ok(_) => Notice::success(format!("{} {} successfully.", capitalize(kind.label()), action.as_str())),
            Err(e) => self.failure(e),
        }
    }

    /// Notice for a list that could not be loaded
    pub fn load_failure(&self, kind: RecordKind, error: &PortalError) -> Notice {
        debug!(table = kind.table(), error = %error, "Building load failure notice");
        Notice::error(format!("Could not load {} records. {}", kind.label(), error.user_message()))
    }

    pub fn failure(&self, error: &PortalError) -> Notice {
        if error.severity() >= ErrorSeverity::Error {
            debug!(error = %error, severity = %error.severity(), "Reporting failure notice");
        }
        Notice::error(error.user_message())
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::PriceQuote;
    use crate::models::{Registration, RegistrationStatus};
    use crate::utils::errors::{BackendError, ValidationError};
    use chrono::Utc;
    use uuid::Uuid;

    fn service() -> NotificationService {
        NotificationService {
            currency_prefix: "R$".to_string(),
        }
    }

    #[test]
    fn test_successful_registration_carries_total() {
        let receipt = RegistrationReceipt {
            registration: Registration {
                id: Uuid::new_v4(),
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
                phone: "(11) 9 8765-4321".to_string(),
                course_ids: vec![Uuid::new_v4(); 3],
                message: None,
                status: RegistrationStatus::Pending,
                created_at: Utc::now(),
            },
            quote: PriceQuote::for_count(3),
        };
        let notice = service().registration_result(&Ok(receipt));
        assert_eq!(notice.kind, NoticeKind::Payment);
        assert_eq!(notice.total_price.as_deref(), Some("R$ 135.00"));
    }

    #[test]
    fn test_duplicate_gets_specific_message() {
        let err: Result<NewsletterSubscriber> =
            Err(BackendError::Duplicate("newsletter_subscribers_email_key".to_string()).into());
        let notice = service().subscription_result(&err);
        assert!(notice.is_error());
        assert_eq!(notice.message, "This e-mail is already registered.");
    }

    #[test]
    fn test_validation_message_is_shown_verbatim() {
        let err: Result<()> = Err(ValidationError::NoCoursesSelected.into());
        let notice = service().admin_result(RecordKind::Course, AdminAction::Created, &err);
        assert_eq!(notice.message, "Select at least one course");
    }

    #[test]
    fn test_admin_success_message() {
        let notice = service().admin_result(RecordKind::Lecture, AdminAction::Deleted, &Ok(()));
        assert_eq!(notice, Notice::success("Lecture deleted successfully."));
    }
}
