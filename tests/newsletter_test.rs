//! Newsletter subscription against a mock backend

mod helpers;

use assert_matches::assert_matches;
use helpers::*;
use serde_json::json;
use training_portal::services::NoticeKind;
use training_portal::state::NewsletterForm;
use training_portal::utils::errors::{PortalError, ValidationError};
use uuid::Uuid;

#[tokio::test]
async fn test_subscription_is_stored_and_form_cleared() {
    let ctx = TestContext::new().await;
    ctx.backend
        .mock_insert(
            "newsletter_subscribers",
            json!({
                "id": Uuid::new_v4(),
                "name": "Ana",
                "email": "ana@example.com",
                "created_at": "2024-05-01T12:00:00Z"
            }),
        )
        .await;

    let mut form = NewsletterForm::new("Ana", "ANA@example.com ", true);
    let result = ctx.services.newsletter_service.subscribe(&mut form).await;

    let notice = ctx.services.notification_service.subscription_result(&result);
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(result.unwrap().email, "ana@example.com");
    assert_eq!(form, NewsletterForm::default());
}

#[tokio::test]
async fn test_already_subscribed_email_is_duplicate() {
    let ctx = TestContext::new().await;
    ctx.backend.mock_insert_duplicate("newsletter_subscribers").await;

    let mut form = NewsletterForm::new("Ana", "ana@example.com", true);
    let result = ctx.services.newsletter_service.subscribe(&mut form).await;

    assert!(result.as_ref().unwrap_err().is_duplicate());
    assert_eq!(form.email, "ana@example.com");
}

#[tokio::test]
async fn test_privacy_policy_is_checked_first() {
    let ctx = TestContext::new().await;

    let mut form = NewsletterForm::new("Ana", "ana@example.com", false);
    assert_matches!(
        ctx.services.newsletter_service.subscribe(&mut form).await,
        Err(PortalError::Validation(ValidationError::PrivacyNotAccepted))
    );

    let mut form = NewsletterForm::new("Ana", "not-an-email", true);
    assert_matches!(
        ctx.services.newsletter_service.subscribe(&mut form).await,
        Err(PortalError::Validation(ValidationError::InvalidEmail))
    );

    assert!(ctx.backend.requests().await.is_empty());
}

#[tokio::test]
async fn test_disabled_newsletter() {
    let ctx = TestContext::new_with_config(TestConfig {
        newsletter: false,
        ..TestConfig::default()
    })
    .await;

    let mut form = NewsletterForm::new("Ana", "ana@example.com", true);
    assert_matches!(
        ctx.services.newsletter_service.subscribe(&mut form).await,
        Err(PortalError::PermissionDenied(_))
    );
}
