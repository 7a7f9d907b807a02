use anyhow::Result;
use course_quote::adapters::dispatch::RecordingDispatcher;
use course_quote::app::contact::{perform_contact_action, ContactAction};
use course_quote::domain::model::ProviderProfile;
use course_quote::utils::validation::Validate;
use course_quote::{AppConfig, Catalog, EnrollmentFlow, QuoteEngine, QuoteError, Selection};
use std::sync::Arc;
use tempfile::TempDir;

fn config_engine(dir: &TempDir, toml: &str) -> Result<QuoteEngine> {
    let path = dir.path().join("course-quote.toml");
    std::fs::write(&path, toml)?;
    let config = AppConfig::from_file(&path)?;
    config.validate()?;
    Ok(QuoteEngine::from_provider(Arc::new(Catalog::standard()), &config))
}

#[test]
fn test_validation_errors_in_order() {
    let engine = QuoteEngine::default();

    assert!(matches!(
        engine.validate_contact(&Selection::new(), "", ""),
        Err(QuoteError::EmptySelection)
    ));
    assert!(matches!(
        engine.validate_contact(&Selection::from_ids(["1"]), "", "a@b.com"),
        Err(QuoteError::MissingName)
    ));
    assert!(matches!(
        engine.validate_contact(&Selection::from_ids(["1"]), "Jane Doe", "not-an-email"),
        Err(QuoteError::InvalidEmail { .. })
    ));
}

#[test]
fn test_enrollment_email_for_three_courses() -> Result<()> {
    let engine = QuoteEngine::default();
    let selection = Selection::from_ids(["7", "2", "5"]);
    let contact = engine.validate_contact(&selection, "Thabo Mokoena", "thabo@example.co.za")?;
    let quote = engine.compute_quote(&selection);
    let email = engine.build_enrollment_email(&selection, &quote, &contact);

    assert_eq!(email.recipient, "empoweringthenation@gmail.com");
    assert_eq!(email.subject, "Enrollment request from Thabo Mokoena");

    let lines: Vec<_> = email.body.lines().collect();
    assert_eq!(
        &lines[2..6],
        &[
            "I would like to enroll in the following course(s):",
            "• Sewing (6 Months) – R1,500",
            "• Child Minding (6 weeks) – R750",
            "• Garden Maintenance (6 weeks) – R750",
        ]
    );
    assert!(email.body.contains("Subtotal: R3,000\nDiscount: -R450\nTotal: R2,550\n"));
    assert!(email.body.contains("Name: Thabo Mokoena\nEmail: thabo@example.co.za"));

    let uri = email.mailto_uri();
    assert!(uri.starts_with(
        "mailto:empoweringthenation@gmail.com?subject=Enrollment%20request%20from%20Thabo%20Mokoena&body="
    ));
    assert!(!uri.contains(' '));
    assert!(!uri.contains('\n'));
    assert!(uri.contains("%0A"));
    Ok(())
}

#[test]
fn test_name_with_ampersand_is_escaped() -> Result<()> {
    let engine = QuoteEngine::default();
    let email = engine.prepare_enrollment(&Selection::from_ids(["1"]), "Ann & Co", "ann@co.org")?;
    let uri = email.mailto_uri();

    assert_eq!(uri.matches('&').count(), 1, "only the body separator is a raw '&'");
    assert!(uri.contains("Ann%20%26%20Co"));
    Ok(())
}

#[test]
fn test_recipient_cannot_open_a_second_query() -> Result<()> {
    let profile = ProviderProfile {
        enrollment_email: "a?cc=evil@b.com".to_string(),
        ..ProviderProfile::default()
    };
    let engine = QuoteEngine::new(Arc::new(Catalog::standard()), profile);
    let uri = engine
        .prepare_enrollment(&Selection::from_ids(["1"]), "Jane Doe", "jane@example.com")?
        .mailto_uri();

    assert!(uri.starts_with("mailto:a%3Fcc%3Devil@b.com?subject="));
    assert_eq!(uri.matches('?').count(), 1);
    assert_eq!(uri.matches('&').count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_flow_uses_configured_recipient() -> Result<()> {
    let dir = TempDir::new()?;
    let engine = config_engine(
        &dir,
        r#"
[provider]
name = "Soweto Skills Hub"
enrollment_email = "admissions@skillshub.example"
"#,
    )?;

    let flow = EnrollmentFlow::new(engine, RecordingDispatcher::new());
    let email = flow
        .confirm(&Selection::from_ids(["3"]), "Lerato", "lerato@example.com")
        .await?;

    assert_eq!(email.recipient, "admissions@skillshub.example");
    assert!(email.body.starts_with("Hello Soweto Skills Hub,"));
    assert_eq!(
        flow.dispatcher().dispatched(),
        vec![email.mailto_uri()]
    );
    Ok(())
}

#[tokio::test]
async fn test_failed_mail_client_reports_configured_fallback() -> Result<()> {
    let dir = TempDir::new()?;
    let engine = config_engine(&dir, "[provider]\nenrollment_email = \"desk@example.org\"\n")?;
    let flow = EnrollmentFlow::new(engine, RecordingDispatcher::failing("no mail client"));

    let err = flow
        .confirm(&Selection::from_ids(["1", "2"]), "Jane", "jane@example.com")
        .await
        .unwrap_err();

    assert_eq!(err.user_friendly_message(), "Please email us at desk@example.org.");
    assert_eq!(flow.dispatcher().dispatched().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_contact_actions_dispatch_expected_uris() -> Result<()> {
    let engine = QuoteEngine::default();
    let dispatcher = RecordingDispatcher::new();

    perform_contact_action(&engine, &dispatcher, ContactAction::Call).await?;
    perform_contact_action(&engine, &dispatcher, ContactAction::Email).await?;

    assert_eq!(
        dispatcher.dispatched(),
        vec![
            "tel:+27112345678".to_string(),
            "mailto:info@empoweringthenation.co.za".to_string()
        ]
    );
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected() -> Result<()> {
    let dir = TempDir::new()?;
    let result = config_engine(&dir, "[provider]\nenquiries_email = \"nobody\"\n");
    assert!(result.is_err());
    Ok(())
}
