use super::*;

#[test]
fn verifying_shows_placeholder_text() {
    assert_eq!(VerifyStatus::Verifying.message(), "Verifying your email...");
    assert_eq!(VerifyStatus::Verifying.css_class(), "login-message");
}

#[test]
fn outcome_messages_pass_through() {
    let ok = VerifyStatus::Verified("Email verified".to_owned());
    let failed = VerifyStatus::Failed("No token provided in URL".to_owned());
    assert_eq!(ok.message(), "Email verified");
    assert_eq!(failed.message(), "No token provided in URL");
    assert!(ok.css_class().ends_with("--success"));
    assert!(failed.css_class().ends_with("--error"));
}
