use super::*;
use portal::{AuthPayload, Route};

#[test]
fn verification_outcome_keeps_message_on_screen() {
    let outcome = RegistrationOutcome::VerificationRequired {
        message: "Check your email".to_owned(),
        redirect_to: Route::Login,
    };
    assert_eq!(success_notice(&outcome).as_deref(), Some("Check your email"));
}

#[test]
fn authenticated_outcome_navigates_instead() {
    let payload: AuthPayload = serde_json::from_value(serde_json::json!({
        "token": "tok",
        "user": { "id": "u1", "email": "a@b.com" }
    }))
    .unwrap();
    let outcome = RegistrationOutcome::Authenticated { payload, redirect_to: Route::SetupProfile };
    assert!(success_notice(&outcome).is_none());
    assert_eq!(outcome.redirect_to(), Route::SetupProfile);
}
