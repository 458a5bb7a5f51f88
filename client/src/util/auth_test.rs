use super::*;
use portal::{DenyReason, Route};

#[test]
fn no_redirect_while_pending() {
    assert!(redirect_for(GuardDecision::Pending).is_none());
}

#[test]
fn no_redirect_when_allowed() {
    assert!(redirect_for(GuardDecision::Allow).is_none());
}

#[test]
fn deny_redirects_with_history_replace() {
    let decision = GuardDecision::Deny { redirect_to: Route::Login, replace: true, reason: DenyReason::Unauthenticated };
    let (path, options) = redirect_for(decision).unwrap();
    assert_eq!(path, "/login");
    assert!(options.replace);
}

#[test]
fn missing_role_redirects_to_dashboard() {
    let decision = GuardDecision::Deny { redirect_to: Route::Dashboard, replace: true, reason: DenyReason::MissingRole };
    assert_eq!(redirect_for(decision).map(|(path, _)| path), Some("/dashboard"));
}
