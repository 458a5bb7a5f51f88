use super::*;

fn member() -> User {
    serde_json::from_value(serde_json::json!({
        "id": "u1",
        "email": "client@example.com",
        "first_name": "Cal",
        "last_name": "Client"
    }))
    .unwrap()
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_is_pending() {
    let state = AuthState::default();
    assert!(state.session.is_initializing);
    assert!(!state.session.is_authenticated);
    assert!(!state.busy);
}

#[test]
fn display_name_guest_when_signed_out() {
    assert_eq!(AuthState::default().display_name(), "Guest");
}

#[test]
fn display_name_uses_user_record() {
    let state = AuthState {
        session: SessionSnapshot { user: Some(member()), is_authenticated: true, is_initializing: false },
        busy: false,
    };
    assert_eq!(state.display_name(), "Cal Client");
    assert_eq!(state.user().map(|u| u.id.as_str()), Some("u1"));
}

// =============================================================
// SessionHandle without browser storage
// =============================================================

#[test]
fn hydrate_without_storage_ends_signed_out() {
    let handle = SessionHandle::new(PortalConfig::default());
    assert!(handle.auth().get_untracked().session.is_initializing);

    handle.hydrate();
    let state = handle.auth().get_untracked();
    assert!(!state.session.is_initializing);
    assert!(!state.session.is_authenticated);
    assert!(handle.token().is_none());
}

#[test]
fn logout_routes_to_login() {
    let handle = SessionHandle::new(PortalConfig::default());
    handle.hydrate();
    assert_eq!(handle.logout(), Route::Login);
    assert_eq!(handle.admin_role(), "Admin");
}
