//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`SessionHandle`] is provided via context by the app root. It wraps the
//! one [`ClientSession`] and mirrors its snapshot into an `RwSignal` after
//! every operation, so route guards and user-aware components re-render when
//! the session changes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;
use portal::{
    HttpAuthApi, LoginOutcome, PortalConfig, Registration, RegistrationOutcome, Route, SessionError,
    SessionSnapshot, SessionStore, User,
};

use crate::util::local_storage::BrowserStorage;

pub type ClientSession = SessionStore<BrowserStorage, HttpAuthApi>;

/// Reactive mirror of the session store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: SessionSnapshot,
    /// A login/registration/verification request is outstanding.
    pub busy: bool,
}

impl AuthState {
    pub fn of(store: &ClientSession) -> Self {
        Self { session: store.snapshot(), busy: store.is_busy() }
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }

    /// Greeting text for the signed-in user.
    pub fn display_name(&self) -> String {
        self.user().map_or_else(|| "Guest".to_owned(), User::display_name)
    }
}

#[derive(Clone)]
pub struct SessionHandle {
    store: Arc<ClientSession>,
    auth: RwSignal<AuthState>,
    admin_role: Arc<str>,
}

impl SessionHandle {
    pub fn new(config: PortalConfig) -> Self {
        let admin_role: Arc<str> = Arc::from(config.admin_role.as_str());
        let flow = config.registration_flow;
        let api = HttpAuthApi::with_client(config, reqwest::Client::new());
        let store = Arc::new(SessionStore::new(BrowserStorage, api, flow));
        let auth = RwSignal::new(AuthState::of(&store));
        Self { store, auth, admin_role }
    }

    /// Build from the compile-time portal configuration, falling back to
    /// defaults when it is invalid.
    pub fn from_build_env() -> Self {
        let config = PortalConfig::from_build_env().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "invalid build-time portal config; using defaults");
            PortalConfig::default()
        });
        Self::new(config)
    }

    pub fn auth(&self) -> RwSignal<AuthState> {
        self.auth
    }

    pub fn admin_role(&self) -> &str {
        &self.admin_role
    }

    /// Bearer token for views making their own authenticated requests.
    pub fn token(&self) -> Option<String> {
        self.store.token()
    }

    fn refresh(&self) {
        self.auth.set(AuthState::of(&self.store));
    }

    pub fn hydrate(&self) {
        self.store.hydrate();
        self.refresh();
    }

    /// # Errors
    ///
    /// See [`SessionStore::login`].
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, SessionError> {
        self.auth.update(|s| s.busy = true);
        let result = self.store.login(email, password).await;
        self.refresh();
        result
    }

    /// # Errors
    ///
    /// See [`SessionStore::register_user`].
    pub async fn register(&self, registration: &Registration) -> Result<RegistrationOutcome, SessionError> {
        self.auth.update(|s| s.busy = true);
        let result = self.store.register_user(registration).await;
        self.refresh();
        result
    }

    /// # Errors
    ///
    /// See [`SessionStore::verify_email`].
    pub async fn verify_email(&self, token: &str) -> Result<String, SessionError> {
        let result = self.store.verify_email(token).await;
        self.refresh();
        result
    }

    pub fn logout(&self) -> Route {
        let next = self.store.logout();
        self.refresh();
        next
    }
}
