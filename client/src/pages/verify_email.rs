//! E-mail verification landing page.
//!
//! Reached from the link in the verification e-mail (`/verify-email?token=`).
//! On success the user is sent on to the login page after a short pause so
//! the confirmation is readable.

#[cfg(test)]
#[path = "verify_email_test.rs"]
mod verify_email_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};
use portal::Route;

use crate::state::auth::SessionHandle;

/// Pause between a successful verification and the login redirect.
pub const REDIRECT_DELAY_MS: u32 = 3_000;

#[derive(Clone, Debug, PartialEq, Eq)]
enum VerifyStatus {
    Verifying,
    Verified(String),
    Failed(String),
}

impl VerifyStatus {
    fn message(&self) -> &str {
        match self {
            Self::Verifying => "Verifying your email...",
            Self::Verified(m) | Self::Failed(m) => m,
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            Self::Verifying => "login-message",
            Self::Verified(_) => "login-message login-message--success",
            Self::Failed(_) => "login-message login-message--error",
        }
    }
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let navigate = use_navigate();
    let query = use_query_map();
    let status = RwSignal::new(VerifyStatus::Verifying);

    let token = query.with_untracked(|q| q.get("token")).unwrap_or_default();
    leptos::task::spawn_local(async move {
        match session.verify_email(&token).await {
            Ok(message) => {
                status.set(VerifyStatus::Verified(message));
                #[cfg(feature = "csr")]
                gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                navigate(Route::Login.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
            Err(e) => status.set(VerifyStatus::Failed(e.user_message())),
        }
    });

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2>"Email Verification"</h2>
                <p class=move || status.with(VerifyStatus::css_class)>
                    {move || status.with(|s| s.message().to_owned())}
                </p>
                <Show when=move || matches!(status.get(), VerifyStatus::Failed(_))>
                    <p class="login-card__footer">
                        <a href="/login">"Back to login"</a>
                    </p>
                </Show>
            </div>
        </div>
    }
}
