//! Profile setup page shown after a registration that signs the user in.

use leptos::prelude::*;

use crate::state::auth::SessionHandle;

#[component]
pub fn ProfileSetupPage() -> impl IntoView {
    let auth = expect_context::<SessionHandle>().auth();

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2>"Set Up Your Profile"</h2>
                <p>{move || format!("Welcome aboard, {}.", auth.with(|s| s.display_name()))}</p>
                <p class="login-card__footer">
                    <a href="/dashboard">"Continue to dashboard"</a>
                </p>
            </div>
        </div>
    }
}
