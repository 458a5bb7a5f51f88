//! Login page: e-mail + password against the portal backend.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use portal::validation::validate_login;

use crate::state::auth::SessionHandle;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let auth = session.auth();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().busy {
            return;
        }
        let password_value = password.get_untracked();
        let email_value = match validate_login(&email.get_untracked(), &password_value) {
            Ok(v) => v,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        error.set(String::new());

        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.login(&email_value, &password_value).await {
                Ok(outcome) => navigate(outcome.redirect_to.path(), NavigateOptions::default()),
                Err(e) => error.set(e.user_message()),
            }
        });
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <h2>"Client Login"</h2>
                <input
                    class="login-input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="login-input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="login-button" type="submit" disabled=move || auth.get().busy>
                    {move || if auth.get().busy { "Logging in..." } else { "Log In" }}
                </button>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "New here? " <a href="/register">"Create an account"</a>
                </p>
            </form>
        </div>
    }
}
