//! Registration page.
//!
//! Depending on the deployment's registration flow the new account is either
//! signed in straight away (and sent to profile setup) or told to confirm
//! their e-mail first.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use portal::RegistrationOutcome;
use portal::validation::RegistrationForm;

use crate::state::auth::SessionHandle;

/// Message to keep on screen after a successful registration; `None` when
/// the page navigates away instead.
fn success_notice(outcome: &RegistrationOutcome) -> Option<String> {
    match outcome {
        RegistrationOutcome::VerificationRequired { message, .. } => Some(message.clone()),
        RegistrationOutcome::Authenticated { .. } => None,
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let auth = session.auth();
    let navigate = use_navigate();

    let form = RwSignal::new(RegistrationForm::default());
    let error = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().busy {
            return;
        }
        let registration = match form.get_untracked().validate() {
            Ok(r) => r,
            Err(msg) => {
                error.set(msg);
                return;
            }
        };
        error.set(String::new());

        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.register(&registration).await {
                Ok(outcome) => match success_notice(&outcome) {
                    Some(message) => {
                        form.set(RegistrationForm::default());
                        notice.set(message);
                    }
                    None => navigate(outcome.redirect_to().path(), NavigateOptions::default()),
                },
                Err(e) => error.set(e.user_message()),
            }
        });
    };

    // Editing any field clears a stale error.
    let field = move |label: &'static str, kind: &'static str, get: fn(&RegistrationForm) -> String, set: fn(&mut RegistrationForm, String)| {
        view! {
            <input
                class="login-input"
                type=kind
                placeholder=label
                prop:value=move || get(&form.get())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                    error.set(String::new());
                }
            />
        }
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <h2>"Create Your Account"</h2>
                {field("First name", "text", |f| f.first_name.clone(), |f, v| f.first_name = v)}
                {field("Last name", "text", |f| f.last_name.clone(), |f, v| f.last_name = v)}
                {field("Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                {field("Password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                {field("Confirm password", "password", |f| f.confirm_password.clone(), |f, v| f.confirm_password = v)}
                <button class="login-button" type="submit" disabled=move || auth.get().busy>
                    {move || if auth.get().busy { "Registering..." } else { "Register" }}
                </button>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <Show when=move || !notice.get().is_empty()>
                    <p class="login-message">{move || notice.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already have an account? " <a href="/login">"Log in"</a>
                </p>
            </form>
        </div>
    }
}
