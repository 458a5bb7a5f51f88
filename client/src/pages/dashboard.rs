//! Dashboard page: the authenticated landing route.
//!
//! Greets the signed-in user and offers sign-out. Rendered only inside
//! `Guarded`, so a user is always present by the time this mounts.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use portal::User;

use crate::state::auth::SessionHandle;

/// Plan label shown under the greeting.
fn plan_label(user: Option<&User>) -> String {
    match user.and_then(|u| u.plan_tier.as_deref()).filter(|t| !t.trim().is_empty()) {
        Some(tier) => format!("Plan: {tier}"),
        None => "No plan selected".to_owned(),
    }
}

/// Whether the signed-in user may follow the link to `/admin`.
fn shows_admin_link(user: Option<&User>, admin_role: &str) -> bool {
    user.is_some_and(|u| u.has_role(admin_role))
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let auth = session.auth();
    let navigate = use_navigate();
    let admin_role = session.admin_role().to_owned();

    let on_logout = move |_| {
        let next = session.logout();
        navigate(next.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>{move || format!("Welcome, {}", auth.with(|s| s.display_name()))}</h1>
                <button class="btn" on:click=on_logout>"Log Out"</button>
            </header>
            <p class="dashboard-plan">{move || auth.with(|s| plan_label(s.user()))}</p>
            <Show when=move || auth.with(|s| shows_admin_link(s.user(), &admin_role))>
                <a class="dashboard-link" href="/admin">"Admin"</a>
            </Show>
        </div>
    }
}
