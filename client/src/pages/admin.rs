//! Admin landing page. Reachable only by users holding the admin role.

use leptos::prelude::*;

use crate::state::auth::SessionHandle;

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<SessionHandle>().auth();

    view! {
        <div class="dashboard-page">
            <h1>"Admin"</h1>
            <p>{move || auth.with(|s| s.user().map(|u| format!("Signed in as {} ({})", u.email, u.role)))}</p>
            <a class="dashboard-link" href="/dashboard">"Back to dashboard"</a>
        </div>
    }
}
