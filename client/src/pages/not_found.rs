use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h2>"Page not found"</h2>
                <a href="/">"Go home"</a>
            </div>
        </div>
    }
}
