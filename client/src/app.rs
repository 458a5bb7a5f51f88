//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guarded::Guarded;
use crate::pages::{
    admin::AdminPage, dashboard::DashboardPage, login::LoginPage, not_found::NotFoundPage,
    profile_setup::ProfileSetupPage, register::RegisterPage, verify_email::VerifyEmailPage,
};
use crate::state::auth::SessionHandle;

/// Root application component.
///
/// Restores the persisted session before the first render so guarded routes
/// start from the stored credentials instead of flashing the login page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionHandle::from_build_env();
    session.hydrate();
    provide_context(session);

    view! {
        <Title text="Client Portal"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("verify-email") view=VerifyEmailPage/>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <Guarded route=portal::Route::Home><DashboardPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <Guarded route=portal::Route::Dashboard><DashboardPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("setup-profile")
                    view=|| view! { <Guarded route=portal::Route::SetupProfile><ProfileSetupPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| view! { <Guarded route=portal::Route::Admin><AdminPage/></Guarded> }
                />
            </Routes>
        </Router>
    }
}
