//! Route wrapper that renders its children only when the guard allows.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use portal::{GuardDecision, Route, RouteGuard};

use crate::state::auth::SessionHandle;
use crate::util::auth::install_guard_redirect;

/// Gate `children` behind the route's access level.
///
/// Shows a neutral placeholder while the session is still hydrating and
/// renders nothing while a denial redirect is in progress.
#[component]
pub fn Guarded(route: Route, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let auth = session.auth();
    let guard = RouteGuard::for_route(route, session.admin_role());

    let decision = Memo::new(move |_| {
        let state = auth.get();
        guard
            .as_ref()
            .map_or(GuardDecision::Allow, |g| g.evaluate(&state.session))
    });
    install_guard_redirect(decision, use_navigate());

    move || match decision.get() {
        GuardDecision::Pending => view! { <div class="auth-pending">"Verifying authentication..."</div> }.into_any(),
        GuardDecision::Allow => children().into_any(),
        GuardDecision::Deny { .. } => ().into_any(),
    }
}
