//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior for denied
//! navigations: always replace the history entry so the back button cannot
//! return to the denied view.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use portal::GuardDecision;

/// Navigation to perform for a guard decision, if any.
pub fn redirect_for(decision: GuardDecision) -> Option<(&'static str, NavigateOptions)> {
    match decision {
        GuardDecision::Deny { redirect_to, replace, .. } => {
            Some((redirect_to.path(), NavigateOptions { replace, ..NavigateOptions::default() }))
        }
        GuardDecision::Pending | GuardDecision::Allow => None,
    }
}

/// Redirect whenever the guard decision becomes a denial.
pub fn install_guard_redirect<F>(decision: Memo<GuardDecision>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some((path, options)) = redirect_for(decision.get()) {
            navigate(path, options);
        }
    });
}
