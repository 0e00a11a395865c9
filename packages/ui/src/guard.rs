use dioxus::prelude::*;
use store::models::Role;
use store::{authorize, GuardDecision};

use crate::auth::use_auth;

/// Renders `children` only for a session whose role is in `roles`.
///
/// Re-evaluated on every render: without a session it redirects to the login
/// screen, with another role to that role's own dashboard.
#[component]
pub fn ProtectedRoute(roles: Vec<Role>, children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let decision = authorize(auth.read().current(), &roles);
    match decision {
        GuardDecision::Render => rsx! {
            {children}
        },
        GuardDecision::Redirect(path) => {
            tracing::debug!(path, "protected route redirect");
            nav.replace(path);
            rsx! {}
        }
    }
}
