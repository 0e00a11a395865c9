//! Authentication context and hooks for the UI.

use api::AuthService;
use dioxus::prelude::*;
use store::guard::LOGIN_PATH;
use store::models::Session;
use store::{ClientConfig, SessionStore};

use crate::context::{use_backend, use_notifications};
use crate::platform::{make_session_store, PlatformStorage};

/// The session store, mirrored to platform storage.
pub type AuthState = SessionStore<PlatformStorage>;

/// Get the authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Snapshot of the current session, subscribing the caller to changes.
pub fn use_session() -> Option<Session> {
    let auth = use_auth();
    let session = auth.read().current().cloned();
    session
}

/// Hydrates the session once from platform storage and provides it.
/// Needs a [`ClientConfig`] in context (see [`crate::ClientProvider`]).
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let config = use_context::<ClientConfig>();
    use_context_provider(|| Signal::new(make_session_store(&config)));

    rsx! {
        {children}
    }
}

/// Button to log out the current user and return to the login screen.
#[component]
pub fn LogoutButton(
    #[props(into, default = "Log out".to_string())] label: String,
    #[props(into, default)] class: String,
    children: Element,
) -> Element {
    let mut auth = use_auth();
    let backend = use_backend();
    let mut notifications = use_notifications();
    let nav = use_navigator();

    let onclick = move |_| {
        AuthService::new(backend.clone()).logout(&mut auth.write());
        notifications.write().clear();
        nav.replace(LOGIN_PATH);
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            {children}
            span { "{label}" }
        }
    }
}
