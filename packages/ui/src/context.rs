//! Client-wide state handed to every screen through Dioxus context.
//!
//! | Context value | Hook |
//! |---------------|------|
//! | [`ClientConfig`] | [`use_config`] |
//! | [`RestBackend`] | [`use_backend`] |
//! | `Signal<NotificationCenter>` | [`use_notifications`] |
//! | `Signal<ClaimDesk>` | [`use_claim_desk`] |
//! | `Signal<DossierDesk>` | [`use_dossier_desk`] |
//! | `Signal<AuthState>` | [`crate::use_auth`] |

use api::{CancelToken, RestBackend};
use dioxus::prelude::*;
use store::{ClaimDesk, ClientConfig, DossierDesk, NotificationCenter};

use crate::auth::AuthProvider;
use crate::platform::make_backend;

/// Root provider. Wrap the router with this.
#[component]
pub fn ClientProvider(config: ClientConfig, children: Element) -> Element {
    let backend = use_hook(|| make_backend(&config));
    tracing::debug!(base_url = backend.base_url(), "backend configured");

    use_context_provider(|| config.clone());
    use_context_provider(|| backend.clone());
    use_context_provider(|| Signal::new(NotificationCenter::new()));
    use_context_provider(|| Signal::new(ClaimDesk::new()));
    use_context_provider(|| Signal::new(DossierDesk::new()));

    rsx! {
        AuthProvider {
            {children}
        }
    }
}

pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

pub fn use_backend() -> RestBackend {
    use_context::<RestBackend>()
}

pub fn use_notifications() -> Signal<NotificationCenter> {
    use_context::<Signal<NotificationCenter>>()
}

pub fn use_claim_desk() -> Signal<ClaimDesk> {
    use_context::<Signal<ClaimDesk>>()
}

pub fn use_dossier_desk() -> Signal<DossierDesk> {
    use_context::<Signal<DossierDesk>>()
}

/// Token cancelled when the calling component is dropped. Fetches started by
/// the component run through it so late responses never reach its signals.
pub fn use_view_token() -> CancelToken {
    let token = use_hook(CancelToken::new);
    let on_drop = token.clone();
    use_drop(move || on_drop.cancel());
    token
}
