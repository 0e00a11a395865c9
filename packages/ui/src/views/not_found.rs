use dioxus::prelude::*;

use crate::auth::use_session;
use crate::icons::FaCompass;
use crate::Icon;

/// Catch-all page. Links back to the caller's dashboard, or the login screen.
#[component]
pub fn NotFoundView(#[props(into, default)] path: String) -> Element {
    let home = use_session()
        .map(|s| s.role.dashboard_path())
        .unwrap_or(store::guard::LOGIN_PATH);

    rsx! {
        div {
            class: "min-h-[60vh] flex flex-col items-center justify-center gap-4 text-center px-4",
            Icon { icon: FaCompass, width: 40, height: 40, class: "text-primary-400" }
            h1 { class: "text-3xl font-bold text-neutral-900", "Page not found" }
            if !path.is_empty() {
                p { class: "text-sm text-neutral-500 font-mono", "/{path}" }
            }
            p { class: "text-neutral-600", "The page you are looking for does not exist or has moved." }
            Link {
                to: home,
                class: "px-4 py-2 rounded-md bg-primary-600 text-white text-sm font-medium hover:bg-primary-700",
                "Go home"
            }
        }
    }
}
