use dioxus::prelude::*;
use store::models::Role;
use ui::views::AppLayout;
use ui::ProtectedRoute;

use crate::Route;

/// Signed-in chrome shared by every portal. Each page narrows the role set
/// further with its own guard.
#[component]
pub fn Shell() -> Element {
    rsx! {
        ProtectedRoute {
            roles: Role::ALL.to_vec(),
            AppLayout {
                Outlet::<Route> {}
            }
        }
    }
}
