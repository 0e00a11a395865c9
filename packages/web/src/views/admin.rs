use dioxus::prelude::*;
use store::models::Role;
use ui::views::AdminDashboardView;
use ui::ProtectedRoute;

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        ProtectedRoute { roles: vec![Role::Admin], AdminDashboardView {} }
    }
}
