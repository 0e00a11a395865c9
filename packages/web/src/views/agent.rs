use dioxus::prelude::*;
use store::models::Role;
use ui::views::{AgentDashboardView, FileManagementView};
use ui::ProtectedRoute;

#[component]
pub fn AgentDashboard() -> Element {
    rsx! {
        ProtectedRoute { roles: vec![Role::Agent], AgentDashboardView {} }
    }
}

#[component]
pub fn FileManagement() -> Element {
    rsx! {
        ProtectedRoute { roles: vec![Role::Agent], FileManagementView {} }
    }
}
