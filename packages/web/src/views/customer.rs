//! Customer portal pages.

use dioxus::prelude::*;
use store::models::Role;
use ui::views::{ClaimDetailView, ClaimsView, CustomerDashboardView, HistoryView, ShipmentDetailView, TrackingView};
use ui::ProtectedRoute;

#[component]
pub fn CustomerDashboard() -> Element {
    rsx! {
        ProtectedRoute { roles: vec![Role::Customer], CustomerDashboardView {} }
    }
}

#[component]
pub fn Tracking() -> Element {
    rsx! {
        ProtectedRoute { roles: vec![Role::Customer], TrackingView {} }
    }
}

#[component]
pub fn ShipmentDetail(id: String) -> Element {
    rsx! {
        ProtectedRoute {
            roles: vec![Role::Customer],
            // keyed so a new id remounts the view and reloads
            ShipmentDetailView { key: "{id}", id: id.clone() }
        }
    }
}

#[component]
pub fn Claims() -> Element {
    rsx! {
        ProtectedRoute { roles: vec![Role::Customer], ClaimsView {} }
    }
}

#[component]
pub fn ClaimDetail(id: String) -> Element {
    rsx! {
        ProtectedRoute {
            roles: vec![Role::Customer],
            ClaimDetailView { key: "{id}", id: id.clone() }
        }
    }
}

#[component]
pub fn History() -> Element {
    rsx! {
        ProtectedRoute { roles: vec![Role::Customer], HistoryView {} }
    }
}
