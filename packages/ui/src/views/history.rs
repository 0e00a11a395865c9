use api::ShipmentService;
use dioxus::prelude::*;
use store::models::Shipment;

use super::tracking::ShipmentTable;
use crate::auth::use_session;
use crate::components::Card;
use crate::context::{use_backend, use_view_token};

/// Bookings that reached a final state.
pub fn completed(shipments: Vec<Shipment>) -> Vec<Shipment> {
    shipments.into_iter().filter(|s| s.status.is_final()).collect()
}

#[component]
pub fn HistoryView() -> Element {
    let backend = use_backend();
    let session = use_session();
    let token = use_view_token();

    let mut shipments = use_signal(Vec::<Shipment>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let owner = session.map(|s| s.id);
    let _loader = use_resource(move || {
        let backend = backend.clone();
        let token = token.clone();
        let owner = owner.clone();
        async move {
            let Some(owner) = owner else { return };
            let Some(result) = token.run(ShipmentService::new(backend).owned_by(&owner)).await else {
                return;
            };
            match result {
                Ok(list) => shipments.set(completed(list)),
                Err(e) => {
                    tracing::warn!(error = %e, "failed to load history");
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        }
    });

    rsx! {
        div {
            class: "space-y-6",
            div {
                h1 { class: "text-2xl font-bold text-neutral-900", "Shipment History" }
                p { class: "text-sm text-neutral-500", "Delivered and cancelled bookings." }
            }
            if let Some(err) = error() {
                div {
                    class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                    "{err}"
                }
            }
            Card {
                no_padding: true,
                if loading() {
                    p { class: "p-6 text-sm text-neutral-500", "Loading history..." }
                } else if shipments.read().is_empty() {
                    p { class: "p-6 text-sm text-neutral-500", "No completed shipments yet." }
                } else {
                    ShipmentTable { shipments: shipments() }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_keeps_final_states() {
        let list: Vec<Shipment> = serde_json::from_value(serde_json::json!([
            {"_id": "s1", "status": "Delivered"},
            {"_id": "s2", "status": "Pending"},
            {"_id": "s3", "status": "cancelled"},
            {"_id": "s4", "status": "In Transit"}
        ]))
        .unwrap();
        let done: Vec<String> = completed(list).into_iter().map(|s| s.id).collect();
        assert_eq!(done, vec!["s1", "s3"]);
    }
}
