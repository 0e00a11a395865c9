use api::ShipmentService;
use dioxus::prelude::*;
use store::models::shipment::format_date;
use store::models::{Shipment, ShipmentStatus};

use crate::auth::use_session;
use crate::components::{Button, ButtonVariant, Card, Input, Select, StatusBadge};
use crate::context::{use_backend, use_view_token};

pub const ALL_STATUSES: &str = "all";

/// Shipments matching a status key (or [`ALL_STATUSES`]) and a free-text
/// query over booking number, destination and vessel.
pub fn filter_shipments(shipments: &[Shipment], status: &str, query: &str) -> Vec<Shipment> {
    let query = query.trim().to_lowercase();
    shipments
        .iter()
        .filter(|s| status == ALL_STATUSES || s.status.key() == status)
        .filter(|s| {
            query.is_empty()
                || s.booking_number.to_lowercase().contains(&query)
                || s.destination.to_lowercase().contains(&query)
                || s.vessel_name.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

#[component]
pub fn TrackingView() -> Element {
    let backend = use_backend();
    let session = use_session();
    let token = use_view_token();
    let nav = use_navigator();

    let mut shipments = use_signal(Vec::<Shipment>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut reload = use_signal(|| 0u32);
    let mut status = use_signal(|| ALL_STATUSES.to_string());
    let mut query = use_signal(String::new);

    let owner = session.map(|s| s.id);
    let _loader = use_resource(move || {
        let _ = reload();
        let backend = backend.clone();
        let token = token.clone();
        let owner = owner.clone();
        async move {
            let Some(owner) = owner else { return };
            loading.set(true);
            error.set(None);
            let Some(result) = token.run(ShipmentService::new(backend).owned_by(&owner)).await else {
                return;
            };
            match result {
                Ok(list) => shipments.set(list),
                Err(e) => {
                    tracing::warn!(error = %e, "failed to load shipments");
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        }
    });

    let visible = filter_shipments(&shipments.read(), &status(), &query());

    rsx! {
        div {
            class: "space-y-6",
            div {
                h1 { class: "text-2xl font-bold text-neutral-900", "Track Shipments" }
                p { class: "text-sm text-neutral-500", "Follow every booking from confirmation to delivery." }
            }

            Card {
                div {
                    class: "flex flex-col md:flex-row gap-3",
                    Input {
                        class: "md:flex-1",
                        placeholder: "Search by booking number, destination or vessel",
                        value: query(),
                        oninput: move |evt: FormEvent| query.set(evt.value()),
                    }
                    Select {
                        class: "md:w-56",
                        value: status(),
                        oninput: move |evt: FormEvent| status.set(evt.value()),
                        option { value: ALL_STATUSES, "All statuses" }
                        for s in ShipmentStatus::KNOWN {
                            option { key: "{s.key()}", value: "{s.key()}", "{s.label()}" }
                        }
                    }
                }
            }

            if let Some(err) = error() {
                div {
                    class: "flex items-center justify-between px-4 py-3 bg-red-50 border border-red-200 rounded text-red-600 text-sm",
                    span { "{err}" }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| reload += 1,
                        "Retry"
                    }
                }
            }

            Card {
                no_padding: true,
                if loading() {
                    p { class: "p-6 text-sm text-neutral-500", "Loading shipments..." }
                } else if visible.is_empty() {
                    p { class: "p-6 text-sm text-neutral-500", "No shipments match these filters." }
                } else {
                    ShipmentTable {
                        shipments: visible,
                        on_select: move |id: String| { nav.push(format!("/customer/tracking/{id}").as_str()); },
                    }
                }
            }
        }
    }
}

/// Read-only shipment table shared by the tracking and history screens.
#[component]
pub fn ShipmentTable(shipments: Vec<Shipment>, on_select: Option<EventHandler<String>>) -> Element {
    rsx! {
        div {
            class: "overflow-x-auto",
            table {
                class: "min-w-full divide-y divide-neutral-200 text-sm",
                thead {
                    class: "bg-neutral-50 text-left text-xs font-medium text-neutral-500 uppercase tracking-wider",
                    tr {
                        th { class: "px-6 py-3", "Booking" }
                        th { class: "px-6 py-3", "Route" }
                        th { class: "px-6 py-3", "Departure" }
                        th { class: "px-6 py-3", "Vessel" }
                        th { class: "px-6 py-3", "Cargo" }
                        th { class: "px-6 py-3", "Status" }
                    }
                }
                tbody {
                    class: "bg-white divide-y divide-neutral-100",
                    for shipment in shipments {
                        tr {
                            key: "{shipment.id}",
                            class: if on_select.is_some() { "hover:bg-neutral-50 cursor-pointer" } else { "" },
                            onclick: {
                                let id = shipment.id.clone();
                                move |_| {
                                    if let Some(handler) = &on_select {
                                        handler.call(id.clone());
                                    }
                                }
                            },
                            td { class: "px-6 py-4 font-medium text-primary-700", "{shipment.booking_number}" }
                            td { class: "px-6 py-4", "{shipment.origin} → {shipment.destination}" }
                            td { class: "px-6 py-4", "{format_date(&shipment.departdate)}" }
                            td { class: "px-6 py-4", "{shipment.vessel_name}" }
                            td { class: "px-6 py-4", "{shipment.cargotype} · {shipment.cargokg} kg" }
                            td { class: "px-6 py-4", StatusBadge { status: shipment.status.key() } }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipment(number: &str, status: &str, destination: &str) -> Shipment {
        serde_json::from_value(serde_json::json!({
            "_id": number, "bookingNumber": number, "origin": "Rades", "destination": destination,
            "departdate": "2026-12-01", "vesselName": "Salambo", "status": status,
            "cargotype": "container", "cargokg": "900", "specialreq": "", "iduser": "u1",
            "fullname": "U", "email": "u@ctn.tn"
        }))
        .unwrap()
    }

    #[test]
    fn test_filter_by_status_and_query() {
        let list = vec![
            shipment("CTN000001", "Pending", "Marseille"),
            shipment("CTN000002", "Confirmed", "Gênes"),
            shipment("CTN000003", "cancelled", "Marseille"),
        ];
        assert_eq!(filter_shipments(&list, ALL_STATUSES, "").len(), 3);
        assert_eq!(filter_shipments(&list, "pending", "").len(), 1);
        assert_eq!(filter_shipments(&list, "cancelled", "").len(), 1);
        assert_eq!(filter_shipments(&list, ALL_STATUSES, "marseille").len(), 2);
        assert_eq!(filter_shipments(&list, ALL_STATUSES, " 0002 ")[0].booking_number, "CTN000002");
        assert!(filter_shipments(&list, "delivered", "").is_empty());
    }
}
