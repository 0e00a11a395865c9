use std::collections::HashSet;

use api::ShipmentService;
use dioxus::prelude::*;
use store::models::shipment::format_date;
use store::models::{EntityType, NotificationKind, RelatedTo, Shipment, ShipmentStatus};

use crate::components::{Button, ButtonSize, ButtonVariant, Card, StatCard, StatusBadge};
use crate::context::{use_backend, use_notifications, use_view_token};
use crate::icons::{FaAnchor, FaCircleCheck, FaHourglass};
use crate::Icon;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AgentCounters {
    pub pending: usize,
    pub confirmed: usize,
    pub vessels: usize,
}

impl AgentCounters {
    pub fn compute(shipments: &[Shipment]) -> Self {
        let vessels: HashSet<&str> = shipments
            .iter()
            .map(|s| s.vessel_name.trim())
            .filter(|v| !v.is_empty())
            .collect();
        Self {
            pending: shipments.iter().filter(|s| s.status == ShipmentStatus::Pending).count(),
            confirmed: shipments.iter().filter(|s| s.status == ShipmentStatus::Confirmed).count(),
            vessels: vessels.len(),
        }
    }
}

/// Swap the updated record into the list in place.
pub fn patch(list: &mut [Shipment], updated: Shipment) {
    if let Some(slot) = list.iter_mut().find(|s| s.id == updated.id) {
        *slot = updated;
    }
}

/// Every booking, with confirm and cancel requests per row.
#[component]
pub fn AgentDashboardView() -> Element {
    let backend = use_backend();
    let token = use_view_token();
    let mut notifications = use_notifications();

    let mut shipments = use_signal(Vec::<Shipment>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| Option::<String>::None);

    let loader_backend = backend.clone();
    let loader_token = token.clone();
    let _loader = use_resource(move || {
        let backend = loader_backend.clone();
        let token = loader_token.clone();
        async move {
            let Some(result) = token.run(ShipmentService::new(backend).all()).await else {
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

    let request = use_callback(move |(shipment, status): (Shipment, ShipmentStatus)| {
        let backend = backend.clone();
        let token = token.clone();
        spawn(async move {
            busy.set(Some(shipment.id.clone()));
            error.set(None);
            let Some(result) = token.run(ShipmentService::new(backend).request_status(&shipment, status)).await else {
                return;
            };
            match result {
                Ok(saved) => {
                    notifications.write().push(
                        "Shipment updated",
                        format!("Booking {} is now {}.", saved.booking_number, saved.status.label()),
                        NotificationKind::Success,
                        Some(RelatedTo::new(EntityType::Shipment, saved.id.clone())),
                    );
                    patch(&mut shipments.write(), saved);
                }
                Err(e) => {
                    tracing::warn!(error = %e, booking = %shipment.booking_number, "status update failed");
                    error.set(Some(e.to_string()));
                }
            }
            busy.set(None);
        });
    });

    let list = shipments();
    let counters = AgentCounters::compute(&list);

    rsx! {
        div {
            class: "space-y-6",
            div {
                h1 { class: "text-2xl font-bold text-neutral-900", "Agent Dashboard" }
                p { class: "text-sm text-neutral-500", "Review incoming bookings and confirm or cancel them." }
            }

            div {
                class: "grid grid-cols-1 sm:grid-cols-3 gap-4",
                StatCard { title: "Pending", value: counters.pending.to_string(), tone: "bg-yellow-100 text-yellow-700",
                    Icon { icon: FaHourglass, width: 20, height: 20 }
                }
                StatCard { title: "Confirmed", value: counters.confirmed.to_string(), tone: "bg-green-100 text-green-600",
                    Icon { icon: FaCircleCheck, width: 20, height: 20 }
                }
                StatCard { title: "Vessels", value: counters.vessels.to_string(),
                    Icon { icon: FaAnchor, width: 20, height: 20 }
                }
            }

            if let Some(err) = error() {
                div {
                    class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                    "{err}"
                }
            }

            Card {
                title: "Bookings",
                no_padding: true,
                if loading() {
                    p { class: "p-6 text-sm text-neutral-500", "Loading bookings..." }
                } else if list.is_empty() {
                    p { class: "p-6 text-sm text-neutral-500", "No bookings yet." }
                } else {
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "min-w-full divide-y divide-neutral-200 text-sm",
                            thead {
                                class: "bg-neutral-50 text-left text-xs font-medium text-neutral-500 uppercase tracking-wider",
                                tr {
                                    th { class: "px-6 py-3", "Booking" }
                                    th { class: "px-6 py-3", "Customer" }
                                    th { class: "px-6 py-3", "Route" }
                                    th { class: "px-6 py-3", "Departure" }
                                    th { class: "px-6 py-3", "Vessel" }
                                    th { class: "px-6 py-3", "Status" }
                                    th { class: "px-6 py-3", "" }
                                }
                            }
                            tbody {
                                class: "bg-white divide-y divide-neutral-100",
                                for shipment in list {
                                    tr {
                                        key: "{shipment.id}",
                                        td { class: "px-6 py-4 font-medium text-primary-700", "{shipment.booking_number}" }
                                        td { class: "px-6 py-4", "{shipment.fullname}" }
                                        td { class: "px-6 py-4", "{shipment.origin} → {shipment.destination}" }
                                        td { class: "px-6 py-4", "{format_date(&shipment.departdate)}" }
                                        td { class: "px-6 py-4", "{shipment.vessel_name}" }
                                        td { class: "px-6 py-4", StatusBadge { status: shipment.status.key() } }
                                        td {
                                            class: "px-6 py-4 flex gap-2 justify-end",
                                            Button {
                                                size: ButtonSize::Sm,
                                                disabled: shipment.status == ShipmentStatus::Confirmed,
                                                loading: busy().as_deref() == Some(shipment.id.as_str()),
                                                onclick: {
                                                    let shipment = shipment.clone();
                                                    move |_| {
                                                        request.call((shipment.clone(), ShipmentStatus::Confirmed));
                                                    }
                                                },
                                                "Confirm"
                                            }
                                            Button {
                                                size: ButtonSize::Sm,
                                                variant: ButtonVariant::Danger,
                                                disabled: shipment.status == ShipmentStatus::Cancelled,
                                                onclick: {
                                                    let shipment = shipment.clone();
                                                    move |_| {
                                                        request.call((shipment.clone(), ShipmentStatus::Cancelled));
                                                    }
                                                },
                                                "Cancel"
                                            }
                                        }
                                    }
                                }
                            }
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

    fn shipment(id: &str, status: ShipmentStatus, vessel: &str) -> Shipment {
        Shipment {
            id: id.into(),
            booking_number: format!("CTN{id}"),
            origin: "Rades".into(),
            destination: "Gênes".into(),
            departdate: "2026-12-01".into(),
            vessel_name: vessel.into(),
            status,
            cargotype: "trailer".into(),
            cargokg: "800".into(),
            specialreq: String::new(),
            iduser: "u1".into(),
            fullname: "Client".into(),
            email: "c@ctn.tn".into(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_counters() {
        let list = vec![
            shipment("1", ShipmentStatus::Pending, "Salambo"),
            shipment("2", ShipmentStatus::Pending, "Elyssa"),
            shipment("3", ShipmentStatus::Confirmed, "Salambo "),
            shipment("4", ShipmentStatus::Cancelled, ""),
        ];
        let counters = AgentCounters::compute(&list);
        assert_eq!(counters, AgentCounters { pending: 2, confirmed: 1, vessels: 2 });
    }

    #[test]
    fn test_patch_replaces_matching_row() {
        let mut list = vec![
            shipment("1", ShipmentStatus::Pending, "Salambo"),
            shipment("2", ShipmentStatus::Pending, "Elyssa"),
        ];
        let confirmed = list[1].with_status(ShipmentStatus::Confirmed);
        patch(&mut list, confirmed);
        assert_eq!(list[0].status, ShipmentStatus::Pending);
        assert_eq!(list[1].status, ShipmentStatus::Confirmed);

        patch(&mut list, shipment("9", ShipmentStatus::Cancelled, "Ulysse"));
        assert_eq!(list.len(), 2);
    }
}
