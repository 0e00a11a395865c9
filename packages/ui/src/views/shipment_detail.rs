use api::ShipmentService;
use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use store::models::shipment::format_date;
use store::models::{humanize, EventKind, Shipment, ShipmentDossier};

use crate::auth::use_session;
use crate::components::{Card, StatusBadge};
use crate::context::{use_backend, use_dossier_desk, use_view_token};
use crate::icons::{FaArrowLeft, FaLocationDot};
use crate::Icon;

/// Timeline entries, oldest first.
pub fn timeline(dossier: &ShipmentDossier) -> Vec<store::models::ShipmentEvent> {
    let mut events = dossier.events.clone();
    events.sort_by_key(|e| e.timestamp);
    events
}

pub(crate) fn stamp(at: DateTime<Utc>) -> String {
    at.format("%d/%m/%Y %H:%M").to_string()
}

fn event_label(kind: EventKind) -> &'static str {
    match kind {
        EventKind::StatusChange => "Status",
        EventKind::DocumentUpdate => "Document",
        EventKind::LocationUpdate => "Location",
        EventKind::Note => "Note",
    }
}

/// One of the customer's shipments with its document checklist and timeline.
#[component]
pub fn ShipmentDetailView(id: String) -> Element {
    let backend = use_backend();
    let session = use_session();
    let token = use_view_token();
    let mut dossiers = use_dossier_desk();

    let mut shipment = use_signal(|| Option::<Shipment>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let owner = session.map(|s| s.id);
    let wanted = id.clone();
    let _loader = use_resource(move || {
        let backend = backend.clone();
        let token = token.clone();
        let owner = owner.clone();
        let wanted = wanted.clone();
        async move {
            let Some(owner) = owner else { return };
            loading.set(true);
            let Some(result) = token.run(ShipmentService::new(backend).owned_one(&owner, &wanted)).await else {
                return;
            };
            match result {
                Ok(Some(found)) => {
                    dossiers.write().ensure(&mut rand::thread_rng(), &found, Utc::now());
                    shipment.set(Some(found));
                }
                Ok(None) => shipment.set(None),
                Err(e) => {
                    tracing::warn!(error = %e, shipment = %wanted, "failed to load shipment");
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        }
    });

    let dossier = dossiers.read().get(&id).cloned();

    rsx! {
        div {
            class: "space-y-6",
            Link {
                to: "/customer/tracking",
                class: "inline-flex items-center gap-2 text-sm text-primary-600 hover:text-primary-800",
                Icon { icon: FaArrowLeft, width: 12, height: 12 }
                "Back to shipments"
            }

            if let Some(err) = error() {
                div {
                    class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                    "{err}"
                }
            }

            if loading() {
                p { class: "text-sm text-neutral-500", "Loading shipment..." }
            } else if let Some(s) = shipment() {
                div {
                    class: "flex items-center justify-between",
                    h1 { class: "text-2xl font-bold text-neutral-900", "Booking {s.booking_number}" }
                    StatusBadge { status: s.status.key(), large: true }
                }
                Card {
                    title: "Shipment",
                    dl {
                        class: "grid grid-cols-1 sm:grid-cols-3 gap-4 text-sm",
                        Field { label: "Origin", value: s.origin.clone() }
                        Field { label: "Destination", value: s.destination.clone() }
                        Field { label: "Departure", value: format_date(&s.departdate) }
                        Field { label: "Vessel", value: s.vessel_name.clone() }
                        Field { label: "Cargo", value: humanize(&s.cargotype) }
                        Field { label: "Weight", value: format!("{} kg", s.cargokg) }
                    }
                    if !s.specialreq.trim().is_empty() {
                        p { class: "mt-4 text-sm text-neutral-600", "Special requirements: {s.specialreq}" }
                    }
                }
                if let Some(dossier) = dossier {
                    div {
                        class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
                        Card {
                            title: "Documents",
                            subtitle: format!("{} awaiting action", dossier.pending_documents()),
                            ul {
                                class: "divide-y divide-neutral-100",
                                for doc in dossier.documents.iter() {
                                    li {
                                        key: "{doc.id}",
                                        class: "py-3 flex items-center justify-between text-sm",
                                        div {
                                            p { class: "font-medium", "{doc.name}" }
                                            if !doc.notes.is_empty() {
                                                p { class: "text-xs text-neutral-500", "{doc.notes}" }
                                            }
                                        }
                                        StatusBadge { status: doc.status.key() }
                                    }
                                }
                            }
                        }
                        Card {
                            title: "Timeline",
                            ol {
                                class: "relative border-l border-neutral-200 ml-2 space-y-4",
                                for event in timeline(&dossier) {
                                    li {
                                        key: "{event.id}",
                                        class: "ml-4",
                                        div { class: "absolute -left-1.5 mt-1.5 h-3 w-3 rounded-full bg-primary-400" }
                                        p { class: "text-xs text-neutral-500", "{stamp(event.timestamp)} · {event_label(event.kind)}" }
                                        p { class: "text-sm text-neutral-900", "{event.description}" }
                                        if let Some(location) = &event.location {
                                            p {
                                                class: "text-xs text-neutral-500 flex items-center gap-1",
                                                Icon { icon: FaLocationDot, width: 10, height: 10 }
                                                "{location}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            } else if error().is_none() {
                Card {
                    p { class: "text-sm text-neutral-600", "This shipment does not exist or does not belong to your account." }
                }
            }
        }
    }
}

#[component]
fn Field(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            dt { class: "text-neutral-500", "{label}" }
            dd { class: "font-medium text-neutral-900", "{value}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use store::models::ShipmentStatus;

    #[test]
    fn test_timeline_is_chronological() {
        let shipment: Shipment = serde_json::from_value(serde_json::json!({
            "_id": "s1", "bookingNumber": "CTN000001", "status": "in_transit",
            "departdate": "2026-03-01", "iduser": "u1"
        }))
        .unwrap();
        assert_eq!(shipment.status, ShipmentStatus::InTransit);
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap();
        let dossier = store::mock::generate_dossier(&mut StdRng::seed_from_u64(7), &shipment, now);
        let events = timeline(&dossier);
        assert_eq!(events.len(), dossier.events.len());
        assert!(events.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }
}
