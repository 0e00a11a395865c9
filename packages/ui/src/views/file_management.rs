use api::ShipmentService;
use chrono::Utc;
use dioxus::prelude::*;
use store::models::shipment::format_date;
use store::models::{DocumentStatus, EntityType, NotificationKind, RelatedTo, Shipment, ShipmentDocument};

use crate::components::{Button, ButtonSize, ButtonVariant, Card, Label, Select, StatusBadge};
use crate::context::{use_backend, use_dossier_desk, use_notifications, use_view_token};
use crate::icons::{FaFileArrowUp, FaFolderOpen};
use crate::views::shipment_detail::stamp;
use crate::Icon;

/// Documents the agent can (re-)upload.
pub fn needs_upload(document: &ShipmentDocument) -> bool {
    matches!(document.status, DocumentStatus::Required | DocumentStatus::Rejected)
}

/// Document checklists across all bookings.
#[component]
pub fn FileManagementView() -> Element {
    let backend = use_backend();
    let token = use_view_token();
    let mut dossiers = use_dossier_desk();
    let mut notifications = use_notifications();

    let mut shipments = use_signal(Vec::<Shipment>::new);
    let mut selected = use_signal(String::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || {
        let backend = backend.clone();
        let token = token.clone();
        async move {
            let Some(result) = token.run(ShipmentService::new(backend).all()).await else {
                return;
            };
            match result {
                Ok(list) => {
                    if let Some(first) = list.first() {
                        if selected.peek().is_empty() {
                            dossiers.write().ensure(&mut rand::thread_rng(), first, Utc::now());
                            selected.set(first.id.clone());
                        }
                    }
                    shipments.set(list);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to load shipments");
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        }
    });

    let list = shipments();
    let current = list.iter().find(|s| s.id == selected()).cloned();
    let dossier = current.as_ref().and_then(|s| dossiers.read().get(&s.id).cloned());

    let mut upload = move |shipment: Shipment, document: ShipmentDocument| {
        let Some(saved) = dossiers.write().upload(&shipment.id, &document.id, Utc::now()) else {
            return;
        };
        notifications.write().push(
            "Document uploaded",
            format!("{} for booking {} was uploaded.", saved.name, shipment.booking_number),
            NotificationKind::Success,
            Some(RelatedTo::new(EntityType::Document, shipment.id.clone())),
        );
    };

    rsx! {
        div {
            class: "space-y-6",
            div {
                h1 { class: "text-2xl font-bold text-neutral-900", "File Management" }
                p { class: "text-sm text-neutral-500", "Collect and track the documents attached to each booking." }
            }

            if let Some(err) = error() {
                div {
                    class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                    "{err}"
                }
            }

            if loading() {
                p { class: "text-sm text-neutral-500", "Loading bookings..." }
            } else if list.is_empty() {
                Card {
                    div {
                        class: "flex flex-col items-center gap-2 py-6 text-neutral-500",
                        Icon { icon: FaFolderOpen, width: 28, height: 28 }
                        p { class: "text-sm", "No bookings to manage yet." }
                    }
                }
            } else {
                Card {
                    div {
                        class: "max-w-md",
                        Label { r#for: "booking", "Booking" }
                        Select {
                            id: "booking",
                            value: selected(),
                            oninput: move |e: FormEvent| {
                                let id = e.value();
                                if let Some(shipment) = shipments.peek().iter().find(|s| s.id == id) {
                                    dossiers.write().ensure(&mut rand::thread_rng(), shipment, Utc::now());
                                }
                                selected.set(id);
                            },
                            for shipment in list.iter() {
                                option {
                                    key: "{shipment.id}",
                                    value: "{shipment.id}",
                                    "{shipment.booking_number} · {shipment.fullname} · {shipment.destination}"
                                }
                            }
                        }
                    }
                }

                if let (Some(shipment), Some(dossier)) = (current, dossier) {
                    Card {
                        title: format!("Documents for {}", shipment.booking_number),
                        subtitle: format!(
                            "Departure {} · {} awaiting action",
                            format_date(&shipment.departdate),
                            dossier.pending_documents()
                        ),
                        no_padding: true,
                        table {
                            class: "min-w-full divide-y divide-neutral-200 text-sm",
                            thead {
                                class: "bg-neutral-50 text-left text-xs font-medium text-neutral-500 uppercase tracking-wider",
                                tr {
                                    th { class: "px-6 py-3", "Document" }
                                    th { class: "px-6 py-3", "Status" }
                                    th { class: "px-6 py-3", "Last updated" }
                                    th { class: "px-6 py-3", "" }
                                }
                            }
                            tbody {
                                class: "bg-white divide-y divide-neutral-100",
                                for document in dossier.documents.iter() {
                                    tr {
                                        key: "{document.id}",
                                        td {
                                            class: "px-6 py-4",
                                            p { class: "font-medium", "{document.name}" }
                                            if !document.notes.is_empty() {
                                                p { class: "text-xs text-neutral-500", "{document.notes}" }
                                            }
                                        }
                                        td { class: "px-6 py-4", StatusBadge { status: document.status.key() } }
                                        td { class: "px-6 py-4 text-neutral-500", "{stamp(document.last_updated)}" }
                                        td {
                                            class: "px-6 py-4 text-right",
                                            if needs_upload(document) {
                                                Button {
                                                    size: ButtonSize::Sm,
                                                    variant: ButtonVariant::Outline,
                                                    onclick: {
                                                        let shipment = shipment.clone();
                                                        let document = document.clone();
                                                        move |_| upload(shipment.clone(), document.clone())
                                                    },
                                                    Icon { icon: FaFileArrowUp, width: 12, height: 12 }
                                                    "Upload"
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use store::models::DocumentKind;

    #[test]
    fn test_needs_upload() {
        let at = Utc.with_ymd_and_hms(2026, 5, 2, 8, 0, 0).unwrap();
        let mut doc = ShipmentDocument {
            id: "d1".into(),
            name: "Invoice".into(),
            kind: DocumentKind::Invoice,
            status: DocumentStatus::Required,
            upload_date: None,
            last_updated: at,
            notes: String::new(),
        };
        assert!(needs_upload(&doc));
        doc.status = DocumentStatus::Rejected;
        assert!(needs_upload(&doc));
        doc.status = DocumentStatus::Approved;
        assert!(!needs_upload(&doc));
    }
}
