use chrono::Utc;
use dioxus::prelude::*;
use store::models::{humanize, Claim, ClaimType, NewClaim, Priority, Shipment};

use crate::auth::use_session;
use crate::components::{Button, ButtonVariant, FormError, Input, Label, Select, Textarea};
use crate::context::use_claim_desk;

/// New-claim form. Files the claim on the claim desk and hands it to `on_filed`.
#[component]
pub fn ClaimForm(shipments: Vec<Shipment>, on_close: EventHandler<()>, on_filed: EventHandler<Claim>) -> Element {
    let session = use_session();
    let mut desk = use_claim_desk();
    let mut claim = use_signal(NewClaim::default);
    let mut error = use_signal(|| Option::<String>::None);

    let bookings: Vec<(String, String)> = shipments
        .iter()
        .map(|s| (s.id.clone(), s.booking_number.clone()))
        .collect();
    let lookup = bookings.clone();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(session) = session.as_ref() else {
            error.set(Some("Your session has expired. Please sign in again.".into()));
            return;
        };
        let result = desk.write().create(claim(), session, Utc::now());
        match result {
            Ok(filed) => on_filed.call(filed),
            Err(message) => error.set(Some(message)),
        }
    };

    let values = claim();
    let kind = values.kind.map(|k| k.key().to_string()).unwrap_or_default();
    let priority = values.priority.unwrap_or_default().key();

    rsx! {
        form {
            class: "space-y-4",
            onsubmit: handle_submit,

            if let Some(message) = error() {
                FormError { message }
            }

            div {
                Label { r#for: "claim-booking", "Booking" }
                Select {
                    id: "claim-booking",
                    value: values.shipment_id.clone(),
                    oninput: move |evt: FormEvent| {
                        let id = evt.value();
                        let number = lookup
                            .iter()
                            .find(|(sid, _)| *sid == id)
                            .map(|(_, n)| n.clone())
                            .unwrap_or_default();
                        let mut c = claim.write();
                        c.shipment_id = id;
                        c.booking_number = number;
                    },
                    option { value: "", "Select a booking" }
                    for (id, number) in bookings {
                        option { key: "{id}", value: "{id}", "{number}" }
                    }
                }
            }
            div {
                class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                div {
                    Label { r#for: "claim-type", "Claim type" }
                    Select {
                        id: "claim-type",
                        value: kind,
                        oninput: move |evt: FormEvent| claim.write().kind = ClaimType::parse(&evt.value()),
                        option { value: "", "Select a type" }
                        for t in ClaimType::ALL {
                            option { key: "{t.key()}", value: "{t.key()}", "{humanize(t.key())}" }
                        }
                    }
                }
                div {
                    Label { r#for: "claim-priority", "Priority" }
                    Select {
                        id: "claim-priority",
                        value: priority,
                        oninput: move |evt: FormEvent| claim.write().priority = Priority::parse(&evt.value()),
                        for p in Priority::ALL {
                            option { key: "{p.key()}", value: "{p.key()}", "{humanize(p.key())}" }
                        }
                    }
                }
            }
            div {
                Label { r#for: "claim-subject", "Subject" }
                Input {
                    id: "claim-subject",
                    placeholder: "Short summary of the issue",
                    value: values.subject.clone(),
                    oninput: move |evt: FormEvent| claim.write().subject = evt.value(),
                }
            }
            div {
                Label { r#for: "claim-description", "Description" }
                Textarea {
                    id: "claim-description",
                    rows: 5,
                    value: values.description.clone(),
                    oninput: move |evt: FormEvent| claim.write().description = evt.value(),
                }
            }
            div {
                class: "flex justify-end gap-3",
                Button { variant: ButtonVariant::Ghost, onclick: move |_| on_close.call(()), "Cancel" }
                Button { r#type: "submit", "Submit claim" }
            }
        }
    }
}
