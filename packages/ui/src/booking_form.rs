//! Three-step booking form: shipment details, cargo, review.
//!
//! Each "Next" validates only the fields of the current step. Submitting the
//! review step books through [`ShipmentService::book`] and hands the created
//! shipment to `on_booked`; the caller closes the form and refreshes its list.

use api::ShipmentService;
use chrono::Utc;
use dioxus::prelude::*;
use store::booking::ANY_VESSEL;
use store::models::{humanize, CargoType, Shipment};
use store::{BookingDraft, BookingStep};

use crate::auth::use_session;
use crate::components::{Button, ButtonVariant, FormError, Input, Label, Select, Textarea};
use crate::context::{use_backend, use_config};

#[component]
pub fn BookingForm(on_close: EventHandler<()>, on_booked: EventHandler<Shipment>) -> Element {
    let config = use_config();
    let backend = use_backend();
    let session = use_session();
    let mut draft = use_signal(BookingDraft::default);
    let mut step = use_signal(BookingStep::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let today = Utc::now().date_naive();
    let min_date = today.format("%Y-%m-%d").to_string();
    let booking = config.booking.clone();

    let handle_submit = {
        let booking = booking.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let current = draft();
            if let Err(message) = current.validate_step(step(), &booking, today) {
                error.set(Some(message));
                return;
            }
            error.set(None);
            if let Some(next) = step().next() {
                step.set(next);
                return;
            }

            let Some(session) = session.clone() else {
                error.set(Some("Your session has expired. Please sign in again.".into()));
                return;
            };
            let backend = backend.clone();
            let booking = booking.clone();
            spawn(async move {
                submitting.set(true);
                match ShipmentService::new(backend).book(&session, &current, &booking).await {
                    Ok(shipment) => {
                        submitting.set(false);
                        on_booked.call(shipment);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "booking failed");
                        submitting.set(false);
                        error.set(Some(e.to_string()));
                    }
                }
            });
        }
    };

    let current = step();
    let values = draft();
    let special = match values.specialreq.trim() {
        "" => "None".to_string(),
        text => text.to_string(),
    };

    rsx! {
        form {
            class: "space-y-5",
            onsubmit: handle_submit,

            ol {
                class: "flex items-center justify-between mb-2",
                for s in BookingStep::ALL {
                    li {
                        key: "{s.index()}",
                        class: "flex items-center gap-2 text-sm",
                        span {
                            class: if s.index() <= current.index() { "h-7 w-7 rounded-full flex items-center justify-center bg-primary-500 text-white" } else { "h-7 w-7 rounded-full flex items-center justify-center bg-neutral-200 text-neutral-600" },
                            "{s.index() + 1}"
                        }
                        span { class: "hidden sm:inline text-neutral-700", "{s.label()}" }
                    }
                }
            }

            if let Some(message) = error() {
                FormError { message }
            }

            {match current {
                BookingStep::Details => rsx! {
                    div {
                        Label { r#for: "origin", "Port of origin" }
                        Input { id: "origin", value: booking.origin.clone(), readonly: true }
                    }
                    div {
                        Label { r#for: "destination", "Destination" }
                        Select {
                            id: "destination",
                            value: values.destination.clone(),
                            oninput: move |evt: FormEvent| draft.write().destination = evt.value(),
                            option { value: "", "Select a destination" }
                            for port in booking.destinations.iter() {
                                option { key: "{port}", value: "{port}", "{port}" }
                            }
                        }
                    }
                    div {
                        Label { r#for: "departdate", "Departure date" }
                        Input {
                            id: "departdate",
                            r#type: "date",
                            min: min_date,
                            value: values.departdate.clone(),
                            oninput: move |evt: FormEvent| draft.write().departdate = evt.value(),
                        }
                    }
                    div {
                        Label { r#for: "vessel", "Vessel" }
                        Select {
                            id: "vessel",
                            value: values.vessel.clone(),
                            oninput: move |evt: FormEvent| draft.write().vessel = evt.value(),
                            option { value: "", "{ANY_VESSEL}" }
                            for vessel in booking.vessels.iter() {
                                option { key: "{vessel}", value: "{vessel}", "{vessel}" }
                            }
                        }
                    }
                },
                BookingStep::Cargo => rsx! {
                    div {
                        Label { r#for: "cargotype", "Cargo type" }
                        Select {
                            id: "cargotype",
                            value: values.cargotype.clone(),
                            oninput: move |evt: FormEvent| draft.write().cargotype = evt.value(),
                            option { value: "", "Select a cargo type" }
                            for cargo in CargoType::ALL {
                                option { key: "{cargo.as_str()}", value: "{cargo.as_str()}", "{cargo.label()}" }
                            }
                        }
                    }
                    div {
                        Label { r#for: "cargokg", "Weight (kg)" }
                        Input {
                            id: "cargokg",
                            r#type: "number",
                            min: "0",
                            value: values.cargokg.clone(),
                            oninput: move |evt: FormEvent| draft.write().cargokg = evt.value(),
                        }
                    }
                    div {
                        Label { r#for: "specialreq", "Special requirements" }
                        Textarea {
                            id: "specialreq",
                            rows: 3,
                            placeholder: "Refrigeration, hazardous goods, handling instructions...",
                            value: values.specialreq.clone(),
                            oninput: move |evt: FormEvent| draft.write().specialreq = evt.value(),
                        }
                    }
                },
                BookingStep::Review => rsx! {
                    dl {
                        class: "grid grid-cols-2 gap-x-4 gap-y-3 text-sm",
                        ReviewRow { label: "Origin", value: booking.origin.clone() }
                        ReviewRow { label: "Destination", value: values.destination.clone() }
                        ReviewRow { label: "Departure", value: store::models::shipment::format_date(&values.departdate) }
                        ReviewRow { label: "Vessel", value: values.vessel_or_any() }
                        ReviewRow { label: "Cargo type", value: humanize(&values.cargotype) }
                        ReviewRow { label: "Weight", value: format!("{} kg", values.cargokg.trim()) }
                        ReviewRow { label: "Special requirements", value: special.clone() }
                    }
                },
            }}

            div {
                class: "flex justify-between pt-2",
                if let Some(previous) = current.previous() {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            error.set(None);
                            step.set(previous);
                        },
                        "Back"
                    }
                } else {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                }
                Button {
                    r#type: "submit",
                    loading: submitting(),
                    if current == BookingStep::Review { "Confirm booking" } else { "Next" }
                }
            }
        }
    }
}

#[component]
fn ReviewRow(label: &'static str, value: String) -> Element {
    rsx! {
        dt { class: "text-neutral-500", "{label}" }
        dd { class: "font-medium text-neutral-900", "{value}" }
    }
}
