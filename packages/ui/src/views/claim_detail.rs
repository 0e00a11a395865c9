use api::ShipmentService;
use chrono::Utc;
use dioxus::prelude::*;
use store::models::{humanize, ClaimStatus, Role};

use super::shipment_detail::stamp;
use crate::auth::use_session;
use crate::components::{Button, ButtonVariant, Card, FormError, StatusBadge, Textarea};
use crate::context::{use_backend, use_claim_desk, use_view_token};
use crate::icons::FaArrowLeft;
use crate::Icon;

/// One claim: details, comment thread, resolution.
///
/// Claims live on the client-side desk. Opening a claim link directly seeds
/// the desk from the customer's shipments first.
#[component]
pub fn ClaimDetailView(id: String) -> Element {
    let backend = use_backend();
    let session = use_session();
    let token = use_view_token();
    let mut desk = use_claim_desk();

    let mut comment = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let owner = session.clone();
    let _seed = use_resource(move || {
        let backend = backend.clone();
        let token = token.clone();
        let owner = owner.clone();
        async move {
            let Some(owner) = owner else { return };
            if desk.peek().is_seeded_for(&owner.id) {
                return;
            }
            let shipments = match token.run(ShipmentService::new(backend).owned_by(&owner.id)).await {
                None => return,
                Some(Ok(list)) => list,
                Some(Err(e)) => {
                    tracing::warn!(error = %e, "seeding claims without shipments");
                    Vec::new()
                }
            };
            desk.write().seed(&mut rand::thread_rng(), &owner, &shipments, Utc::now());
        }
    });

    let claim = match &session {
        Some(s) => desk
            .read()
            .get(&id)
            .filter(|c| c.customer_id == s.id)
            .cloned(),
        None => None,
    };

    let claim_id = id.clone();
    let author = session.clone();
    let add_comment = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(author) = author.as_ref() else { return };
        let result = desk.write().add_comment(&claim_id, author, &comment(), Utc::now());
        match result {
            Ok(_) => {
                comment.set(String::new());
                error.set(None);
            }
            Err(message) => error.set(Some(message)),
        }
    };

    let Some(claim) = claim else {
        return rsx! {
            div {
                class: "space-y-4",
                BackLink {}
                Card {
                    p { class: "text-sm text-neutral-600", "This claim does not exist or does not belong to your account." }
                }
            }
        };
    };

    let withdraw_id = claim.id.clone();
    let active = claim.status.is_active();

    rsx! {
        div {
            class: "space-y-6",
            BackLink {}
            div {
                class: "flex flex-col sm:flex-row sm:items-center sm:justify-between gap-3",
                div {
                    h1 { class: "text-2xl font-bold text-neutral-900", "{claim.subject}" }
                    p { class: "text-sm text-neutral-500", "{claim.claim_number} · booking {claim.booking_number} · filed {stamp(claim.created_at)}" }
                }
                div {
                    class: "flex items-center gap-2",
                    StatusBadge { status: claim.priority.key() }
                    StatusBadge { status: claim.status.key(), large: true }
                }
            }

            div {
                class: "grid grid-cols-1 lg:grid-cols-3 gap-6",
                div {
                    class: "lg:col-span-2 space-y-6",
                    Card {
                        title: "Description",
                        p { class: "text-sm text-neutral-700 whitespace-pre-line", "{claim.description}" }
                        if !claim.attachments.is_empty() {
                            ul {
                                class: "mt-4 space-y-1 text-sm",
                                for attachment in claim.attachments.iter() {
                                    li {
                                        key: "{attachment.id}",
                                        a { class: "text-primary-600 hover:underline", href: "{attachment.file_url}", target: "_blank", "{attachment.name}" }
                                    }
                                }
                            }
                        }
                    }
                    Card {
                        title: "Conversation",
                        ul {
                            class: "space-y-4",
                            for c in claim.comments.iter() {
                                li {
                                    key: "{c.id}",
                                    class: if c.user_role == Role::Customer { "p-3 rounded-md bg-primary-50" } else { "p-3 rounded-md bg-neutral-100" },
                                    div {
                                        class: "flex justify-between text-xs text-neutral-500 mb-1",
                                        span { "{c.user_name} ({c.user_role.label()})" }
                                        span { "{stamp(c.timestamp)}" }
                                    }
                                    p { class: "text-sm text-neutral-800", "{c.message}" }
                                }
                            }
                        }
                        if active {
                            form {
                                class: "mt-6 space-y-3",
                                onsubmit: add_comment,
                                if let Some(message) = error() {
                                    FormError { message }
                                }
                                Textarea {
                                    rows: 3,
                                    placeholder: "Add a comment",
                                    value: comment(),
                                    oninput: move |evt: FormEvent| comment.set(evt.value()),
                                }
                                div {
                                    class: "flex justify-end",
                                    Button { r#type: "submit", "Send" }
                                }
                            }
                        }
                    }
                }
                div {
                    class: "space-y-6",
                    Card {
                        title: "Details",
                        dl {
                            class: "space-y-3 text-sm",
                            div { dt { class: "text-neutral-500", "Type" } dd { class: "font-medium", "{humanize(claim.kind.key())}" } }
                            div { dt { class: "text-neutral-500", "Last update" } dd { class: "font-medium", "{stamp(claim.updated_at)}" } }
                            div {
                                dt { class: "text-neutral-500", "Assigned to" }
                                dd {
                                    class: "font-medium",
                                    {claim.assigned_to.as_ref().map(|a| a.agent_name.clone()).unwrap_or_else(|| "Not yet assigned".to_string())}
                                }
                            }
                        }
                        if active {
                            div {
                                class: "mt-6",
                                Button {
                                    variant: ButtonVariant::Outline,
                                    full_width: true,
                                    onclick: move |_| {
                                        desk.write().set_status(&withdraw_id, ClaimStatus::Closed, Utc::now());
                                    },
                                    "Withdraw claim"
                                }
                            }
                        }
                    }
                    if let Some(resolution) = &claim.resolution {
                        Card {
                            title: "Resolution",
                            p { class: "text-sm text-neutral-700", "{resolution.resolution}" }
                            if let Some(amount) = resolution.compensation_amount {
                                p { class: "mt-2 text-sm font-medium text-green-700", "Compensation: {amount} TND" }
                            }
                            p { class: "mt-2 text-xs text-neutral-500", "Resolved by {resolution.resolved_by} on {stamp(resolution.resolved_at)}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BackLink() -> Element {
    rsx! {
        Link {
            to: "/customer/claims",
            class: "inline-flex items-center gap-2 text-sm text-primary-600 hover:text-primary-800",
            Icon { icon: FaArrowLeft, width: 12, height: 12 }
            "Back to claims"
        }
    }
}
