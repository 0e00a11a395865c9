use api::ShipmentService;
use chrono::Utc;
use dioxus::prelude::*;
use store::models::{humanize, Claim, ClaimStatus, EntityType, NotificationKind, RelatedTo, Shipment};

use super::shipment_detail::stamp;
use super::tracking::ALL_STATUSES;
use super::ModalOverlay;
use crate::auth::use_session;
use crate::claim_form::ClaimForm;
use crate::components::{Button, Card, Select, StatusBadge};
use crate::context::{use_backend, use_claim_desk, use_notifications, use_view_token};
use crate::icons::FaPlus;
use crate::Icon;

pub fn filter_claims(claims: Vec<Claim>, status: &str) -> Vec<Claim> {
    claims
        .into_iter()
        .filter(|c| status == ALL_STATUSES || c.status.key() == status)
        .collect()
}

#[component]
pub fn ClaimsView() -> Element {
    let backend = use_backend();
    let session = use_session();
    let token = use_view_token();
    let mut desk = use_claim_desk();
    let mut notifications = use_notifications();
    let nav = use_navigator();

    let mut shipments = use_signal(Vec::<Shipment>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut status = use_signal(|| ALL_STATUSES.to_string());
    let mut show_form = use_signal(|| false);

    let owner = session.clone();
    let _loader = use_resource(move || {
        let backend = backend.clone();
        let token = token.clone();
        let owner = owner.clone();
        async move {
            let Some(owner) = owner else { return };
            let Some(result) = token.run(ShipmentService::new(backend).owned_by(&owner.id)).await else {
                return;
            };
            match result {
                Ok(list) => {
                    desk.write().seed(&mut rand::thread_rng(), &owner, &list, Utc::now());
                    shipments.set(list);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to load shipments for claims");
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        }
    });

    let claims = session
        .as_ref()
        .map(|s| desk.read().claims_for(&s.id))
        .unwrap_or_default();
    let visible = filter_claims(claims, &status());

    rsx! {
        div {
            class: "space-y-6",
            div {
                class: "flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4",
                div {
                    h1 { class: "text-2xl font-bold text-neutral-900", "Claims" }
                    p { class: "text-sm text-neutral-500", "Report damage, loss, delays or billing issues on your bookings." }
                }
                Button {
                    onclick: move |_| show_form.set(true),
                    Icon { icon: FaPlus, width: 12, height: 12, class: "mr-2" }
                    "New Claim"
                }
            }

            if let Some(err) = error() {
                div {
                    class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                    "{err}"
                }
            }

            Card {
                no_padding: true,
                div {
                    class: "px-6 py-4 border-b border-neutral-200 flex justify-end",
                    Select {
                        class: "sm:w-64",
                        value: status(),
                        oninput: move |evt: FormEvent| status.set(evt.value()),
                        option { value: ALL_STATUSES, "All statuses" }
                        for s in ClaimStatus::ALL {
                            option { key: "{s.key()}", value: "{s.key()}", "{humanize(s.key())}" }
                        }
                    }
                }
                if loading() {
                    p { class: "p-6 text-sm text-neutral-500", "Loading claims..." }
                } else if visible.is_empty() {
                    p { class: "p-6 text-sm text-neutral-500", "No claims to show." }
                } else {
                    ul {
                        class: "divide-y divide-neutral-100",
                        for claim in visible {
                            li {
                                key: "{claim.id}",
                                class: "px-6 py-4 hover:bg-neutral-50 cursor-pointer",
                                onclick: {
                                    let path = format!("/customer/claims/{}", claim.id);
                                    move |_| { nav.push(path.as_str()); }
                                },
                                div {
                                    class: "flex items-center justify-between",
                                    div {
                                        p { class: "text-sm font-medium text-neutral-900", "{claim.subject}" }
                                        p { class: "text-xs text-neutral-500", "{claim.claim_number} · {claim.booking_number} · {humanize(claim.kind.key())} · updated {stamp(claim.updated_at)}" }
                                    }
                                    div {
                                        class: "flex items-center gap-2",
                                        StatusBadge { status: claim.priority.key() }
                                        StatusBadge { status: claim.status.key() }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if show_form() {
            ModalOverlay {
                title: "New Claim",
                wide: true,
                on_close: move |_| show_form.set(false),
                ClaimForm {
                    shipments: shipments(),
                    on_close: move |_| show_form.set(false),
                    on_filed: move |claim: Claim| {
                        show_form.set(false);
                        notifications.write().push(
                            "Claim submitted",
                            format!("Claim {} was submitted for booking {}.", claim.claim_number, claim.booking_number),
                            NotificationKind::Info,
                            Some(RelatedTo::new(EntityType::Claim, claim.id.clone())),
                        );
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use store::models::{Role, Session};

    #[test]
    fn test_filter_claims_by_status() {
        let customer = Session {
            id: "u1".into(),
            fullname: "Amel".into(),
            email: "amel@ctn.tn".into(),
            role: Role::Customer,
            action: None,
            created_at: None,
            updated_at: None,
        };
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap();
        let claims = store::mock::generate_claims(&mut StdRng::seed_from_u64(3), &customer, &[], 7, now);

        assert_eq!(filter_claims(claims.clone(), ALL_STATUSES).len(), claims.len());
        for status in ClaimStatus::ALL {
            let expected = claims.iter().filter(|c| c.status == status).count();
            assert_eq!(filter_claims(claims.clone(), status.key()).len(), expected);
        }
    }
}
