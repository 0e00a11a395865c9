use api::ShipmentService;
use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use store::models::shipment::format_date;
use store::models::{Claim, EntityType, NotificationKind, RelatedTo, Shipment};

use super::ModalOverlay;
use crate::auth::use_session;
use crate::booking_form::BookingForm;
use crate::components::{Button, Card, StatCard, StatusBadge};
use crate::context::{use_backend, use_claim_desk, use_notifications, use_view_token};
use crate::icons::{FaCalendarDays, FaMagnifyingGlass, FaPlus, FaShip, FaTriangleExclamation, FaTruck};
use crate::Icon;

const RECENT_SHIPMENTS: usize = 5;
const RECENT_CLAIMS: usize = 3;
const UPCOMING_DAYS: i64 = 7;

/// Counters shown at the top of the customer dashboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardSummary {
    pub active_shipments: usize,
    pub active_claims: usize,
    pub upcoming_departures: usize,
    pub total_shipments: usize,
}

impl DashboardSummary {
    pub fn compute(shipments: &[Shipment], claims: &[Claim], now: DateTime<Utc>) -> Self {
        Self {
            active_shipments: shipments.iter().filter(|s| !s.status.is_final()).count(),
            active_claims: claims.iter().filter(|c| c.status.is_active()).count(),
            upcoming_departures: upcoming(shipments, now).len(),
            total_shipments: shipments.len(),
        }
    }
}

/// Shipments leaving within the next week, soonest first.
pub fn upcoming(shipments: &[Shipment], now: DateTime<Utc>) -> Vec<Shipment> {
    let mut soon: Vec<Shipment> = shipments
        .iter()
        .filter(|s| s.departs_within(now, UPCOMING_DAYS))
        .cloned()
        .collect();
    soon.sort_by_key(|s| s.departure());
    soon
}

#[component]
pub fn CustomerDashboardView() -> Element {
    let backend = use_backend();
    let session = use_session();
    let token = use_view_token();
    let mut desk = use_claim_desk();
    let mut notifications = use_notifications();
    let nav = use_navigator();

    let mut shipments = use_signal(Vec::<Shipment>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut reload = use_signal(|| 0u32);
    let mut show_booking = use_signal(|| false);

    let owner = session.clone();
    let _loader = use_resource(move || {
        let _ = reload();
        let backend = backend.clone();
        let token = token.clone();
        let owner = owner.clone();
        async move {
            let Some(owner) = owner else { return };
            loading.set(true);
            let Some(result) = token.run(ShipmentService::new(backend).owned_by(&owner.id)).await else {
                return;
            };
            match result {
                Ok(list) => {
                    desk.write().seed(&mut rand::thread_rng(), &owner, &list, Utc::now());
                    shipments.set(list);
                    error.set(None);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to load shipments");
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        }
    });

    let now = Utc::now();
    let list = shipments();
    let claims = session
        .as_ref()
        .map(|s| desk.read().claims_for(&s.id))
        .unwrap_or_default();
    let summary = DashboardSummary::compute(&list, &claims, now);
    let soon = upcoming(&list, now);
    let name = session.as_ref().map(|s| s.display_name().to_string()).unwrap_or_default();

    rsx! {
        div {
            class: "space-y-6",
            div {
                class: "flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4",
                div {
                    h1 { class: "text-2xl font-bold text-neutral-900", "Welcome back, {name}" }
                    p { class: "text-sm text-neutral-500", "Here is the latest on your shipments." }
                }
                div {
                    class: "flex gap-3",
                    Button {
                        onclick: move |_| show_booking.set(true),
                        Icon { icon: FaPlus, width: 12, height: 12, class: "mr-2" }
                        "New Booking"
                    }
                    Link {
                        to: "/customer/tracking",
                        class: "inline-flex items-center px-4 py-2 text-sm font-medium rounded-md bg-white border border-primary-300 text-primary-700 hover:bg-primary-50",
                        Icon { icon: FaMagnifyingGlass, width: 12, height: 12, class: "mr-2" }
                        "Track Shipment"
                    }
                }
            }

            if let Some(err) = error() {
                div {
                    class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                    "{err}"
                }
            }

            div {
                class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4",
                StatCard { title: "Active Shipments", value: summary.active_shipments.to_string(),
                    Icon { icon: FaTruck, width: 20, height: 20 }
                }
                StatCard { title: "Active Claims", value: summary.active_claims.to_string(), tone: "bg-orange-100 text-orange-600",
                    Icon { icon: FaTriangleExclamation, width: 20, height: 20 }
                }
                StatCard { title: "Upcoming Departures", value: summary.upcoming_departures.to_string(), tone: "bg-accent-100 text-accent-700",
                    Icon { icon: FaCalendarDays, width: 20, height: 20 }
                }
                StatCard { title: "Total Shipments", value: summary.total_shipments.to_string(), tone: "bg-green-100 text-green-600",
                    Icon { icon: FaShip, width: 20, height: 20 }
                }
            }

            div {
                class: "grid grid-cols-1 lg:grid-cols-3 gap-6",
                Card {
                    title: "Recent Shipments",
                    class: "lg:col-span-2",
                    no_padding: true,
                    if loading() {
                        p { class: "p-6 text-sm text-neutral-500", "Loading shipments..." }
                    } else if list.is_empty() {
                        p { class: "p-6 text-sm text-neutral-500", "No shipments yet. Create your first booking." }
                    } else {
                        ul {
                            class: "divide-y divide-neutral-100",
                            for shipment in list.iter().take(RECENT_SHIPMENTS).cloned() {
                                li {
                                    key: "{shipment.id}",
                                    class: "px-6 py-4 flex items-center justify-between hover:bg-neutral-50 cursor-pointer",
                                    onclick: {
                                        let path = format!("/customer/tracking/{}", shipment.id);
                                        move |_| { nav.push(path.as_str()); }
                                    },
                                    div {
                                        p { class: "text-sm font-medium text-primary-700", "{shipment.booking_number}" }
                                        p { class: "text-xs text-neutral-500", "{shipment.origin} → {shipment.destination} · {format_date(&shipment.departdate)}" }
                                    }
                                    StatusBadge { status: shipment.status.key() }
                                }
                            }
                        }
                    }
                }
                div {
                    class: "space-y-6",
                    Card {
                        title: "Upcoming Departures",
                        if soon.is_empty() {
                            p { class: "text-sm text-neutral-500", "Nothing leaves in the next {UPCOMING_DAYS} days." }
                        } else {
                            ul {
                                class: "space-y-3",
                                for shipment in soon {
                                    li {
                                        key: "{shipment.id}",
                                        class: "flex justify-between text-sm",
                                        span { class: "font-medium", "{shipment.booking_number}" }
                                        span { class: "text-neutral-500", "{format_date(&shipment.departdate)} · {shipment.vessel_name}" }
                                    }
                                }
                            }
                        }
                    }
                    Card {
                        title: "Recent Claims",
                        if claims.is_empty() {
                            p { class: "text-sm text-neutral-500", "No claims filed." }
                        } else {
                            ul {
                                class: "space-y-3",
                                for claim in claims.into_iter().take(RECENT_CLAIMS) {
                                    li {
                                        key: "{claim.id}",
                                        Link {
                                            to: format!("/customer/claims/{}", claim.id),
                                            class: "flex justify-between items-center text-sm hover:text-primary-700",
                                            span { class: "truncate mr-2", "{claim.subject}" }
                                            StatusBadge { status: claim.status.key() }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if show_booking() {
            ModalOverlay {
                title: "New Booking",
                wide: true,
                on_close: move |_| show_booking.set(false),
                BookingForm {
                    on_close: move |_| show_booking.set(false),
                    on_booked: move |shipment: Shipment| {
                        show_booking.set(false);
                        notifications.write().push(
                            "Booking created",
                            format!("Booking {} is pending confirmation.", shipment.booking_number),
                            NotificationKind::Success,
                            Some(RelatedTo::new(EntityType::Booking, shipment.id.clone())),
                        );
                        reload += 1;
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use store::models::ShipmentStatus;

    fn shipment(id: &str, status: ShipmentStatus, departs: &str) -> Shipment {
        Shipment {
            id: id.into(),
            booking_number: format!("CTN00000{id}"),
            origin: "Rades".into(),
            destination: "Marseille".into(),
            departdate: departs.into(),
            vessel_name: "Elyssa".into(),
            status,
            cargotype: "container".into(),
            cargokg: "1000".into(),
            specialreq: String::new(),
            iduser: "u1".into(),
            fullname: "U".into(),
            email: "u@ctn.tn".into(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_summary_counts() {
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap();
        let list = vec![
            shipment("1", ShipmentStatus::Pending, "2026-03-12"),
            shipment("2", ShipmentStatus::Confirmed, "2026-03-16"),
            shipment("3", ShipmentStatus::Delivered, "2026-01-02"),
            shipment("4", ShipmentStatus::Cancelled, "2026-03-11"),
            shipment("5", ShipmentStatus::InTransit, "2026-04-30"),
        ];
        let summary = DashboardSummary::compute(&list, &[], now);
        assert_eq!(summary.total_shipments, 5);
        assert_eq!(summary.active_shipments, 3);
        assert_eq!(summary.upcoming_departures, 3);
        assert_eq!(summary.active_claims, 0);

        let soon: Vec<String> = upcoming(&list, now).into_iter().map(|s| s.id).collect();
        assert_eq!(soon, vec!["4", "1", "2"]);
        assert!(upcoming(&list, now + Duration::days(60)).is_empty());
    }
}
