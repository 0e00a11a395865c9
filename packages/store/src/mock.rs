//! # Client-side mock records
//!
//! The backend has no claims or document collections, so claims and shipment
//! dossiers are generated on the client. Generation takes the RNG and the clock
//! as arguments; tests pass a seeded [`rand::rngs::StdRng`] and a fixed instant.
//!
//! Claims are attached to the customer's real shipments when there are any,
//! otherwise to placeholder bookings. A dossier's documents and timeline follow
//! the shipment's current status.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{
    AssignedAgent, Attachment, Claim, ClaimComment, ClaimStatus, ClaimType, DocumentKind,
    DocumentStatus, EventKind, Priority, Resolution, Role, Session, Shipment, ShipmentDocument,
    ShipmentDossier, ShipmentEvent, ShipmentStatus,
};

pub const CLAIM_COUNT: usize = 7;
const AGENT_ID: &str = "agent-desk";
const AGENT_NAME: &str = "CTN Claims Desk";
const PLACEHOLDER_IMAGE: &str = "https://i.pravatar.cc/300";

/// `CLM010001`, `CLM010002`, ...
pub fn claim_number(sequence: usize) -> String {
    format!("CLM{:06}", 10_000 + sequence)
}

pub fn claim_subject(kind: ClaimType) -> &'static str {
    match kind {
        ClaimType::CargoDamage => "Damaged cargo container reported on arrival",
        ClaimType::CargoLoss => "Missing items from shipment",
        ClaimType::Delay => "Significant delay in shipment arrival",
        ClaimType::Documentation => "Issues with bill of lading documentation",
        ClaimType::Billing => "Disputed charges on invoice",
        ClaimType::ServiceQuality => "Poor handling of cargo during loading",
        ClaimType::Other => "General inquiry about shipment process",
    }
}

fn claim_description(kind: ClaimType) -> &'static str {
    match kind {
        ClaimType::CargoDamage => "Multiple items in my shipment were damaged during transit. The outer packaging showed signs of rough handling and several items inside were broken.",
        ClaimType::CargoLoss => "Several items listed on the bill of lading are missing from the delivered shipment. All packages were checked.",
        ClaimType::Delay => "The shipment is well past its estimated delivery date and the delay is disrupting our operations.",
        ClaimType::Documentation => "Errors in the shipping documents are holding the cargo at customs. The country of origin and HS codes are wrong.",
        ClaimType::Billing => "The invoice includes premium services that were never requested and the weight used for pricing is incorrect.",
        ClaimType::ServiceQuality => "Communication was poor throughout the shipment and tracking information was inaccurate.",
        ClaimType::Other => "I have an issue with a recent shipment that does not fit the usual categories. Please advise.",
    }
}

fn customer_opening(kind: ClaimType) -> &'static str {
    match kind {
        ClaimType::CargoDamage => "The shipment arrived today with visible damage. Photos are attached.",
        ClaimType::CargoLoss => "Some items are missing from the delivery. The inventory is attached.",
        ClaimType::Delay => "My shipment should have arrived five days ago and is still not delivered.",
        ClaimType::Documentation => "The documents seem to contain errors that are blocking customs. Can you correct them?",
        ClaimType::Billing => "The invoice amount does not match our agreed rate.",
        ClaimType::ServiceQuality => "I am not satisfied with how this shipment was handled.",
        ClaimType::Other => "I would appreciate your help with an issue on my recent shipment.",
    }
}

const CUSTOMER_FOLLOW_UPS: [&str; 5] = [
    "Thank you for looking into this matter.",
    "I appreciate your help with resolving this issue.",
    "Could you please provide an update on the status of my claim?",
    "I have just provided the additional information you requested.",
    "When can I expect to receive compensation?",
];

fn agent_reply(status: ClaimStatus) -> &'static str {
    match status {
        ClaimStatus::Submitted | ClaimStatus::InReview => {
            "Thank you for your claim. Our investigation has started and we will keep you updated."
        }
        ClaimStatus::AdditionalInfoRequested => {
            "We need more information to process your claim. Please send any supporting documents."
        }
        ClaimStatus::Processing => {
            "Your claim has been escalated to our specialised team. A resolution is expected shortly."
        }
        ClaimStatus::Resolved | ClaimStatus::Closed => {
            "Our investigation is complete. Please see the resolution details."
        }
        ClaimStatus::Rejected => {
            "After careful review your claim has been rejected. Please refer to our terms of service on liability."
        }
        ClaimStatus::Draft => "We will review your claim as soon as it is submitted.",
    }
}

/// Generate `count` claims owned by `customer`.
pub fn generate_claims<R: Rng>(
    rng: &mut R,
    customer: &Session,
    shipments: &[Shipment],
    count: usize,
    now: DateTime<Utc>,
) -> Vec<Claim> {
    let mut claims = Vec::with_capacity(count);
    for i in 1..=count {
        let kind = *ClaimType::ALL.choose(rng).unwrap_or(&ClaimType::Other);
        let status = *ClaimStatus::ALL.choose(rng).unwrap_or(&ClaimStatus::Submitted);
        let priority = *Priority::ALL.choose(rng).unwrap_or(&Priority::Medium);

        let created_at = now - Duration::days(rng.gen_range(5..60));
        let updated_at = created_at + Duration::days(rng.gen_range(0..5));

        let (shipment_id, booking_number) = match shipments.get((i - 1) % shipments.len().max(1)) {
            Some(s) => (s.id.clone(), s.booking_number.clone()),
            None => (format!("ship-{i}"), format!("CTN{:06}", 10_000 + i)),
        };

        let comment_count = rng.gen_range(1..=4);
        let comments = (1..=comment_count)
            .map(|j| {
                let from_agent = j % 2 == 0;
                let message = if j == 1 {
                    customer_opening(kind)
                } else if from_agent {
                    agent_reply(status)
                } else {
                    CUSTOMER_FOLLOW_UPS.choose(rng).copied().unwrap_or(CUSTOMER_FOLLOW_UPS[0])
                };
                ClaimComment {
                    id: format!("comment-{i}-{j}"),
                    user_id: if from_agent { AGENT_ID.to_string() } else { customer.id.clone() },
                    user_name: if from_agent { AGENT_NAME.to_string() } else { customer.fullname.clone() },
                    user_role: if from_agent { Role::Agent } else { Role::Customer },
                    timestamp: created_at + Duration::days(j as i64),
                    message: message.to_string(),
                    attachments: if j == 1 && kind == ClaimType::CargoDamage {
                        vec![Attachment {
                            id: format!("attach-{i}-{j}"),
                            name: "damage_photo.jpg".into(),
                            file_url: PLACEHOLDER_IMAGE.into(),
                            uploaded_at: None,
                        }]
                    } else {
                        Vec::new()
                    },
                }
            })
            .collect();

        let resolution = matches!(status, ClaimStatus::Resolved | ClaimStatus::Closed).then(|| Resolution {
            resolved_at: updated_at + Duration::days(1),
            resolved_by: AGENT_NAME.to_string(),
            resolution: if kind.is_compensable() {
                "Claim approved. Compensation has been processed.".to_string()
            } else {
                "Issue has been resolved to customer satisfaction.".to_string()
            },
            compensation_amount: kind.is_compensable().then(|| rng.gen_range(500..2500)),
        });

        claims.push(Claim {
            id: format!("claim-{i}"),
            claim_number: claim_number(i),
            customer_id: customer.id.clone(),
            customer_name: customer.fullname.clone(),
            shipment_id,
            booking_number,
            kind,
            status,
            subject: claim_subject(kind).to_string(),
            description: claim_description(kind).to_string(),
            created_at,
            updated_at,
            assigned_to: (status != ClaimStatus::Draft).then(|| AssignedAgent {
                agent_id: AGENT_ID.to_string(),
                agent_name: AGENT_NAME.to_string(),
            }),
            priority,
            comments,
            attachments: if kind == ClaimType::CargoDamage {
                vec![Attachment {
                    id: format!("file-{i}-1"),
                    name: "damage_evidence.jpg".into(),
                    file_url: PLACEHOLDER_IMAGE.into(),
                    uploaded_at: Some(created_at),
                }]
            } else {
                Vec::new()
            },
            resolution,
        });
    }
    claims
}

fn document(
    id: String,
    name: &str,
    kind: DocumentKind,
    status: DocumentStatus,
    booked_at: DateTime<Utc>,
    notes: &str,
) -> ShipmentDocument {
    ShipmentDocument {
        id,
        name: name.to_string(),
        kind,
        status,
        upload_date: (status != DocumentStatus::Required).then_some(booked_at),
        last_updated: booked_at,
        notes: notes.to_string(),
    }
}

/// Document checklist and timeline consistent with `shipment.status`.
pub fn generate_dossier<R: Rng>(rng: &mut R, shipment: &Shipment, now: DateTime<Utc>) -> ShipmentDossier {
    let sid = &shipment.id;
    let booked_at = shipment
        .created_at
        .as_deref()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|d| d.with_timezone(&Utc))
        .unwrap_or_else(|| now - Duration::days(rng.gen_range(1..30)));
    let departs_at = shipment
        .departure()
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .map(|d| d.and_utc())
        .unwrap_or(booked_at + Duration::days(7));
    let status = &shipment.status;

    let submitted = if *status == ShipmentStatus::Pending {
        DocumentStatus::Required
    } else {
        *[DocumentStatus::Uploaded, DocumentStatus::Processing, DocumentStatus::Approved, DocumentStatus::Rejected]
            .choose(rng)
            .unwrap_or(&DocumentStatus::Uploaded)
    };
    let documents = vec![
        document(format!("doc-{sid}-1"), "Bill of Lading", DocumentKind::BillOfLading, submitted, booked_at, ""),
        document(format!("doc-{sid}-2"), "Commercial Invoice", DocumentKind::Invoice, submitted, booked_at, ""),
        document(
            format!("doc-{sid}-3"),
            "Customs Declaration",
            DocumentKind::CustomsDeclaration,
            DocumentStatus::Required,
            booked_at,
            "Required for import clearance",
        ),
    ];

    let mut events = Vec::new();
    let mut event = |timestamp: DateTime<Utc>, location: Option<&str>, description: &str, kind: EventKind| {
        events.push(ShipmentEvent {
            id: String::new(),
            timestamp,
            location: location.map(String::from),
            description: description.to_string(),
            kind,
        });
    };

    event(booked_at, None, "Booking created", EventKind::StatusChange);
    if !matches!(status, ShipmentStatus::Pending | ShipmentStatus::Cancelled) {
        event(booked_at + Duration::days(1), None, "Booking confirmed", EventKind::StatusChange);
    }
    let moving = matches!(
        status,
        ShipmentStatus::InTransit | ShipmentStatus::Arrived | ShipmentStatus::Delivered
    );
    if moving {
        event(departs_at, Some(shipment.origin.as_str()), "Cargo loaded on vessel", EventKind::LocationUpdate);
    }
    if *status == ShipmentStatus::InTransit {
        event(departs_at + Duration::days(1), Some("At sea"), "Vessel in transit", EventKind::LocationUpdate);
    }
    if matches!(status, ShipmentStatus::Arrived | ShipmentStatus::Delivered) {
        event(
            departs_at + Duration::days(2),
            Some(shipment.destination.as_str()),
            "Vessel arrived at destination",
            EventKind::StatusChange,
        );
    }
    if *status == ShipmentStatus::Delivered {
        event(
            departs_at + Duration::days(4),
            Some(shipment.destination.as_str()),
            "Cargo delivered to recipient",
            EventKind::StatusChange,
        );
    }
    if *status == ShipmentStatus::Cancelled {
        event(booked_at + Duration::days(2), None, "Booking cancelled", EventKind::StatusChange);
    }
    if *status == ShipmentStatus::Delayed {
        event(
            departs_at - Duration::days(1),
            Some(shipment.origin.as_str()),
            "Shipment delayed due to port congestion",
            EventKind::StatusChange,
        );
    }

    events.sort_by_key(|e| e.timestamp);
    for (n, e) in events.iter_mut().enumerate() {
        e.id = format!("event-{sid}-{}", n + 1);
    }

    ShipmentDossier {
        shipment_id: shipment.id.clone(),
        booking_number: shipment.booking_number.clone(),
        documents,
        events,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn customer() -> Session {
        Session {
            id: "u1".into(),
            fullname: "Amel Ben Salah".into(),
            email: "amel@ctn.tn".into(),
            role: Role::Customer,
            action: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn shipment(status: &str) -> Shipment {
        serde_json::from_value(serde_json::json!({
            "_id": "s1", "bookingNumber": "CTN000004", "origin": "Rades",
            "destination": "Marseille", "departdate": "2026-10-25", "vesselName": "Ulysse",
            "status": status, "cargotype": "container", "cargokg": "1200", "specialreq": "",
            "iduser": "u1", "fullname": "Amel", "email": "amel@ctn.tn"
        }))
        .unwrap()
    }

    #[test]
    fn test_claims_belong_to_customer() {
        let mut rng = StdRng::seed_from_u64(7);
        let now = Utc::now();
        let claims = generate_claims(&mut rng, &customer(), &[shipment("Delivered")], CLAIM_COUNT, now);
        assert_eq!(claims.len(), CLAIM_COUNT);
        for (i, claim) in claims.iter().enumerate() {
            assert_eq!(claim.claim_number, claim_number(i + 1));
            assert_eq!(claim.customer_id, "u1");
            assert_eq!(claim.booking_number, "CTN000004");
            assert!(!claim.comments.is_empty());
            assert_eq!(claim.comments[0].user_role, Role::Customer);
            assert_eq!(claim.resolution.is_some(), matches!(claim.status, ClaimStatus::Resolved | ClaimStatus::Closed));
            assert_eq!(claim.assigned_to.is_none(), claim.status == ClaimStatus::Draft);
            assert!(claim.created_at <= claim.updated_at);
        }
    }

    #[test]
    fn test_claims_without_shipments_use_placeholders() {
        let mut rng = StdRng::seed_from_u64(1);
        let claims = generate_claims(&mut rng, &customer(), &[], 2, Utc::now());
        assert_eq!(claims[1].shipment_id, "ship-2");
        assert_eq!(claims[1].booking_number, "CTN010002");
    }

    #[test]
    fn test_dossier_follows_status() {
        let mut rng = StdRng::seed_from_u64(3);
        let now = Utc::now();

        let pending = generate_dossier(&mut rng, &shipment("Pending"), now);
        assert_eq!(pending.events.len(), 1);
        assert_eq!(pending.pending_documents(), 3);

        let delivered = generate_dossier(&mut rng, &shipment("Delivered"), now);
        let descriptions: Vec<_> = delivered.events.iter().map(|e| e.description.as_str()).collect();
        assert!(descriptions.contains(&"Cargo delivered to recipient"));
        assert!(delivered.events.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
        assert_eq!(delivered.events[0].id, "event-s1-1");
    }
}
