//! In-memory holders for the client-side records: claims and shipment
//! dossiers. Screens keep one of each in context and mutate it after a
//! user action, the same way they patch lists fetched from the backend.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::mock::{claim_number, generate_claims, generate_dossier, CLAIM_COUNT};
use crate::models::{
    Claim, ClaimComment, ClaimStatus, ClaimType, NewClaim, Priority, Session, Shipment,
    ShipmentDocument, ShipmentDossier,
};

impl NewClaim {
    pub fn validate(&self) -> Result<(), String> {
        if self.shipment_id.trim().is_empty() {
            return Err("Please select the booking this claim is about.".into());
        }
        if self.kind.is_none() {
            return Err("Please select a claim type.".into());
        }
        if self.subject.trim().is_empty() {
            return Err("Please enter a subject.".into());
        }
        if self.description.trim().is_empty() {
            return Err("Please describe the issue.".into());
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClaimDesk {
    claims: Vec<Claim>,
    seeded_for: Option<String>,
}

impl ClaimDesk {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the customer's claims once. Later calls for the same customer
    /// keep what is already there, including claims filed since.
    pub fn seed<R: Rng>(&mut self, rng: &mut R, customer: &Session, shipments: &[Shipment], now: DateTime<Utc>) {
        if self.seeded_for.as_deref() == Some(customer.id.as_str()) {
            return;
        }
        self.claims = generate_claims(rng, customer, shipments, CLAIM_COUNT, now);
        self.seeded_for = Some(customer.id.clone());
        tracing::debug!(customer = %customer.id, count = self.claims.len(), "claims seeded");
    }

    pub fn is_seeded_for(&self, customer_id: &str) -> bool {
        self.seeded_for.as_deref() == Some(customer_id)
    }

    /// Claims of one customer, most recently updated first.
    pub fn claims_for(&self, customer_id: &str) -> Vec<Claim> {
        let mut claims: Vec<Claim> = self
            .claims
            .iter()
            .filter(|c| c.customer_id == customer_id)
            .cloned()
            .collect();
        claims.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        claims
    }

    pub fn get(&self, id: &str) -> Option<&Claim> {
        self.claims.iter().find(|c| c.id == id)
    }

    /// File a claim. It starts as submitted with the description as its first comment.
    pub fn create(&mut self, new: NewClaim, customer: &Session, now: DateTime<Utc>) -> Result<Claim, String> {
        new.validate()?;
        let sequence = self.claims.len() + 1;
        let id = format!("claim-{sequence}");
        let description = new.description.trim().to_string();
        let claim = Claim {
            id: id.clone(),
            claim_number: claim_number(sequence),
            customer_id: customer.id.clone(),
            customer_name: customer.fullname.clone(),
            shipment_id: new.shipment_id,
            booking_number: new.booking_number,
            kind: new.kind.unwrap_or(ClaimType::Other),
            status: ClaimStatus::Submitted,
            subject: new.subject.trim().to_string(),
            description: description.clone(),
            created_at: now,
            updated_at: now,
            assigned_to: None,
            priority: new.priority.unwrap_or(Priority::Medium),
            comments: vec![ClaimComment {
                id: format!("comment-{id}-1"),
                user_id: customer.id.clone(),
                user_name: customer.fullname.clone(),
                user_role: customer.role,
                timestamp: now,
                message: description,
                attachments: Vec::new(),
            }],
            attachments: Vec::new(),
            resolution: None,
        };
        tracing::info!(claim = %claim.claim_number, booking = %claim.booking_number, "claim filed");
        self.claims.push(claim.clone());
        Ok(claim)
    }

    pub fn set_status(&mut self, id: &str, status: ClaimStatus, now: DateTime<Utc>) -> Option<&Claim> {
        let claim = self.claims.iter_mut().find(|c| c.id == id)?;
        claim.status = status;
        claim.updated_at = now;
        Some(claim)
    }

    pub fn add_comment(
        &mut self,
        id: &str,
        author: &Session,
        message: &str,
        now: DateTime<Utc>,
    ) -> Result<ClaimComment, String> {
        let message = message.trim();
        if message.is_empty() {
            return Err("Comment cannot be empty.".into());
        }
        let claim = self
            .claims
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| "Claim not found".to_string())?;
        let comment = ClaimComment {
            id: format!("comment-{id}-{}", claim.comments.len() + 1),
            user_id: author.id.clone(),
            user_name: author.display_name().to_string(),
            user_role: author.role,
            timestamp: now,
            message: message.to_string(),
            attachments: Vec::new(),
        };
        claim.comments.push(comment.clone());
        claim.updated_at = now;
        Ok(comment)
    }

    pub fn active_count(&self, customer_id: &str) -> usize {
        self.claims
            .iter()
            .filter(|c| c.customer_id == customer_id && c.status.is_active())
            .count()
    }
}

/// Dossiers keyed by shipment id, generated on first access.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DossierDesk {
    dossiers: HashMap<String, ShipmentDossier>,
}

impl DossierDesk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ensure<R: Rng>(&mut self, rng: &mut R, shipment: &Shipment, now: DateTime<Utc>) -> &ShipmentDossier {
        self.dossiers
            .entry(shipment.id.clone())
            .or_insert_with(|| generate_dossier(rng, shipment, now))
    }

    pub fn get(&self, shipment_id: &str) -> Option<&ShipmentDossier> {
        self.dossiers.get(shipment_id)
    }

    pub fn upload(&mut self, shipment_id: &str, document_id: &str, now: DateTime<Utc>) -> Option<ShipmentDocument> {
        let document = self.dossiers.get_mut(shipment_id)?.upload_document(document_id, now)?;
        tracing::info!(shipment = shipment_id, document = %document.name, "document uploaded");
        Some(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DocumentStatus, EventKind, Role};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session(id: &str, role: Role) -> Session {
        Session {
            id: id.into(),
            fullname: format!("User {id}"),
            email: format!("{id}@ctn.tn"),
            role,
            action: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn shipment() -> Shipment {
        serde_json::from_value(serde_json::json!({
            "_id": "s1", "bookingNumber": "CTN000004", "origin": "Rades",
            "destination": "Marseille", "departdate": "2026-10-25", "vesselName": "Ulysse",
            "status": "Confirmed", "cargotype": "container", "cargokg": "1200", "specialreq": "",
            "iduser": "u1", "fullname": "Amel", "email": "amel@ctn.tn"
        }))
        .unwrap()
    }

    fn new_claim() -> NewClaim {
        NewClaim {
            shipment_id: "s1".into(),
            booking_number: "CTN000004".into(),
            kind: Some(ClaimType::Delay),
            subject: "Late arrival".into(),
            description: "Ten days late".into(),
            priority: None,
        }
    }

    #[test]
    fn test_seed_once_per_customer() {
        let mut rng = StdRng::seed_from_u64(11);
        let customer = session("u1", Role::Customer);
        let mut desk = ClaimDesk::new();
        desk.seed(&mut rng, &customer, &[shipment()], Utc::now());
        assert_eq!(desk.claims_for("u1").len(), CLAIM_COUNT);

        desk.create(new_claim(), &customer, Utc::now()).unwrap();
        desk.seed(&mut rng, &customer, &[shipment()], Utc::now());
        assert_eq!(desk.claims_for("u1").len(), CLAIM_COUNT + 1);
        assert!(desk.claims_for("someone-else").is_empty());
    }

    #[test]
    fn test_create_and_comment() {
        let customer = session("u1", Role::Customer);
        let agent = session("a1", Role::Agent);
        let mut desk = ClaimDesk::new();
        let now = Utc::now();

        let claim = desk.create(new_claim(), &customer, now).unwrap();
        assert_eq!(claim.claim_number, "CLM010001");
        assert_eq!(claim.status, ClaimStatus::Submitted);
        assert_eq!(claim.priority, Priority::Medium);
        assert_eq!(claim.comments[0].message, "Ten days late");

        let reply = desk.add_comment(&claim.id, &agent, "  Looking into it ", now).unwrap();
        assert_eq!(reply.message, "Looking into it");
        assert_eq!(reply.user_role, Role::Agent);
        assert_eq!(desk.get(&claim.id).unwrap().comments.len(), 2);

        assert!(desk.add_comment(&claim.id, &agent, "   ", now).is_err());
        assert_eq!(desk.add_comment("nope", &agent, "hi", now), Err("Claim not found".to_string()));

        desk.set_status(&claim.id, ClaimStatus::Resolved, now);
        assert_eq!(desk.active_count("u1"), 0);
    }

    #[test]
    fn test_create_rejects_incomplete_claim() {
        let mut desk = ClaimDesk::new();
        let mut claim = new_claim();
        claim.kind = None;
        assert!(desk.create(claim, &session("u1", Role::Customer), Utc::now()).is_err());
        assert!(desk.claims_for("u1").is_empty());
    }

    #[test]
    fn test_dossier_upload() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut desk = DossierDesk::new();
        let now = Utc::now();
        let before = desk.ensure(&mut rng, &shipment(), now).events.len();

        let uploaded = desk.upload("s1", "doc-s1-3", now).unwrap();
        assert_eq!(uploaded.status, DocumentStatus::Uploaded);
        let dossier = desk.get("s1").unwrap();
        assert_eq!(dossier.events.len(), before + 1);
        assert_eq!(dossier.events.last().unwrap().kind, EventKind::DocumentUpdate);

        assert!(desk.upload("s1", "doc-missing", now).is_none());
        assert!(desk.upload("s9", "doc-s9-1", now).is_none());
    }
}
