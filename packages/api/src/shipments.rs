use store::booking::{next_booking_number, BookingDraft};
use store::config::BookingConfig;
use store::models::{Session, Shipment, ShipmentStatus};

use crate::backend::{Backend, SHIPMENTS};
use crate::error::ApiError;

/// Shipment reads and writes for the customer and agent screens.
#[derive(Clone, Debug)]
pub struct ShipmentService<B: Backend> {
    backend: B,
}

impl<B: Backend> ShipmentService<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Shipments owned by `user_id`. The query is scoped, and the response is
    /// filtered again in case the backend ignores the parameter.
    pub async fn owned_by(&self, user_id: &str) -> Result<Vec<Shipment>, ApiError> {
        let shipments: Vec<Shipment> = self.backend.list(SHIPMENTS, &[("iduser", user_id)]).await?;
        Ok(shipments.into_iter().filter(|s| s.is_owned_by(user_id)).collect())
    }

    pub async fn owned_one(&self, user_id: &str, shipment_id: &str) -> Result<Option<Shipment>, ApiError> {
        Ok(self
            .owned_by(user_id)
            .await?
            .into_iter()
            .find(|s| s.id == shipment_id))
    }

    pub async fn all(&self) -> Result<Vec<Shipment>, ApiError> {
        self.backend.list(SHIPMENTS, &[]).await
    }

    /// Create a Pending booking for `session`. The booking number is derived
    /// from every shipment known at submit time.
    pub async fn book(
        &self,
        session: &Session,
        draft: &BookingDraft,
        config: &BookingConfig,
    ) -> Result<Shipment, ApiError> {
        let existing = self.all().await?;
        let number = next_booking_number(&existing, &config.booking_prefix, config.number_width);
        let payload = draft.to_new_shipment(session, number, &config.origin);
        let created: Shipment = self.backend.create(SHIPMENTS, &payload).await?;
        tracing::info!(booking = %created.booking_number, user = %session.id, "booking created");
        Ok(created)
    }

    /// Ask the backend to move `shipment` to `status` (full replacement).
    pub async fn request_status(&self, shipment: &Shipment, status: ShipmentStatus) -> Result<Shipment, ApiError> {
        let updated = shipment.with_status(status);
        let saved: Shipment = self.backend.replace(SHIPMENTS, &shipment.id, &updated).await?;
        tracing::info!(booking = %saved.booking_number, status = %saved.status, "status updated");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryBackend;
    use chrono::{Duration, Utc};
    use serde_json::json;
    use store::models::Role;

    fn session(id: &str) -> Session {
        Session {
            id: id.into(),
            fullname: format!("Customer {id}"),
            email: format!("{id}@ctn.tn"),
            role: Role::Customer,
            action: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn seed(backend: &MemoryBackend, id: &str, number: &str, owner: &str, status: &str) {
        backend.seed(
            SHIPMENTS,
            &json!({
                "_id": id, "bookingNumber": number, "origin": "Rades",
                "destination": "Gênes", "departdate": "2026-12-01", "vesselName": "Salambo",
                "status": status, "cargotype": "trailer", "cargokg": "800", "specialreq": "",
                "iduser": owner, "fullname": "x", "email": "x@ctn.tn"
            }),
        );
    }

    fn draft() -> BookingDraft {
        BookingDraft {
            destination: "Marseille".into(),
            departdate: (Utc::now() + Duration::days(10)).format("%Y-%m-%d").to_string(),
            vessel: "Elyssa".into(),
            cargotype: "container".into(),
            cargokg: "1500".into(),
            specialreq: String::new(),
        }
    }

    #[tokio::test]
    async fn test_owned_by_scopes_to_user() {
        let backend = MemoryBackend::new();
        seed(&backend, "s1", "CTN000001", "u1", "Pending");
        seed(&backend, "s2", "CTN000002", "u2", "Pending");
        let service = ShipmentService::new(backend);

        let mine = service.owned_by("u1").await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id, "s1");
        assert!(service.owned_one("u1", "s2").await.unwrap().is_none());
        assert_eq!(service.all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_booking_appears_in_list() {
        let backend = MemoryBackend::new();
        seed(&backend, "s1", "CTN000041", "u2", "Confirmed");
        let service = ShipmentService::new(backend);
        let customer = session("u1");

        let created = service
            .book(&customer, &draft(), &BookingConfig::default())
            .await
            .unwrap();
        assert_eq!(created.booking_number, "CTN000042");
        assert_eq!(created.status, ShipmentStatus::Pending);
        assert_eq!(created.origin, "Rades");

        let mine = service.owned_by("u1").await.unwrap();
        assert!(mine.iter().any(|s| s.booking_number == "CTN000042"));
    }

    #[tokio::test]
    async fn test_request_status_replaces_record() {
        let backend = MemoryBackend::new();
        seed(&backend, "s1", "CTN000001", "u1", "pending");
        let service = ShipmentService::new(backend);

        let shipment = service.all().await.unwrap().remove(0);
        let confirmed = service
            .request_status(&shipment, ShipmentStatus::Confirmed)
            .await
            .unwrap();
        assert_eq!(confirmed.status, ShipmentStatus::Confirmed);
        assert_eq!(confirmed.booking_number, "CTN000001");

        let reloaded = service.all().await.unwrap();
        assert_eq!(reloaded[0].status, ShipmentStatus::Confirmed);
    }
}
