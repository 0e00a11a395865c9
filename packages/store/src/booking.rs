//! # Booking form state
//!
//! [`BookingDraft`] holds what the three-step booking form has collected so far.
//! Each [`BookingStep`] validates only its own fields, so the form can block
//! "Next" on the first problem and show it inline.
//!
//! Booking numbers are derived on the client from the highest numeric suffix in
//! the shipments fetched so far ([`next_booking_number`]). Two clients booking
//! at the same moment can still derive the same number; only the backend can
//! make it unique.

use chrono::NaiveDate;

use crate::config::BookingConfig;
use crate::models::shipment::parse_date;
use crate::models::{CargoType, NewShipment, Session, Shipment, ShipmentStatus};

pub const ANY_VESSEL: &str = "Any available";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BookingStep {
    #[default]
    Details,
    Cargo,
    Review,
}

impl BookingStep {
    pub const ALL: [BookingStep; 3] = [BookingStep::Details, BookingStep::Cargo, BookingStep::Review];

    pub fn label(&self) -> &'static str {
        match self {
            BookingStep::Details => "Shipment details",
            BookingStep::Cargo => "Cargo",
            BookingStep::Review => "Review",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            BookingStep::Details => 0,
            BookingStep::Cargo => 1,
            BookingStep::Review => 2,
        }
    }

    pub fn next(&self) -> Option<BookingStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(&self) -> Option<BookingStep> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingDraft {
    pub destination: String,
    pub departdate: String,
    pub vessel: String,
    pub cargotype: String,
    pub cargokg: String,
    pub specialreq: String,
}

impl BookingDraft {
    /// First problem with the fields of `step`, as a user-facing message.
    pub fn validate_step(&self, step: BookingStep, config: &BookingConfig, today: NaiveDate) -> Result<(), String> {
        match step {
            BookingStep::Details => self.validate_details(config, today),
            BookingStep::Cargo => self.validate_cargo(),
            BookingStep::Review => {
                self.validate_details(config, today)?;
                self.validate_cargo()
            }
        }
    }

    fn validate_details(&self, config: &BookingConfig, today: NaiveDate) -> Result<(), String> {
        if self.destination.trim().is_empty() {
            return Err("Please select a destination.".into());
        }
        if !config.destinations.iter().any(|d| d == self.destination.trim()) {
            return Err(format!("Unknown destination: {}", self.destination.trim()));
        }
        if self.departdate.trim().is_empty() {
            return Err("Please choose a departure date.".into());
        }
        match parse_date(&self.departdate) {
            None => Err("Departure date is not a valid date.".into()),
            Some(date) if date < today => Err("Departure date cannot be in the past.".into()),
            Some(_) => Ok(()),
        }
    }

    fn validate_cargo(&self) -> Result<(), String> {
        if CargoType::parse(&self.cargotype).is_none() {
            return Err("Please select a cargo type.".into());
        }
        let weight = self.cargokg.trim();
        if weight.is_empty() {
            return Err("Please enter the cargo weight.".into());
        }
        match weight.parse::<f64>() {
            Ok(kg) if kg.is_finite() && kg > 0.0 => Ok(()),
            _ => Err("Cargo weight must be a positive number.".into()),
        }
    }

    pub fn vessel_or_any(&self) -> String {
        match self.vessel.trim() {
            "" => ANY_VESSEL.to_string(),
            vessel => vessel.to_string(),
        }
    }

    /// Payload for `POST /shipments`, owned by `session`, status Pending.
    pub fn to_new_shipment(&self, session: &Session, booking_number: String, origin: &str) -> NewShipment {
        NewShipment {
            booking_number,
            origin: origin.to_string(),
            departdate: self.departdate.trim().to_string(),
            destination: self.destination.trim().to_string(),
            vessel_name: self.vessel_or_any(),
            status: ShipmentStatus::Pending,
            cargotype: self.cargotype.clone(),
            cargokg: self.cargokg.trim().to_string(),
            specialreq: self.specialreq.trim().to_string(),
            iduser: session.id.clone(),
            fullname: session.fullname.clone(),
            email: session.email.clone(),
        }
    }
}

/// Next number after the highest `<prefix><digits>` among `shipments`.
/// Numbers with another prefix or a non-numeric suffix are ignored.
pub fn next_booking_number(shipments: &[Shipment], prefix: &str, width: usize) -> String {
    let highest = shipments
        .iter()
        .filter_map(|s| s.booking_number.strip_prefix(prefix))
        .filter_map(|digits| digits.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    format!("{prefix}{:0width$}", highest + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn shipment(number: &str) -> Shipment {
        serde_json::from_value(serde_json::json!({
            "_id": number, "bookingNumber": number, "origin": "Rades",
            "destination": "Marseille", "departdate": "2026-11-02", "vesselName": "Ulysse",
            "status": "Pending", "cargotype": "container", "cargokg": "10", "specialreq": "",
            "iduser": "u1", "fullname": "A", "email": "a@ctn.tn"
        }))
        .unwrap()
    }

    fn draft() -> BookingDraft {
        BookingDraft {
            destination: "Marseille".into(),
            departdate: "2026-11-02".into(),
            vessel: String::new(),
            cargotype: "container".into(),
            cargokg: "1500".into(),
            specialreq: " fragile ".into(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_next_booking_number() {
        assert_eq!(next_booking_number(&[], "CTN", 6), "CTN000001");
        let list = [shipment("CTN000007"), shipment("CTN000012"), shipment("CTN000003")];
        assert_eq!(next_booking_number(&list, "CTN", 6), "CTN000013");
        let odd = [shipment("BK-99"), shipment("CTNabc"), shipment("CTN000002")];
        assert_eq!(next_booking_number(&odd, "CTN", 6), "CTN000003");
    }

    #[test]
    fn test_details_validation() {
        let config = BookingConfig::default();
        assert!(draft().validate_step(BookingStep::Details, &config, today()).is_ok());

        let mut d = draft();
        d.destination = "Tokyo".into();
        assert!(d.validate_step(BookingStep::Details, &config, today()).is_err());

        let mut d = draft();
        d.departdate = "2026-10-17".into();
        assert_eq!(
            d.validate_step(BookingStep::Details, &config, today()),
            Err("Departure date cannot be in the past.".to_string())
        );

        let mut d = draft();
        d.departdate = "2026-10-18".into();
        assert!(d.validate_step(BookingStep::Details, &config, today()).is_ok());
    }

    #[test]
    fn test_cargo_validation() {
        let config = BookingConfig::default();
        let mut d = draft();
        d.cargokg = "heavy".into();
        assert!(d.validate_step(BookingStep::Cargo, &config, today()).is_err());
        d.cargokg = "12.5".into();
        d.cargotype = "pallet".into();
        assert!(d.validate_step(BookingStep::Cargo, &config, today()).is_err());
        d.cargotype = "breakbulk".into();
        assert!(d.validate_step(BookingStep::Review, &config, today()).is_ok());
    }

    #[test]
    fn test_steps_walk() {
        assert_eq!(BookingStep::Details.next(), Some(BookingStep::Cargo));
        assert_eq!(BookingStep::Review.next(), None);
        assert_eq!(BookingStep::Details.previous(), None);
        assert_eq!(BookingStep::Review.previous(), Some(BookingStep::Cargo));
    }

    #[test]
    fn test_new_shipment_payload() {
        let session = Session {
            id: "u1".into(),
            fullname: "Amel".into(),
            email: "amel@ctn.tn".into(),
            role: Role::Customer,
            action: None,
            created_at: None,
            updated_at: None,
        };
        let payload = draft().to_new_shipment(&session, "CTN000001".into(), "Rades");
        assert_eq!(payload.vessel_name, ANY_VESSEL);
        assert_eq!(payload.status, ShipmentStatus::Pending);
        assert_eq!(payload.iduser, "u1");
        assert_eq!(payload.specialreq, "fragile");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["status"], "Pending");
        assert_eq!(json["bookingNumber"], "CTN000001");
    }
}
