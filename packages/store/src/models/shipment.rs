//! # Shipments and their dossiers
//!
//! [`Shipment`] mirrors a record of the backend `shipments` collection. Its
//! `status` is authoritative at the server: the client only ever requests a named
//! [`ShipmentStatus`], it never derives a successor from the current one.
//!
//! The backend writes statuses capitalised (`"Pending"`), older records use
//! snake case (`"in_transit"`). [`ShipmentStatus`] parses both case-insensitively
//! and keeps anything unknown verbatim in [`ShipmentStatus::Other`].
//!
//! [`ShipmentDossier`] is the client-side document checklist and event timeline
//! attached to a booking (see [`crate::mock`]).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShipmentStatus {
    Pending,
    Confirmed,
    InTransit,
    Arrived,
    Delivered,
    Cancelled,
    Delayed,
    Other(String),
}

impl ShipmentStatus {
    pub const KNOWN: [ShipmentStatus; 7] = [
        ShipmentStatus::Pending,
        ShipmentStatus::Confirmed,
        ShipmentStatus::InTransit,
        ShipmentStatus::Arrived,
        ShipmentStatus::Delivered,
        ShipmentStatus::Cancelled,
        ShipmentStatus::Delayed,
    ];

    /// Lowercase snake-case key, used for filters and badge colours.
    pub fn key(&self) -> String {
        match self {
            ShipmentStatus::Pending => "pending".into(),
            ShipmentStatus::Confirmed => "confirmed".into(),
            ShipmentStatus::InTransit => "in_transit".into(),
            ShipmentStatus::Arrived => "arrived".into(),
            ShipmentStatus::Delivered => "delivered".into(),
            ShipmentStatus::Cancelled => "cancelled".into(),
            ShipmentStatus::Delayed => "delayed".into(),
            ShipmentStatus::Other(raw) => raw.trim().to_lowercase().replace(' ', "_"),
        }
    }

    /// Display label, also the value written back to the backend.
    pub fn label(&self) -> String {
        match self {
            ShipmentStatus::Other(raw) => raw.clone(),
            known => super::humanize(&known.key()),
        }
    }

    /// Delivered and cancelled bookings no longer move.
    pub fn is_final(&self) -> bool {
        matches!(self, ShipmentStatus::Delivered | ShipmentStatus::Cancelled)
    }
}

impl From<String> for ShipmentStatus {
    fn from(raw: String) -> Self {
        let key = raw.trim().to_lowercase().replace([' ', '-'], "_");
        match key.as_str() {
            "pending" => ShipmentStatus::Pending,
            "confirmed" => ShipmentStatus::Confirmed,
            "in_transit" => ShipmentStatus::InTransit,
            "arrived" => ShipmentStatus::Arrived,
            "delivered" => ShipmentStatus::Delivered,
            "cancelled" | "canceled" => ShipmentStatus::Cancelled,
            "delayed" => ShipmentStatus::Delayed,
            _ => ShipmentStatus::Other(raw),
        }
    }
}

impl From<ShipmentStatus> for String {
    fn from(status: ShipmentStatus) -> Self {
        status.label()
    }
}

impl std::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Cargo categories offered by the booking form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CargoType {
    Container,
    Trailer,
    Breakbulk,
}

impl CargoType {
    pub const ALL: [CargoType; 3] = [CargoType::Container, CargoType::Trailer, CargoType::Breakbulk];

    pub fn as_str(&self) -> &'static str {
        match self {
            CargoType::Container => "container",
            CargoType::Trailer => "trailer",
            CargoType::Breakbulk => "breakbulk",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CargoType::Container => "Container (20/40 ft)",
            CargoType::Trailer => "Trailer",
            CargoType::Breakbulk => "Breakbulk",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

/// A booking as stored by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(rename = "bookingNumber", default)]
    pub booking_number: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub departdate: String,
    #[serde(rename = "vesselName", default)]
    pub vessel_name: String,
    pub status: ShipmentStatus,
    #[serde(default)]
    pub cargotype: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub cargokg: String,
    #[serde(default)]
    pub specialreq: String,
    #[serde(default)]
    pub iduser: String,
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Shipment {
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        !user_id.is_empty() && self.iduser == user_id
    }

    /// Departure date, accepting both `YYYY-MM-DD` and RFC 3339 timestamps.
    pub fn departure(&self) -> Option<NaiveDate> {
        parse_date(&self.departdate)
    }

    /// Departs after `now` and no later than `days` from it.
    pub fn departs_within(&self, now: DateTime<Utc>, days: i64) -> bool {
        let Some(date) = self.departure() else {
            return false;
        };
        let today = now.date_naive();
        date > today && date <= today + chrono::Duration::days(days)
    }

    /// Full replacement record carrying a new status.
    pub fn with_status(&self, status: ShipmentStatus) -> Shipment {
        Shipment {
            status,
            ..self.clone()
        }
    }
}

/// Older records store the weight as a JSON number.
fn string_or_number<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Null => Ok(String::new()),
        other => Ok(other.to_string()),
    }
}

/// Payload for `POST /shipments`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewShipment {
    #[serde(rename = "bookingNumber")]
    pub booking_number: String,
    pub origin: String,
    pub departdate: String,
    pub destination: String,
    #[serde(rename = "vesselName")]
    pub vessel_name: String,
    pub status: ShipmentStatus,
    pub cargotype: String,
    pub cargokg: String,
    pub specialreq: String,
    pub iduser: String,
    pub fullname: String,
    pub email: String,
}

/// Parse a date the way the backend stores them.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|d| d.date_naive()))
}

/// Format a stored date as `dd/mm/yyyy`, or `-` when absent.
pub fn format_date(raw: &str) -> String {
    parse_date(raw)
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Required,
    Uploaded,
    Processing,
    Approved,
    Rejected,
}

impl DocumentStatus {
    pub const ALL: [DocumentStatus; 5] = [
        DocumentStatus::Required,
        DocumentStatus::Uploaded,
        DocumentStatus::Processing,
        DocumentStatus::Approved,
        DocumentStatus::Rejected,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            DocumentStatus::Required => "required",
            DocumentStatus::Uploaded => "uploaded",
            DocumentStatus::Processing => "processing",
            DocumentStatus::Approved => "approved",
            DocumentStatus::Rejected => "rejected",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Invoice,
    BillOfLading,
    CustomsDeclaration,
    CertificateOfOrigin,
    Other,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShipmentDocument {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    pub status: DocumentStatus,
    #[serde(rename = "uploadDate", default)]
    pub upload_date: Option<DateTime<Utc>>,
    #[serde(rename = "lastUpdated")]
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    StatusChange,
    DocumentUpdate,
    LocationUpdate,
    Note,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShipmentEvent {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub location: Option<String>,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
}

/// Document checklist and timeline for one booking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShipmentDossier {
    #[serde(rename = "shipmentId")]
    pub shipment_id: String,
    #[serde(rename = "bookingNumber")]
    pub booking_number: String,
    pub documents: Vec<ShipmentDocument>,
    pub events: Vec<ShipmentEvent>,
}

impl ShipmentDossier {
    pub fn pending_documents(&self) -> usize {
        self.documents
            .iter()
            .filter(|d| matches!(d.status, DocumentStatus::Required | DocumentStatus::Rejected))
            .count()
    }

    /// Mark a document uploaded and log it on the timeline.
    /// Returns the updated document, or `None` if the id is unknown.
    pub fn upload_document(&mut self, document_id: &str, now: DateTime<Utc>) -> Option<ShipmentDocument> {
        let doc = self.documents.iter_mut().find(|d| d.id == document_id)?;
        doc.status = DocumentStatus::Uploaded;
        doc.upload_date = Some(now);
        doc.last_updated = now;
        let updated = doc.clone();

        self.events.push(ShipmentEvent {
            id: format!("event-{}-{}", self.shipment_id, self.events.len() + 1),
            timestamp: now,
            location: None,
            description: format!("Document {} uploaded", updated.name),
            kind: EventKind::DocumentUpdate,
        });
        Some(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Shipment {
        serde_json::from_str(
            r#"{
                "_id": "s1", "bookingNumber": "CTN000004", "origin": "Rades",
                "destination": "Marseille", "departdate": "2026-10-20",
                "vesselName": "Ulysse", "status": "Pending", "cargotype": "container",
                "cargokg": "1200", "specialreq": "", "iduser": "u1",
                "fullname": "Amel", "email": "amel@ctn.tn"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_status_parsing_is_case_insensitive() {
        assert_eq!(ShipmentStatus::from("Pending".to_string()), ShipmentStatus::Pending);
        assert_eq!(ShipmentStatus::from("in_transit".to_string()), ShipmentStatus::InTransit);
        assert_eq!(ShipmentStatus::from("In Transit".to_string()), ShipmentStatus::InTransit);
        assert_eq!(
            ShipmentStatus::from("On Hold".to_string()),
            ShipmentStatus::Other("On Hold".to_string())
        );
    }

    #[test]
    fn test_status_written_capitalised() {
        let json = serde_json::to_string(&sample().with_status(ShipmentStatus::Confirmed)).unwrap();
        assert!(json.contains("\"status\":\"Confirmed\""));
        assert!(json.contains("\"_id\":\"s1\""));
    }

    #[test]
    fn test_departs_within() {
        let shipment = sample();
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap();
        assert!(shipment.departs_within(now, 7));
        let later = Utc.with_ymd_and_hms(2026, 10, 20, 9, 0, 0).unwrap();
        assert!(!shipment.departs_within(later, 7));
        let early = Utc.with_ymd_and_hms(2026, 10, 1, 9, 0, 0).unwrap();
        assert!(!shipment.departs_within(early, 7));
    }

    #[test]
    fn test_numeric_weight_accepted() {
        let json = serde_json::json!({"_id": "s2", "status": "Confirmed", "cargokg": 950});
        let shipment: Shipment = serde_json::from_value(json).unwrap();
        assert_eq!(shipment.cargokg, "950");
        assert_eq!(shipment.status, ShipmentStatus::Confirmed);
    }

    #[test]
    fn test_date_formats() {
        assert_eq!(format_date("2026-10-20"), "20/10/2026");
        assert_eq!(format_date("2026-10-20T08:00:00.000Z"), "20/10/2026");
        assert_eq!(format_date(""), "-");
    }

    #[test]
    fn test_upload_document_appends_event() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap();
        let mut dossier = ShipmentDossier {
            shipment_id: "s1".into(),
            booking_number: "CTN000004".into(),
            documents: vec![ShipmentDocument {
                id: "doc-s1-1".into(),
                name: "Bill of Lading".into(),
                kind: DocumentKind::BillOfLading,
                status: DocumentStatus::Required,
                upload_date: None,
                last_updated: now,
                notes: String::new(),
            }],
            events: Vec::new(),
        };
        assert_eq!(dossier.pending_documents(), 1);
        let doc = dossier.upload_document("doc-s1-1", now).unwrap();
        assert_eq!(doc.status, DocumentStatus::Uploaded);
        assert_eq!(dossier.pending_documents(), 0);
        assert_eq!(dossier.events.len(), 1);
        assert_eq!(dossier.events[0].kind, EventKind::DocumentUpdate);
        assert!(dossier.upload_document("missing", now).is_none());
    }
}
