//! Claim records: customer-filed issues tied to a booking, with a status
//! lifecycle, a comment thread and an optional resolution.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    Draft,
    Submitted,
    InReview,
    AdditionalInfoRequested,
    Processing,
    Resolved,
    Rejected,
    Closed,
}

impl ClaimStatus {
    pub const ALL: [ClaimStatus; 8] = [
        ClaimStatus::Draft,
        ClaimStatus::Submitted,
        ClaimStatus::InReview,
        ClaimStatus::AdditionalInfoRequested,
        ClaimStatus::Processing,
        ClaimStatus::Resolved,
        ClaimStatus::Rejected,
        ClaimStatus::Closed,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ClaimStatus::Draft => "draft",
            ClaimStatus::Submitted => "submitted",
            ClaimStatus::InReview => "in_review",
            ClaimStatus::AdditionalInfoRequested => "additional_info_requested",
            ClaimStatus::Processing => "processing",
            ClaimStatus::Resolved => "resolved",
            ClaimStatus::Rejected => "rejected",
            ClaimStatus::Closed => "closed",
        }
    }

    /// Still awaiting an outcome.
    pub fn is_active(&self) -> bool {
        !matches!(
            self,
            ClaimStatus::Resolved | ClaimStatus::Closed | ClaimStatus::Rejected
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimType {
    CargoDamage,
    CargoLoss,
    Delay,
    Documentation,
    Billing,
    ServiceQuality,
    Other,
}

impl ClaimType {
    pub const ALL: [ClaimType; 7] = [
        ClaimType::CargoDamage,
        ClaimType::CargoLoss,
        ClaimType::Delay,
        ClaimType::Documentation,
        ClaimType::Billing,
        ClaimType::ServiceQuality,
        ClaimType::Other,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ClaimType::CargoDamage => "cargo_damage",
            ClaimType::CargoLoss => "cargo_loss",
            ClaimType::Delay => "delay",
            ClaimType::Documentation => "documentation",
            ClaimType::Billing => "billing",
            ClaimType::ServiceQuality => "service_quality",
            ClaimType::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == value)
    }

    /// Damage and loss claims are compensated in money.
    pub fn is_compensable(&self) -> bool {
        matches!(self, ClaimType::CargoDamage | ClaimType::CargoLoss)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::Low, Priority::Medium, Priority::High, Priority::Urgent];

    pub fn key(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == value)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub name: String,
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    #[serde(rename = "uploadedAt", default)]
    pub uploaded_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClaimComment {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(rename = "userRole")]
    pub user_role: Role,
    pub timestamp: DateTime<Utc>,
    pub message: String,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssignedAgent {
    #[serde(rename = "agentId")]
    pub agent_id: String,
    #[serde(rename = "agentName")]
    pub agent_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    #[serde(rename = "resolvedAt")]
    pub resolved_at: DateTime<Utc>,
    #[serde(rename = "resolvedBy")]
    pub resolved_by: String,
    pub resolution: String,
    #[serde(rename = "compensationAmount", default)]
    pub compensation_amount: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub id: String,
    #[serde(rename = "claimNumber")]
    pub claim_number: String,
    #[serde(rename = "customerId")]
    pub customer_id: String,
    #[serde(rename = "customerName")]
    pub customer_name: String,
    #[serde(rename = "shipmentId")]
    pub shipment_id: String,
    #[serde(rename = "bookingNumber")]
    pub booking_number: String,
    #[serde(rename = "type")]
    pub kind: ClaimType,
    pub status: ClaimStatus,
    pub subject: String,
    pub description: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "assignedTo", default)]
    pub assigned_to: Option<AssignedAgent>,
    pub priority: Priority,
    #[serde(default)]
    pub comments: Vec<ClaimComment>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub resolution: Option<Resolution>,
}

/// Fields a customer fills in when filing a claim.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewClaim {
    pub shipment_id: String,
    pub booking_number: String,
    pub kind: Option<ClaimType>,
    pub subject: String,
    pub description: String,
    pub priority: Option<Priority>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_enums_wire_format() {
        assert_eq!(
            serde_json::to_string(&ClaimStatus::AdditionalInfoRequested).unwrap(),
            "\"additional_info_requested\""
        );
        assert_eq!(serde_json::to_string(&ClaimType::CargoDamage).unwrap(), "\"cargo_damage\"");
        assert_eq!(serde_json::to_string(&Priority::Urgent).unwrap(), "\"urgent\"");
        for status in ClaimStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json.trim_matches('"'), status.key());
        }
    }

    #[test]
    fn test_active_statuses() {
        let active: Vec<_> = ClaimStatus::ALL.into_iter().filter(|s| s.is_active()).collect();
        assert_eq!(active.len(), 5);
        assert!(!ClaimStatus::Rejected.is_active());
    }
}
