use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Kind of record a notification points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Shipment,
    Booking,
    Document,
    Claim,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RelatedTo {
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub id: String,
}

impl RelatedTo {
    pub fn new(entity_type: EntityType, id: impl Into<String>) -> Self {
        Self {
            entity_type,
            id: id.into(),
        }
    }

    /// Screen that shows the related record.
    pub fn target_path(&self) -> String {
        match self.entity_type {
            EntityType::Claim => format!("/customer/claims/{}", self.id),
            EntityType::Shipment | EntityType::Booking | EntityType::Document => {
                format!("/customer/tracking/{}", self.id)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    #[serde(rename = "relatedTo", default)]
    pub related_to: Option<RelatedTo>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

impl Notification {
    /// Coarse relative age: "just now", "5 minutes ago", "3 days ago".
    pub fn age(&self, now: DateTime<Utc>) -> String {
        let secs = (now - self.created_at).num_seconds().max(0);
        let (value, unit) = match secs {
            0..=59 => return "just now".to_string(),
            60..=3_599 => (secs / 60, "minute"),
            3_600..=86_399 => (secs / 3_600, "hour"),
            _ => (secs / 86_400, "day"),
        };
        let plural = if value == 1 { "" } else { "s" };
        format!("{value} {unit}{plural} ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_related_paths() {
        assert_eq!(
            RelatedTo::new(EntityType::Claim, "claim-3").target_path(),
            "/customer/claims/claim-3"
        );
        assert_eq!(
            RelatedTo::new(EntityType::Document, "s9").target_path(),
            "/customer/tracking/s9"
        );
    }

    #[test]
    fn test_age() {
        let now = Utc::now();
        let mut n = Notification {
            id: "n".into(),
            title: "t".into(),
            message: "m".into(),
            kind: NotificationKind::Info,
            related_to: None,
            created_at: now,
            read: false,
        };
        assert_eq!(n.age(now), "just now");
        n.created_at = now - Duration::minutes(1);
        assert_eq!(n.age(now), "1 minute ago");
        n.created_at = now - Duration::hours(5);
        assert_eq!(n.age(now), "5 hours ago");
        n.created_at = now - Duration::days(2);
        assert_eq!(n.age(now), "2 days ago");
    }
}
