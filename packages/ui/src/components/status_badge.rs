use dioxus::prelude::*;
use store::models::humanize;

/// Colour classes for a status key. Shipment, document and claim statuses
/// share one palette.
pub fn badge_tone(key: &str) -> &'static str {
    match key {
        "approved" | "delivered" | "resolved" | "closed" => "bg-green-100 text-green-800",
        "pending" | "confirmed" | "in_transit" | "processing" | "in_review" | "draft" | "submitted" => {
            "bg-yellow-100 text-yellow-800"
        }
        "arrived" | "uploaded" | "required" => "bg-blue-100 text-blue-800",
        "cancelled" | "rejected" => "bg-red-100 text-red-800",
        "delayed" | "additional_info_requested" => "bg-orange-100 text-orange-800",
        _ => "bg-gray-100 text-gray-800",
    }
}

/// Pill showing a status key such as `in_transit` as "In Transit".
#[component]
pub fn StatusBadge(#[props(into)] status: String, #[props(default)] large: bool) -> Element {
    let key = status.trim().to_lowercase().replace(' ', "_");
    let size = if large { "text-sm px-3 py-1" } else { "text-xs px-2.5 py-0.5" };
    rsx! {
        span {
            class: "inline-flex items-center rounded-full font-medium {size} {badge_tone(&key)}",
            "{humanize(&key)}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::models::{ClaimStatus, ShipmentStatus};

    #[test]
    fn test_every_known_status_has_a_tone() {
        for status in ShipmentStatus::KNOWN {
            assert_ne!(badge_tone(&status.key()), "bg-gray-100 text-gray-800", "{status:?}");
        }
        for status in ClaimStatus::ALL {
            assert_ne!(badge_tone(status.key()), "bg-gray-100 text-gray-800", "{status:?}");
        }
    }

    #[test]
    fn test_unknown_status_is_neutral() {
        assert_eq!(badge_tone("on_hold"), "bg-gray-100 text-gray-800");
    }
}
