//! # Domain models for the CTN client
//!
//! Records exchanged with the REST backend and the client-side mock services.
//! Wire names follow the backend (`_id`, `fullname`, `departdate`, ...), so every
//! struct here round-trips through `serde_json` without a separate DTO layer.
//!
//! | Module | Types |
//! |--------|-------|
//! | [`user`] | [`Role`], [`User`], [`Session`], [`NewUser`], [`UserUpdate`] |
//! | [`shipment`] | [`Shipment`], [`NewShipment`], [`ShipmentStatus`], dossier documents and events |
//! | [`claim`] | [`Claim`], [`ClaimStatus`], [`ClaimType`], [`ClaimComment`], [`Priority`], [`Resolution`] |
//! | [`notification`] | [`Notification`], [`NotificationKind`], [`RelatedTo`] |

pub mod claim;
pub mod notification;
pub mod shipment;
pub mod user;

pub use claim::{
    Attachment, AssignedAgent, Claim, ClaimComment, ClaimStatus, ClaimType, NewClaim, Priority,
    Resolution,
};
pub use notification::{EntityType, Notification, NotificationKind, RelatedTo};
pub use shipment::{
    CargoType, DocumentKind, DocumentStatus, EventKind, NewShipment, Shipment, ShipmentDocument,
    ShipmentDossier, ShipmentEvent, ShipmentStatus,
};
pub use user::{normalize_email, JobTitle, NewUser, Role, Session, User, UserUpdate};

/// Capitalise each `_`-separated word: `"in_transit"` → `"In Transit"`.
pub fn humanize(key: &str) -> String {
    key.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("in_transit"), "In Transit");
        assert_eq!(humanize("additional_info_requested"), "Additional Info Requested");
        assert_eq!(humanize("Pending"), "Pending");
        assert_eq!(humanize(""), "");
    }
}
