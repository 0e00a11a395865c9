//! # Client configuration (`ctn.toml`)
//!
//! Read once at startup by the web binary. Every field has a default, so a
//! missing or empty file is the default configuration.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3000"
//!
//! [session]
//! storage_key = "ctn-user"
//!
//! [booking]
//! origin = "Rades"
//! destinations = ["Marseille", "Gênes", "Livourne", "Barcelone"]
//! vessels = ["Ulysse", "Salambo", "Amilcar", "Elyssa"]
//! booking_prefix = "CTN"
//! number_width = 6
//!
//! [notifications]
//! badge_cap = 9
//! ```
//!
//! | Struct | Section |
//! |--------|---------|
//! | [`ApiConfig`] | REST backend location |
//! | [`SessionConfig`] | local storage key of the session blob |
//! | [`BookingConfig`] | port of departure, destination and vessel lists, booking number shape |
//! | [`NotificationConfig`] | header badge cap |

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub booking: BookingConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingConfig {
    #[serde(default = "default_origin")]
    pub origin: String,
    #[serde(default = "default_destinations")]
    pub destinations: Vec<String>,
    #[serde(default = "default_vessels")]
    pub vessels: Vec<String>,
    #[serde(default = "default_booking_prefix")]
    pub booking_prefix: String,
    /// Digits after the prefix, zero-padded.
    #[serde(default = "default_number_width")]
    pub number_width: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_badge_cap")]
    pub badge_cap: usize,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_storage_key() -> String {
    "ctn-user".to_string()
}

fn default_origin() -> String {
    "Rades".to_string()
}

fn default_destinations() -> Vec<String> {
    ["Marseille", "Gênes", "Livourne", "Barcelone"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_vessels() -> Vec<String> {
    ["Ulysse", "Salambo", "Amilcar", "Elyssa"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_booking_prefix() -> String {
    "CTN".to_string()
}

fn default_number_width() -> usize {
    6
}

fn default_badge_cap() -> usize {
    9
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            destinations: default_destinations(),
            vessels: default_vessels(),
            booking_prefix: default_booking_prefix(),
            number_width: default_number_width(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            badge_cap: default_badge_cap(),
        }
    }
}

impl ClientConfig {
    pub fn filename() -> &'static str {
        "ctn.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Parse `s`, falling back to defaults when it is invalid.
    pub fn load(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "invalid {}, using defaults", Self::filename());
            Self::default()
        })
    }

    /// Replace the backend base URL, e.g. from a build-time override.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.session.storage_key, "ctn-user");
        assert_eq!(config.booking.origin, "Rades");
        assert_eq!(config.booking.destinations.len(), 4);
        assert_eq!(config.notifications.badge_cap, 9);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = ClientConfig::from_toml(
            r#"
            [booking]
            vessels = ["Tanit"]
            "#,
        )
        .unwrap();
        assert_eq!(config.booking.vessels, vec!["Tanit".to_string()]);
        assert_eq!(config.booking.booking_prefix, "CTN");
        assert_eq!(config.booking.number_width, 6);
    }

    #[test]
    fn test_invalid_file_loads_defaults() {
        let config = ClientConfig::load("[api\nbase_url = ");
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_toml_roundtrip_with_override() {
        let config = ClientConfig::default().with_base_url("https://api.ctn.tn");
        let text = config.to_toml().unwrap();
        assert!(text.contains("https://api.ctn.tn"));
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }
}
