//! Screens and shared components of the CTN e-Services client.
//!
//! The crate is router-agnostic: screens navigate by path and the application
//! crate maps those paths to its own `Route` enum.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod platform;
pub use platform::PlatformStorage;

mod context;
pub use context::{
    use_backend, use_claim_desk, use_config, use_dossier_desk, use_notifications, use_view_token, ClientProvider,
};

mod auth;
pub use auth::{use_auth, use_session, AuthProvider, AuthState, LogoutButton};

mod guard;
pub use guard::ProtectedRoute;

pub mod views;

mod header;
pub use header::Header;

mod sidebar;
pub use sidebar::{nav_items, NavIcon, NavItem, Sidebar};

mod footer;
pub use footer::Footer;

mod notification_dropdown;
pub use notification_dropdown::NotificationDropdown;

mod booking_form;
pub use booking_form::BookingForm;

mod claim_form;
pub use claim_form::ClaimForm;

mod agent_form;
pub use agent_form::{validate_agent, AgentForm, EditAgentForm};
