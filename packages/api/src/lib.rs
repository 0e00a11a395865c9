//! # API crate: backend access for the CTN client
//!
//! Everything that talks to the REST backend lives here. Screens hold a
//! [`Backend`] in context and build the services they need on the fly.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`backend`] | The [`Backend`] trait and collection names |
//! | [`rest`] | [`RestBackend`], reqwest over HTTP |
//! | [`memory`] | [`MemoryBackend`], in-process collections for tests |
//! | [`auth`] | [`AuthService`]: login, register, logout |
//! | [`shipments`] | [`ShipmentService`]: owned lists, booking, status requests |
//! | [`agents`] | [`AgentService`]: agent list, provisioning, edit, revoke |
//! | [`cancel`] | [`CancelToken`] tying a fetch to its view |
//! | [`error`] | [`ApiError`], [`AuthError`] |

pub mod agents;
pub mod auth;
pub mod backend;
pub mod cancel;
pub mod error;
pub mod memory;
pub mod rest;
pub mod shipments;

pub use agents::{temp_password, AgentService};
pub use auth::AuthService;
pub use backend::{Backend, SHIPMENTS, USERS};
pub use cancel::CancelToken;
pub use error::{ApiError, AuthError};
pub use memory::MemoryBackend;
pub use rest::RestBackend;
pub use shipments::ShipmentService;
