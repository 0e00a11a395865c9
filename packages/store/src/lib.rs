pub mod booking;
pub mod config;
pub mod desk;
pub mod forms;
pub mod guard;
pub mod mock;
pub mod models;
pub mod notifications;
pub mod session;

mod memory;
pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use booking::{next_booking_number, BookingDraft, BookingStep};
pub use config::ClientConfig;
pub use desk::{ClaimDesk, DossierDesk};
pub use guard::{authorize, GuardDecision};
pub use notifications::{badge_label, NotificationCenter};
pub use session::{SessionStorage, SessionStore};
