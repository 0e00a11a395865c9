mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod app_layout;
pub use app_layout::AppLayout;

mod customer_dashboard;
pub use customer_dashboard::{CustomerDashboardView, DashboardSummary};

mod tracking;
pub use tracking::{filter_shipments, ShipmentTable, TrackingView, ALL_STATUSES};

mod shipment_detail;
pub use shipment_detail::ShipmentDetailView;

mod claims;
pub use claims::ClaimsView;

mod claim_detail;
pub use claim_detail::ClaimDetailView;

mod history;
pub use history::HistoryView;

mod agent_dashboard;
pub use agent_dashboard::{AgentCounters, AgentDashboardView};

mod file_management;
pub use file_management::FileManagementView;

mod admin_dashboard;
pub use admin_dashboard::AdminDashboardView;

mod not_found;
pub use not_found::NotFoundView;
