mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod shell;
pub use shell::Shell;

mod customer;
pub use customer::{ClaimDetail, Claims, CustomerDashboard, History, ShipmentDetail, Tracking};

mod agent;
pub use agent::{AgentDashboard, FileManagement};

mod admin;
pub use admin::AdminDashboard;
