//! # Users, roles and the authenticated session
//!
//! ## [`User`]
//!
//! A record of the backend `users` collection. The backend stores the password in
//! clear next to the profile, so `password` is optional and skipped when empty.
//! Agents are users with [`Role::Agent`]; their `action` holds a job title.
//!
//! ## [`Session`]
//!
//! The client-safe projection of a [`User`] that is persisted in local storage.
//! It never carries the password. [`Session::is_well_formed`] is the gate used when
//! hydrating a stored blob: an empty `_id` or `email` means the blob is discarded.

use serde::{Deserialize, Serialize};

/// Portal a user belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Agent,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Customer, Role::Agent, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Agent => "agent",
            Role::Admin => "admin",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "customer" => Some(Role::Customer),
            "agent" => Some(Role::Agent),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Landing screen of the role's portal.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Customer => "/customer/dashboard",
            Role::Agent => "/agent/dashboard",
            Role::Admin => "/admin/dashboard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Customer => "Customer",
            Role::Agent => "Agent",
            Role::Admin => "Administrator",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Job titles an admin can assign to an agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobTitle {
    LogisticsAgent,
    ExportManager,
    ImportSupervisor,
    ShippingCoordinator,
}

impl JobTitle {
    pub const ALL: [JobTitle; 4] = [
        JobTitle::LogisticsAgent,
        JobTitle::ExportManager,
        JobTitle::ImportSupervisor,
        JobTitle::ShippingCoordinator,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobTitle::LogisticsAgent => "logistics_agent",
            JobTitle::ExportManager => "export_manager",
            JobTitle::ImportSupervisor => "import_supervisor",
            JobTitle::ShippingCoordinator => "shipping_coordinator",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobTitle::LogisticsAgent => "Logistics Agent",
            JobTitle::ExportManager => "Export Manager",
            JobTitle::ImportSupervisor => "Import Supervisor",
            JobTitle::ShippingCoordinator => "Shipping Coordinator",
        }
    }
}

/// Full user record from the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl User {
    /// Project to the session record (drops the password and phone).
    pub fn to_session(&self) -> Session {
        Session {
            id: self.id.clone(),
            fullname: self.fullname.clone(),
            email: self.email.clone(),
            role: self.role,
            action: self.action.clone(),
            created_at: self.created_at.clone(),
            updated_at: self.updated_at.clone(),
        }
    }

    pub fn password_matches(&self, password: &str) -> bool {
        self.password.as_deref() == Some(password)
    }
}

/// Authenticated identity held by the running client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Session {
    /// Whether this record carries the identity fields a session needs.
    pub fn is_well_formed(&self) -> bool {
        !self.id.trim().is_empty() && !self.email.trim().is_empty()
    }

    /// Display name, falling back to the email address.
    pub fn display_name(&self) -> &str {
        if self.fullname.trim().is_empty() {
            &self.email
        } else {
            &self.fullname
        }
    }
}

/// Payload for `POST /users`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub fullname: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Emails are stored and looked up trimmed and lowercased, since the backend
/// filters `?email=` by exact match.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl NewUser {
    /// Self-service registration. Agents get the `"New Agent"` marker.
    pub fn registration(fullname: &str, email: &str, password: &str, role: Role) -> Self {
        Self {
            fullname: fullname.trim().to_string(),
            email: normalize_email(email),
            password: password.to_string(),
            role,
            action: (role == Role::Agent).then(|| "New Agent".to_string()),
            phone: None,
        }
    }

    /// Agent provisioned by an administrator.
    pub fn agent(fullname: &str, email: &str, phone: &str, title: JobTitle, password: &str) -> Self {
        Self {
            fullname: fullname.trim().to_string(),
            email: normalize_email(email),
            password: password.to_string(),
            role: Role::Agent,
            action: Some(title.as_str().to_string()),
            phone: Some(phone.trim().to_string()),
        }
    }
}

/// Fields an administrator may change on an existing agent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserUpdate {
    pub fullname: String,
    pub email: String,
    pub action: String,
    pub phone: String,
    pub password: String,
}

impl UserUpdate {
    pub fn from_user(user: &User) -> Self {
        Self {
            fullname: user.fullname.clone(),
            email: user.email.clone(),
            action: user.action.clone().unwrap_or_default(),
            phone: user.phone.clone().unwrap_or_default(),
            password: user.password.clone().unwrap_or_default(),
        }
    }

    /// Build the full replacement record for `PUT /users/:id`.
    pub fn apply_to(&self, user: &User) -> User {
        User {
            fullname: self.fullname.trim().to_string(),
            email: normalize_email(&self.email),
            action: Some(self.action.clone()),
            phone: Some(self.phone.trim().to_string()),
            password: if self.password.is_empty() {
                user.password.clone()
            } else {
                Some(self.password.clone())
            },
            ..user.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"customer\"").unwrap();
        assert_eq!(role, Role::Customer);
        assert_eq!(Role::parse(" Agent "), Some(Role::Agent));
        assert_eq!(Role::parse("captain"), None);
    }

    #[test]
    fn test_user_to_session_drops_password() {
        let user: User = serde_json::from_str(
            r#"{"_id":"u1","fullname":"Amel","email":"amel@ctn.tn","password":"secret1","role":"customer","action":null}"#,
        )
        .unwrap();
        assert!(user.password_matches("secret1"));
        let session = user.to_session();
        let json = serde_json::to_string(&session).unwrap();
        assert!(!json.contains("secret1"));
        assert!(json.contains("\"_id\":\"u1\""));
    }

    #[test]
    fn test_json_server_id_alias() {
        let user: User =
            serde_json::from_str(r#"{"id":"7","fullname":"A","email":"a@b.co","role":"agent"}"#).unwrap();
        assert_eq!(user.id, "7");
    }

    #[test]
    fn test_registration_marks_agents() {
        let agent = NewUser::registration("Sami", "sami@ctn.tn", "pw1234", Role::Agent);
        assert_eq!(agent.action.as_deref(), Some("New Agent"));
        let customer = NewUser::registration("Sami", "sami@ctn.tn", "pw1234", Role::Customer);
        assert_eq!(customer.action, None);
    }

    #[test]
    fn test_emails_are_lowercased() {
        let user = NewUser::registration("Sami", "  Sami@CTN.tn ", "pw1234", Role::Customer);
        assert_eq!(user.email, "sami@ctn.tn");
        let agent = NewUser::agent("Sami", "SAMI@ctn.tn", "+216 71 000 000", JobTitle::LogisticsAgent, "pw1234");
        assert_eq!(agent.email, "sami@ctn.tn");
    }

    #[test]
    fn test_update_keeps_password_when_blank() {
        let user = User {
            id: "a1".into(),
            fullname: "Old".into(),
            email: "old@ctn.tn".into(),
            password: Some("keep-me".into()),
            role: Role::Agent,
            action: Some("logistics_agent".into()),
            phone: None,
            created_at: None,
            updated_at: None,
        };
        let mut update = UserUpdate::from_user(&user);
        update.fullname = "New Name".into();
        update.password.clear();
        let replaced = update.apply_to(&user);
        assert_eq!(replaced.fullname, "New Name");
        assert_eq!(replaced.password.as_deref(), Some("keep-me"));
        assert_eq!(replaced.id, "a1");
        assert_eq!(replaced.role, Role::Agent);
    }

    #[test]
    fn test_session_well_formed() {
        let mut session = Session {
            id: "1".into(),
            fullname: String::new(),
            email: "x@y.tn".into(),
            role: Role::Customer,
            action: None,
            created_at: None,
            updated_at: None,
        };
        assert!(session.is_well_formed());
        assert_eq!(session.display_name(), "x@y.tn");
        session.id = " ".into();
        assert!(!session.is_well_formed());
    }
}
