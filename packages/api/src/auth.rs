//! # Authentication against the `users` collection
//!
//! The backend has no auth endpoint. Login lists the users scoped by email and
//! compares the password on the client; registration checks that the email is
//! free, then posts the new user. Emails go through [`normalize_email`] on
//! both paths so the backend's exact-match filter is case-insensitive. Both return a [`Session`] that the caller
//! stores. Neither touches the current session on failure.

use store::models::{normalize_email, NewUser, Role, Session, User};
use store::{SessionStorage, SessionStore};

use crate::backend::{Backend, USERS};
use crate::error::AuthError;

#[derive(Clone, Debug)]
pub struct AuthService<B: Backend> {
    backend: B,
}

impl<B: Backend> AuthService<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let email = normalize_email(email);
        let users: Vec<User> = self.backend.list(USERS, &[("email", email.as_str())]).await?;
        match users
            .iter()
            .find(|u| u.email == email && u.password_matches(password))
        {
            Some(user) => {
                tracing::info!(%email, role = %user.role, "login succeeded");
                Ok(user.to_session())
            }
            None => {
                tracing::warn!(%email, "login rejected");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    pub async fn register(
        &self,
        fullname: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Session, AuthError> {
        let new_user = NewUser::registration(fullname, email, password, role);
        let existing: Vec<User> = self
            .backend
            .list(USERS, &[("email", new_user.email.as_str())])
            .await?;
        if existing.iter().any(|u| u.email == new_user.email) {
            tracing::warn!(email = %new_user.email, "registration with an email already in use");
            return Err(AuthError::registration("an account with this email already exists"));
        }

        let created: User = self.backend.create(USERS, &new_user).await?;
        if created.id.trim().is_empty() {
            return Err(AuthError::registration("the server did not return an id"));
        }
        tracing::info!(email = %created.email, role = %created.role, "registered");
        Ok(created.to_session())
    }

    /// Log in and store the session. The store is left as it was on failure.
    pub async fn sign_in<S: SessionStorage>(
        &self,
        sessions: &mut SessionStore<S>,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let session = self.login(email, password).await?;
        sessions.set(session.clone());
        Ok(session)
    }

    /// Logging out is local: the backend keeps no session.
    pub fn logout<S: SessionStorage>(&self, sessions: &mut SessionStore<S>) {
        sessions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::MemoryBackend;
    use serde_json::json;
    use store::MemoryStorage;

    fn backend_with_customer() -> MemoryBackend {
        let backend = MemoryBackend::new();
        backend.seed(
            USERS,
            &json!({
                "_id": "u1", "fullname": "Amel Ben Salah", "email": "amel@ctn.tn",
                "password": "secret1", "role": "customer", "action": null
            }),
        );
        backend
    }

    #[tokio::test]
    async fn test_login_matches_email_and_password() {
        let auth = AuthService::new(backend_with_customer());
        let session = auth.login(" amel@ctn.tn ", "secret1").await.unwrap();
        assert_eq!(session.id, "u1");
        assert_eq!(session.role, Role::Customer);

        let wrong = auth.login("amel@ctn.tn", "secret2").await;
        assert_eq!(wrong, Err(AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_unknown_email_leaves_session_absent() {
        let auth = AuthService::new(backend_with_customer());
        let storage = MemoryStorage::new();
        let mut sessions = SessionStore::hydrate(storage.clone(), "ctn-user");

        let result = auth.sign_in(&mut sessions, "nobody@ctn.tn", "secret1").await;
        let err = result.unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert!(err.to_string().starts_with("Invalid email or password"));
        assert!(sessions.current().is_none());
        assert!(storage.load("ctn-user").is_none());
    }

    #[tokio::test]
    async fn test_failed_login_keeps_prior_session() {
        let auth = AuthService::new(backend_with_customer());
        let mut sessions = SessionStore::hydrate(MemoryStorage::new(), "ctn-user");
        auth.sign_in(&mut sessions, "amel@ctn.tn", "secret1").await.unwrap();

        assert!(auth.sign_in(&mut sessions, "amel@ctn.tn", "bad-pass").await.is_err());
        assert_eq!(sessions.current().map(|s| s.id.as_str()), Some("u1"));

        auth.logout(&mut sessions);
        assert!(sessions.current().is_none());
    }

    #[tokio::test]
    async fn test_register_agent_and_duplicate() {
        let backend = backend_with_customer();
        let auth = AuthService::new(backend.clone());

        let session = auth
            .register("Karim Trabelsi", "karim@ctn.tn", "secret1", Role::Agent)
            .await
            .unwrap();
        assert_eq!(session.role, Role::Agent);
        assert_eq!(session.action.as_deref(), Some("New Agent"));
        assert!(!session.id.is_empty());
        assert_eq!(backend.len(USERS), 2);

        let duplicate = auth
            .register("Amel", "amel@ctn.tn", "secret1", Role::Customer)
            .await;
        assert!(matches!(duplicate, Err(AuthError::RegistrationFailed(_))));
        assert_eq!(backend.len(USERS), 2);
    }

    #[tokio::test]
    async fn test_email_case_does_not_split_accounts() {
        let backend = backend_with_customer();
        let auth = AuthService::new(backend.clone());

        let duplicate = auth
            .register("Amel", "Amel@CTN.tn", "secret1", Role::Customer)
            .await;
        assert!(matches!(duplicate, Err(AuthError::RegistrationFailed(_))));
        assert_eq!(backend.len(USERS), 1);

        let session = auth.login("AMEL@ctn.tn", "secret1").await.unwrap();
        assert_eq!(session.id, "u1");
    }

    #[tokio::test]
    async fn test_network_failure_surfaces() {
        let backend = backend_with_customer();
        backend.set_offline(true);
        let auth = AuthService::new(backend);
        let result = auth.login("amel@ctn.tn", "secret1").await;
        assert!(matches!(result, Err(AuthError::Network(ApiError::Network(_)))));
    }
}
