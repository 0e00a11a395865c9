use rand::Rng;
use store::models::{NewUser, Role, User, UserUpdate};

use crate::backend::{Backend, USERS};
use crate::error::ApiError;

pub const TEMP_PASSWORD_LEN: usize = 8;
const BASE36: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Random lowercase base-36 password handed to a new agent.
pub fn temp_password<R: Rng>(rng: &mut R) -> String {
    (0..TEMP_PASSWORD_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

/// Agent administration for the admin portal.
#[derive(Clone, Debug)]
pub struct AgentService<B: Backend> {
    backend: B,
}

impl<B: Backend> AgentService<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        let users: Vec<User> = self.backend.list(USERS, &[("role", Role::Agent.as_str())]).await?;
        Ok(users.into_iter().filter(|u| u.role == Role::Agent).collect())
    }

    pub async fn provision(&self, agent: &NewUser) -> Result<User, ApiError> {
        let taken: Vec<User> = self.backend.list(USERS, &[("email", agent.email.as_str())]).await?;
        if taken.iter().any(|u| u.email == agent.email) {
            return Err(ApiError::Status {
                status: 409,
                message: format!("{} is already registered", agent.email),
            });
        }
        let created: User = self.backend.create(USERS, agent).await?;
        tracing::info!(email = %created.email, "agent provisioned");
        Ok(created)
    }

    /// Send the full replacement built from `update`.
    pub async fn edit(&self, agent: &User, update: &UserUpdate) -> Result<User, ApiError> {
        let replacement = update.apply_to(agent);
        let saved: User = self.backend.replace(USERS, &agent.id, &replacement).await?;
        tracing::info!(id = %saved.id, "agent updated");
        Ok(saved)
    }

    pub async fn revoke(&self, agent_id: &str) -> Result<(), ApiError> {
        self.backend.delete(USERS, agent_id).await?;
        tracing::info!(id = agent_id, "agent revoked");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryBackend;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;
    use store::models::JobTitle;

    fn backend() -> MemoryBackend {
        let backend = MemoryBackend::new();
        backend.seed(USERS, &json!({"_id": "c1", "fullname": "Client", "email": "c@ctn.tn", "role": "customer"}));
        backend.seed(
            USERS,
            &json!({"_id": "a1", "fullname": "Agent One", "email": "a1@ctn.tn", "role": "agent",
                    "action": "logistics_agent", "password": "k3y9x2pq", "phone": "+216 71 000 001"}),
        );
        backend
    }

    #[test]
    fn test_temp_password_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = temp_password(&mut rng);
        let b = temp_password(&mut rng);
        assert_eq!(a.len(), TEMP_PASSWORD_LEN);
        assert!(a.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_list_only_agents() {
        let service = AgentService::new(backend());
        let agents = service.list().await.unwrap();
        assert_eq!(agents.len(), 1);
        assert_eq!(agents[0].id, "a1");
    }

    #[tokio::test]
    async fn test_provision_edit_revoke() {
        let backend = backend();
        let service = AgentService::new(backend.clone());

        let new_agent = NewUser::agent("Sonia", "sonia@ctn.tn", "+216 71 000 002", JobTitle::ExportManager, "abcd1234");
        let created = service.provision(&new_agent).await.unwrap();
        assert_eq!(created.role, Role::Agent);
        assert_eq!(created.action.as_deref(), Some("export_manager"));
        assert_eq!(service.list().await.unwrap().len(), 2);

        let duplicate = service.provision(&new_agent).await;
        assert!(matches!(duplicate, Err(ApiError::Status { status: 409, .. })));

        let shouting = NewUser::agent("Sonia", "SONIA@ctn.tn", "+216 71 000 002", JobTitle::ExportManager, "abcd1234");
        let duplicate = service.provision(&shouting).await;
        assert!(matches!(duplicate, Err(ApiError::Status { status: 409, .. })));

        let mut update = UserUpdate::from_user(&created);
        update.fullname = "Sonia Gharbi".into();
        update.password.clear();
        let saved = service.edit(&created, &update).await.unwrap();
        assert_eq!(saved.fullname, "Sonia Gharbi");
        assert_eq!(saved.password.as_deref(), Some("abcd1234"));

        service.revoke(&created.id).await.unwrap();
        assert_eq!(service.list().await.unwrap().len(), 1);
        assert!(service.revoke(&created.id).await.is_err());
    }
}
