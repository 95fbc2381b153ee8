//! User directory service

use std::sync::Arc;

use relboard_core::User;
use relboard_persistence::PersistenceService;

#[derive(Clone)]
pub struct UserService {
    persistence: Arc<dyn PersistenceService>,
}

impl UserService {
    pub fn new(persistence: Arc<dyn PersistenceService>) -> Self {
        Self { persistence }
    }

    pub async fn find_all(&self) -> anyhow::Result<Vec<User>> {
        self.persistence.user_find_all().await
    }

    pub async fn find_one(&self, id: i64) -> anyhow::Result<Option<User>> {
        self.persistence.user_find_by_id(id).await
    }

    pub async fn create(&self, user: &User) -> anyhow::Result<User> {
        tracing::debug!(login = %user.login, "Request to create user");
        self.persistence.user_create(user).await
    }
}
