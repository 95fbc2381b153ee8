//! User persistence trait

use async_trait::async_trait;
use relboard_core::User;

/// User directory operations
#[async_trait]
pub trait UserPersistence: Send + Sync {
    /// All users ordered by id
    async fn user_find_all(&self) -> anyhow::Result<Vec<User>>;

    async fn user_find_by_id(&self, id: i64) -> anyhow::Result<Option<User>>;

    async fn user_find_by_login(&self, login: &str) -> anyhow::Result<Option<User>>;

    /// Create a user; a taken login is reported as `RelboardError::LoginExists`
    async fn user_create(&self, user: &User) -> anyhow::Result<User>;
}
