//! SPR persistence trait

use async_trait::async_trait;
use relboard_core::{Spr, SprQuery};

/// SPR persistence operations
#[async_trait]
pub trait SprPersistence: Send + Sync {
    async fn spr_find_by_query(&self, query: &SprQuery) -> anyhow::Result<Vec<Spr>>;

    async fn spr_count_by_query(&self, query: &SprQuery) -> anyhow::Result<u64>;

    async fn spr_find_by_id(&self, id: i64) -> anyhow::Result<Option<Spr>>;

    async fn spr_find_by_ids(&self, ids: &[i64]) -> anyhow::Result<Vec<Spr>>;

    /// Insert (no id) or update (with id)
    async fn spr_save(&self, spr: &Spr) -> anyhow::Result<Spr>;

    async fn spr_delete(&self, id: i64) -> anyhow::Result<bool>;
}
