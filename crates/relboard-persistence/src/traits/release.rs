//! Release persistence trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use relboard_core::{Release, ReleaseQuery, Territory};

use crate::model::ReleaseCreateOutcome;

/// Release persistence operations
#[async_trait]
pub trait ReleasePersistence: Send + Sync {
    /// Find releases matching the query, ordered by id
    async fn release_find_by_query(&self, query: &ReleaseQuery) -> anyhow::Result<Vec<Release>>;

    /// Count releases matching the query
    async fn release_count_by_query(&self, query: &ReleaseQuery) -> anyhow::Result<u64>;

    async fn release_find_by_id(&self, id: i64) -> anyhow::Result<Option<Release>>;

    /// Find releases by id, returned in the order of `ids`; unknown ids are skipped
    async fn release_find_by_ids(&self, ids: &[i64]) -> anyhow::Result<Vec<Release>>;

    /// All releases currently in production
    async fn release_find_current(&self) -> anyhow::Result<Vec<Release>>;

    /// Releases currently in production for one territory
    async fn release_find_current_by_territory(
        &self,
        territory: Territory,
    ) -> anyhow::Result<Vec<Release>>;

    /// Releases not in production and dated after `now`
    async fn release_find_future(&self, now: DateTime<Utc>) -> anyhow::Result<Vec<Release>>;

    /// Insert a new release after applying the promotion rule.
    ///
    /// The current-release lookup, the rule and the insert share one
    /// transaction. A concurrent promotion that wins the race surfaces as
    /// [`ReleaseCreateOutcome::Rejected`] rather than as an error.
    async fn release_create(
        &self,
        candidate: &Release,
        now: DateTime<Utc>,
    ) -> anyhow::Result<ReleaseCreateOutcome>;

    /// Insert (no id) or update (with id) without the promotion rule.
    ///
    /// The store still refuses a second current release for a territory.
    async fn release_save(&self, release: &Release) -> anyhow::Result<Release>;

    /// Delete a release, detaching its SPRs
    async fn release_delete(&self, id: i64) -> anyhow::Result<bool>;
}
