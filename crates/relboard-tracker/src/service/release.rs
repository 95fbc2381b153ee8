//! Release service
//!
//! Creating a release runs the promotion rule; saving does not.

use std::sync::Arc;

use chrono::Utc;
use relboard_core::{Release, ReleaseQuery, Spr, SprQuery};
use relboard_persistence::{PersistenceService, ReleaseCreateOutcome};
use relboard_search::{COLLECTION_RELEASES, SearchIndex};

use super::indexing::{mirror_delete, mirror_upsert, rebuild, search_ids};

#[derive(Clone)]
pub struct ReleaseService {
    persistence: Arc<dyn PersistenceService>,
    index: Arc<dyn SearchIndex>,
    max_search_results: usize,
}

impl ReleaseService {
    pub fn new(
        persistence: Arc<dyn PersistenceService>,
        index: Arc<dyn SearchIndex>,
        max_search_results: usize,
    ) -> Self {
        Self {
            persistence,
            index,
            max_search_results,
        }
    }

    /// Create a release, applying the promotion rule when it is marked current.
    ///
    /// A rejection is a normal outcome and is returned as
    /// [`ReleaseCreateOutcome::Rejected`]; `Err` is reserved for store failures.
    pub async fn create_release(&self, candidate: &Release) -> anyhow::Result<ReleaseCreateOutcome> {
        tracing::debug!(
            territory = %candidate.territory,
            current = candidate.current,
            "Request to create release"
        );

        let outcome = self
            .persistence
            .release_create(candidate, Utc::now())
            .await?;

        match &outcome {
            ReleaseCreateOutcome::Created(release) => {
                mirror_upsert(&self.index, release).await;
            }
            ReleaseCreateOutcome::Rejected(kind) => {
                tracing::info!(
                    territory = %candidate.territory,
                    error_key = kind.error_key(),
                    "Release promotion rejected"
                );
            }
        }

        Ok(outcome)
    }

    /// Insert or update a release without the promotion rule.
    pub async fn save(&self, release: &Release) -> anyhow::Result<Release> {
        tracing::debug!(id = ?release.id, territory = %release.territory, "Request to save release");

        let saved = self.persistence.release_save(release).await?;
        mirror_upsert(&self.index, &saved).await;

        Ok(saved)
    }

    pub async fn find_all(&self, query: &ReleaseQuery) -> anyhow::Result<Vec<Release>> {
        tracing::debug!(?query, "Request to get releases");
        self.persistence.release_find_by_query(query).await
    }

    pub async fn count(&self, query: &ReleaseQuery) -> anyhow::Result<u64> {
        self.persistence.release_count_by_query(query).await
    }

    pub async fn find_one(&self, id: i64) -> anyhow::Result<Option<Release>> {
        tracing::debug!(id, "Request to get release");
        self.persistence.release_find_by_id(id).await
    }

    /// Releases currently in production, across all territories.
    pub async fn find_current_releases(&self) -> anyhow::Result<Vec<Release>> {
        self.persistence.release_find_current().await
    }

    /// Releases not yet in production and dated after now.
    pub async fn find_future_releases(&self) -> anyhow::Result<Vec<Release>> {
        self.persistence.release_find_future(Utc::now()).await
    }

    /// SPRs fixed by a release.
    pub async fn find_sprs(&self, release_id: i64) -> anyhow::Result<Vec<Spr>> {
        self.persistence
            .spr_find_by_query(&SprQuery::for_release(release_id))
            .await
    }

    /// Delete a release from the store and the index.
    ///
    /// Returns `false` when no release had that id.
    pub async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        tracing::debug!(id, "Request to delete release");

        let deleted = self.persistence.release_delete(id).await?;
        if deleted {
            mirror_delete(&self.index, COLLECTION_RELEASES, id).await;
        }

        Ok(deleted)
    }

    pub async fn search(&self, query: &str) -> anyhow::Result<Vec<Release>> {
        tracing::debug!(query, "Request to search releases");

        let ids = search_ids(
            &self.index,
            COLLECTION_RELEASES,
            query,
            self.max_search_results,
        )
        .await?;
        self.persistence.release_find_by_ids(&ids).await
    }

    pub async fn reindex(&self) -> anyhow::Result<usize> {
        let releases = self
            .persistence
            .release_find_by_query(&ReleaseQuery::default())
            .await?;
        rebuild(&self.index, &releases).await
    }
}
