//! SPR service

use std::sync::Arc;

use relboard_core::spr_stats::{self, SprShare, UserSprCount};
use relboard_core::{Resolution, Spr, SprQuery};
use relboard_persistence::PersistenceService;
use relboard_search::{COLLECTION_SPRS, SearchIndex};

use super::indexing::{mirror_delete, mirror_upsert, rebuild, search_ids};

#[derive(Clone)]
pub struct SprService {
    persistence: Arc<dyn PersistenceService>,
    index: Arc<dyn SearchIndex>,
    max_search_results: usize,
}

impl SprService {
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

    pub async fn save(&self, spr: &Spr) -> anyhow::Result<Spr> {
        tracing::debug!(id = ?spr.id, number = spr.number, "Request to save SPR");

        let saved = self.persistence.spr_save(spr).await?;
        mirror_upsert(&self.index, &saved).await;

        Ok(saved)
    }

    pub async fn find_all(&self, query: &SprQuery) -> anyhow::Result<Vec<Spr>> {
        tracing::debug!(?query, "Request to get SPRs");
        self.persistence.spr_find_by_query(query).await
    }

    pub async fn count(&self, query: &SprQuery) -> anyhow::Result<u64> {
        self.persistence.spr_count_by_query(query).await
    }

    pub async fn find_one(&self, id: i64) -> anyhow::Result<Option<Spr>> {
        self.persistence.spr_find_by_id(id).await
    }

    pub async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        tracing::debug!(id, "Request to delete SPR");

        let deleted = self.persistence.spr_delete(id).await?;
        if deleted {
            mirror_delete(&self.index, COLLECTION_SPRS, id).await;
        }

        Ok(deleted)
    }

    pub async fn search(&self, query: &str) -> anyhow::Result<Vec<Spr>> {
        tracing::debug!(query, "Request to search SPRs");

        let ids = search_ids(
            &self.index,
            COLLECTION_SPRS,
            query,
            self.max_search_results,
        )
        .await?;
        self.persistence.spr_find_by_ids(&ids).await
    }

    /// All SPRs owned by one user
    pub async fn find_by_user(&self, user_id: i64) -> anyhow::Result<Vec<Spr>> {
        self.persistence
            .spr_find_by_query(&SprQuery::for_user(user_id))
            .await
    }

    /// Open SPRs owned by one user
    pub async fn find_open_by_user(&self, user_id: i64) -> anyhow::Result<Vec<Spr>> {
        Ok(spr_stats::filter_open(self.find_by_user(user_id).await?))
    }

    /// Open SPRs across every user
    pub async fn find_open(&self) -> anyhow::Result<Vec<Spr>> {
        let all = self.find_all(&SprQuery::default()).await?;
        Ok(spr_stats::filter_open(all))
    }

    pub async fn find_reviewed(&self) -> anyhow::Result<Vec<Spr>> {
        self.find_all(&SprQuery {
            resolution: Some(Resolution::Reviewed),
            ..Default::default()
        })
        .await
    }

    /// Open SPR count for every known user, zero included.
    pub async fn open_count_by_user(&self) -> anyhow::Result<Vec<UserSprCount>> {
        let users = self.persistence.user_find_all().await?;
        let sprs = self.find_all(&SprQuery::default()).await?;

        Ok(spr_stats::open_counts_by_user(&sprs, &users))
    }

    pub async fn reviewed_count_for_user(&self, user_id: i64) -> anyhow::Result<usize> {
        let sprs = self.find_by_user(user_id).await?;
        Ok(spr_stats::reviewed_count_for_user(&sprs, user_id))
    }

    /// Share of all SPRs owned by one user.
    pub async fn user_share(&self, user_id: i64) -> anyhow::Result<SprShare> {
        let sprs = self.find_all(&SprQuery::default()).await?;
        Ok(spr_stats::user_share(&sprs, user_id))
    }

    pub async fn reindex(&self) -> anyhow::Result<usize> {
        let sprs = self.find_all(&SprQuery::default()).await?;
        rebuild(&self.index, &sprs).await
    }
}
