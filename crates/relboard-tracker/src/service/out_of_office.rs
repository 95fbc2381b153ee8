//! Out-of-office service

use std::sync::Arc;

use relboard_core::{OutOfOffice, OutOfOfficeQuery};
use relboard_persistence::PersistenceService;
use relboard_search::{COLLECTION_OUT_OF_OFFICES, SearchIndex};

use super::indexing::{mirror_delete, mirror_upsert, rebuild, search_ids};

#[derive(Clone)]
pub struct OutOfOfficeService {
    persistence: Arc<dyn PersistenceService>,
    index: Arc<dyn SearchIndex>,
    max_search_results: usize,
}

impl OutOfOfficeService {
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

    pub async fn save(&self, absence: &OutOfOffice) -> anyhow::Result<OutOfOffice> {
        tracing::debug!(id = ?absence.id, user_id = ?absence.user_id, "Request to save out-of-office");

        let saved = self.persistence.out_of_office_save(absence).await?;
        mirror_upsert(&self.index, &saved).await;

        Ok(saved)
    }

    pub async fn find_all(&self, query: &OutOfOfficeQuery) -> anyhow::Result<Vec<OutOfOffice>> {
        self.persistence.out_of_office_find_by_query(query).await
    }

    pub async fn count(&self, query: &OutOfOfficeQuery) -> anyhow::Result<u64> {
        self.persistence.out_of_office_count_by_query(query).await
    }

    pub async fn find_one(&self, id: i64) -> anyhow::Result<Option<OutOfOffice>> {
        self.persistence.out_of_office_find_by_id(id).await
    }

    pub async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        tracing::debug!(id, "Request to delete out-of-office");

        let deleted = self.persistence.out_of_office_delete(id).await?;
        if deleted {
            mirror_delete(&self.index, COLLECTION_OUT_OF_OFFICES, id).await;
        }

        Ok(deleted)
    }

    pub async fn search(&self, query: &str) -> anyhow::Result<Vec<OutOfOffice>> {
        let ids = search_ids(
            &self.index,
            COLLECTION_OUT_OF_OFFICES,
            query,
            self.max_search_results,
        )
        .await?;
        self.persistence.out_of_office_find_by_ids(&ids).await
    }

    pub async fn reindex(&self) -> anyhow::Result<usize> {
        let absences = self.find_all(&OutOfOfficeQuery::default()).await?;
        rebuild(&self.index, &absences).await
    }
}
