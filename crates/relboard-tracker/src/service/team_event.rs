//! Team event service

use std::sync::Arc;

use relboard_core::{TeamEvent, TeamEventQuery};
use relboard_persistence::PersistenceService;
use relboard_search::{COLLECTION_TEAM_EVENTS, SearchIndex};

use super::indexing::{mirror_delete, mirror_upsert, rebuild, search_ids};

#[derive(Clone)]
pub struct TeamEventService {
    persistence: Arc<dyn PersistenceService>,
    index: Arc<dyn SearchIndex>,
    max_search_results: usize,
}

impl TeamEventService {
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

    pub async fn save(&self, event: &TeamEvent) -> anyhow::Result<TeamEvent> {
        tracing::debug!(id = ?event.id, "Request to save team event");

        let saved = self.persistence.team_event_save(event).await?;
        mirror_upsert(&self.index, &saved).await;

        Ok(saved)
    }

    pub async fn find_all(&self, query: &TeamEventQuery) -> anyhow::Result<Vec<TeamEvent>> {
        self.persistence.team_event_find_by_query(query).await
    }

    pub async fn count(&self, query: &TeamEventQuery) -> anyhow::Result<u64> {
        self.persistence.team_event_count_by_query(query).await
    }

    pub async fn find_one(&self, id: i64) -> anyhow::Result<Option<TeamEvent>> {
        self.persistence.team_event_find_by_id(id).await
    }

    pub async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        tracing::debug!(id, "Request to delete team event");

        let deleted = self.persistence.team_event_delete(id).await?;
        if deleted {
            mirror_delete(&self.index, COLLECTION_TEAM_EVENTS, id).await;
        }

        Ok(deleted)
    }

    pub async fn search(&self, query: &str) -> anyhow::Result<Vec<TeamEvent>> {
        let ids = search_ids(
            &self.index,
            COLLECTION_TEAM_EVENTS,
            query,
            self.max_search_results,
        )
        .await?;
        self.persistence.team_event_find_by_ids(&ids).await
    }

    pub async fn reindex(&self) -> anyhow::Result<usize> {
        let events = self.find_all(&TeamEventQuery::default()).await?;
        rebuild(&self.index, &events).await
    }
}
