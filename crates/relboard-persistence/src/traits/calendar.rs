//! Team event and out-of-office persistence traits

use async_trait::async_trait;
use relboard_core::{OutOfOffice, OutOfOfficeQuery, TeamEvent, TeamEventQuery};

/// Team event persistence operations
#[async_trait]
pub trait TeamEventPersistence: Send + Sync {
    async fn team_event_find_by_query(
        &self,
        query: &TeamEventQuery,
    ) -> anyhow::Result<Vec<TeamEvent>>;

    async fn team_event_count_by_query(&self, query: &TeamEventQuery) -> anyhow::Result<u64>;

    async fn team_event_find_by_id(&self, id: i64) -> anyhow::Result<Option<TeamEvent>>;

    async fn team_event_find_by_ids(&self, ids: &[i64]) -> anyhow::Result<Vec<TeamEvent>>;

    async fn team_event_save(&self, event: &TeamEvent) -> anyhow::Result<TeamEvent>;

    async fn team_event_delete(&self, id: i64) -> anyhow::Result<bool>;
}

/// Out-of-office persistence operations
#[async_trait]
pub trait OutOfOfficePersistence: Send + Sync {
    async fn out_of_office_find_by_query(
        &self,
        query: &OutOfOfficeQuery,
    ) -> anyhow::Result<Vec<OutOfOffice>>;

    async fn out_of_office_count_by_query(&self, query: &OutOfOfficeQuery)
    -> anyhow::Result<u64>;

    async fn out_of_office_find_by_id(&self, id: i64) -> anyhow::Result<Option<OutOfOffice>>;

    async fn out_of_office_find_by_ids(&self, ids: &[i64]) -> anyhow::Result<Vec<OutOfOffice>>;

    async fn out_of_office_save(&self, absence: &OutOfOffice) -> anyhow::Result<OutOfOffice>;

    async fn out_of_office_delete(&self, id: i64) -> anyhow::Result<bool>;
}
