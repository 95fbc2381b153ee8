//! Service layer
//!
//! Services own the orchestration around the store: they apply the business
//! rules, persist through [`PersistenceService`] and mirror every successful
//! write into the [`SearchIndex`].

pub mod indexing;
pub mod out_of_office;
pub mod release;
pub mod spr;
pub mod team_event;
pub mod user;

use std::sync::Arc;

use relboard_persistence::PersistenceService;
use relboard_search::SearchIndex;

pub use out_of_office::OutOfOfficeService;
pub use release::ReleaseService;
pub use spr::SprService;
pub use team_event::TeamEventService;
pub use user::UserService;

/// Default upper bound on search hits returned to a caller
pub const DEFAULT_MAX_SEARCH_RESULTS: usize = 100;

/// All tracker services, sharing one store and one search index
#[derive(Clone)]
pub struct TrackerServices {
    pub releases: ReleaseService,
    pub sprs: SprService,
    pub team_events: TeamEventService,
    pub out_of_offices: OutOfOfficeService,
    pub users: UserService,
    persistence: Arc<dyn PersistenceService>,
}

impl TrackerServices {
    pub fn new(
        persistence: Arc<dyn PersistenceService>,
        index: Arc<dyn SearchIndex>,
        max_search_results: usize,
    ) -> Self {
        Self {
            releases: ReleaseService::new(persistence.clone(), index.clone(), max_search_results),
            sprs: SprService::new(persistence.clone(), index.clone(), max_search_results),
            team_events: TeamEventService::new(
                persistence.clone(),
                index.clone(),
                max_search_results,
            ),
            out_of_offices: OutOfOfficeService::new(
                persistence.clone(),
                index,
                max_search_results,
            ),
            users: UserService::new(persistence.clone()),
            persistence,
        }
    }

    /// Rebuild every search collection from the store.
    ///
    /// Returns the number of documents indexed.
    pub async fn reindex_all(&self) -> anyhow::Result<usize> {
        let releases = self.releases.reindex().await?;
        let sprs = self.sprs.reindex().await?;
        let team_events = self.team_events.reindex().await?;
        let out_of_offices = self.out_of_offices.reindex().await?;

        tracing::info!(
            releases,
            sprs,
            team_events,
            out_of_offices,
            "Search index rebuilt from the store"
        );

        Ok(releases + sprs + team_events + out_of_offices)
    }

    pub async fn health_check(&self) -> anyhow::Result<()> {
        self.persistence.health_check().await
    }
}
