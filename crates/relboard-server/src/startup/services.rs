//! Wiring of the store, the search index and the tracker services

use std::sync::Arc;

use relboard_migration::{Migrator, MigratorTrait};
use relboard_persistence::{ExternalDbPersistService, PersistenceService};
use relboard_search::{SearchIndex, TantivyIndex};
use relboard_tracker::TrackerServices;
use sea_orm::DatabaseConnection;

use crate::model::Configuration;

/// Connect to the store and build the services from `configuration`.
pub async fn build_services(configuration: &Configuration) -> anyhow::Result<TrackerServices> {
    let db = configuration.database_connection().await?;
    services_for(configuration, db).await
}

/// Build the services on an already open connection.
///
/// Applies pending migrations when `db.migrate` is set and rebuilds the search
/// index when `search.reindexOnStartup` is set.
pub async fn services_for(
    configuration: &Configuration,
    db: DatabaseConnection,
) -> anyhow::Result<TrackerServices> {
    if configuration.db_migrate() {
        Migrator::up(&db, None).await?;
        tracing::info!("Database migrations applied");
    }

    let persistence: Arc<dyn PersistenceService> = Arc::new(ExternalDbPersistService::new(db));

    let index: Arc<dyn SearchIndex> = match configuration.search_dir() {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "Opening search index");
            Arc::new(TantivyIndex::open(&dir)?)
        }
        None => {
            tracing::info!("Using in-memory search index");
            Arc::new(TantivyIndex::in_memory())
        }
    };

    let services = TrackerServices::new(persistence, index, configuration.search_max_results());

    if configuration.reindex_on_startup() {
        let documents = services.reindex_all().await?;
        tracing::info!(documents, "Search index rebuilt");
    }

    Ok(services)
}
