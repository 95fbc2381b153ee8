//! Search index mirroring
//!
//! The index is a best-effort copy of the store. Mirror failures are logged
//! and never fail the request that triggered them.

use std::collections::BTreeMap;
use std::sync::Arc;

use relboard_common::RelboardError;
use relboard_core::{OutOfOffice, Release, Spr, TeamEvent};
use relboard_search::{
    COLLECTION_OUT_OF_OFFICES, COLLECTION_RELEASES, COLLECTION_SPRS, COLLECTION_TEAM_EVENTS,
    SearchError, SearchIndex,
};

/// A record that can be mirrored into the search index
pub trait Indexable {
    const COLLECTION: &'static str;

    fn document_id(&self) -> Option<i64>;

    /// Field values that become searchable text
    fn search_fields(&self) -> BTreeMap<String, String>;
}

fn put(fields: &mut BTreeMap<String, String>, key: &str, value: Option<impl ToString>) {
    if let Some(value) = value {
        fields.insert(key.to_string(), value.to_string());
    }
}

impl Indexable for Release {
    const COLLECTION: &'static str = COLLECTION_RELEASES;

    fn document_id(&self) -> Option<i64> {
        self.id
    }

    fn search_fields(&self) -> BTreeMap<String, String> {
        let mut fields = BTreeMap::new();
        put(&mut fields, "territory", Some(self.territory));
        put(&mut fields, "territoryLabel", Some(self.territory.label()));
        put(&mut fields, "version", Some(self.version_name()));
        put(&mut fields, "build", Some(self.build));
        put(&mut fields, "releaseLetter", Some(&self.release_letter));
        put(&mut fields, "databaseVersion", Some(&self.database_version));
        put(&mut fields, "wsVersion", self.ws_version.as_ref());
        put(&mut fields, "tmaVersion", self.tma_version.as_ref());
        put(&mut fields, "newFeatures", self.new_features.as_ref());
        put(&mut fields, "updatedFeatures", self.updated_features.as_ref());
        fields
    }
}

impl Indexable for Spr {
    const COLLECTION: &'static str = COLLECTION_SPRS;

    fn document_id(&self) -> Option<i64> {
        self.id
    }

    fn search_fields(&self) -> BTreeMap<String, String> {
        let mut fields = BTreeMap::new();
        put(&mut fields, "territory", Some(self.territory));
        put(&mut fields, "number", Some(self.number));
        put(&mut fields, "fullNumber", Some(&self.full_number));
        put(&mut fields, "description", self.description.as_ref());
        put(&mut fields, "priority", self.priority);
        put(&mut fields, "resolution", self.resolution);
        put(&mut fields, "jiraLink", self.jira_link.as_ref());
        fields
    }
}

impl Indexable for TeamEvent {
    const COLLECTION: &'static str = COLLECTION_TEAM_EVENTS;

    fn document_id(&self) -> Option<i64> {
        self.id
    }

    fn search_fields(&self) -> BTreeMap<String, String> {
        let mut fields = BTreeMap::new();
        put(&mut fields, "description", self.description.as_ref());
        put(&mut fields, "start", Some(self.start.date_naive()));
        fields
    }
}

impl Indexable for OutOfOffice {
    const COLLECTION: &'static str = COLLECTION_OUT_OF_OFFICES;

    fn document_id(&self) -> Option<i64> {
        self.id
    }

    fn search_fields(&self) -> BTreeMap<String, String> {
        let mut fields = BTreeMap::new();
        put(&mut fields, "description", self.description.as_ref());
        put(&mut fields, "start", Some(self.start.date_naive()));
        fields
    }
}

/// Runs an index operation on the blocking pool.
///
/// Commits and reader reloads touch the disk, so they stay off the async
/// workers that serve requests.
async fn run_blocking<R, F>(index: &Arc<dyn SearchIndex>, op: F) -> anyhow::Result<R>
where
    F: FnOnce(&dyn SearchIndex) -> anyhow::Result<R> + Send + 'static,
    R: Send + 'static,
{
    let index = index.clone();
    tokio::task::spawn_blocking(move || op(index.as_ref()))
        .await
        .map_err(|e| RelboardError::InternalError(format!("index task failed: {}", e)))?
}

/// Write `record` into its collection, logging failures.
pub async fn mirror_upsert<T: Indexable>(index: &Arc<dyn SearchIndex>, record: &T) {
    let Some(id) = record.document_id() else {
        tracing::warn!(collection = T::COLLECTION, "Cannot index a record without an id");
        return;
    };

    let collection = T::COLLECTION;
    let fields = record.search_fields();
    let result = run_blocking(index, move |index| Ok(index.index(collection, id, fields)?)).await;

    if let Err(e) = result {
        tracing::warn!(collection = T::COLLECTION, id, error = %e, "Failed to index record");
    }
}

/// Remove a document from `collection`, logging failures.
pub async fn mirror_delete(index: &Arc<dyn SearchIndex>, collection: &'static str, id: i64) {
    let result = run_blocking(index, move |index| Ok(index.delete(collection, id)?)).await;

    if let Err(e) = result {
        tracing::warn!(collection, id, error = %e, "Failed to remove record from index");
    }
}

/// Run a query against one collection and return the matching ids in score order.
pub async fn search_ids(
    index: &Arc<dyn SearchIndex>,
    collection: &'static str,
    query: &str,
    limit: usize,
) -> anyhow::Result<Vec<i64>> {
    let query = query.to_string();
    let hits = run_blocking(index, move |index| {
        index
            .search(collection, &query, limit)
            .map_err(|e| match e {
                SearchError::Query(message) => anyhow::Error::from(RelboardError::InvalidQuery(message)),
                SearchError::Index(message) => anyhow::Error::from(RelboardError::InternalError(message)),
            })
    })
    .await?;

    Ok(hits.into_iter().map(|hit| hit.id).collect())
}

/// Replace the contents of a collection with `records`.
///
/// Records without an id are skipped. Returns the number of records given.
pub async fn rebuild<T: Indexable>(
    index: &Arc<dyn SearchIndex>,
    records: &[T],
) -> anyhow::Result<usize> {
    let documents: Vec<(i64, BTreeMap<String, String>)> = records
        .iter()
        .filter_map(|record| Some((record.document_id()?, record.search_fields())))
        .collect();

    let collection = T::COLLECTION;
    run_blocking(index, move |index| {
        index
            .clear(collection)
            .map_err(|e| RelboardError::InternalError(e.to_string()))?;

        for (id, fields) in documents {
            if let Err(e) = index.index(collection, id, fields) {
                tracing::warn!(collection, id, error = %e, "Failed to index record");
            }
        }
        Ok(())
    })
    .await?;

    Ok(records.len())
}
