use std::collections::BTreeMap;

use crate::error::SearchError;

/// A single search hit with its record id and relevance score.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub id: i64,
    pub score: f32,
}

/// SearchIndex provides full-text search over indexed records.
///
/// Documents are organized by collection (e.g. "releases", "sprs").
/// Each document is keyed by the record id and carries a set of string
/// fields that are indexed.
pub trait SearchIndex: Send + Sync {
    /// Index a document. A document with the same id in the collection is
    /// replaced.
    fn index(
        &self,
        collection: &str,
        id: i64,
        fields: BTreeMap<String, String>,
    ) -> Result<(), SearchError>;

    /// Delete a document by id from a collection.
    fn delete(&self, collection: &str, id: i64) -> Result<(), SearchError>;

    /// Search a collection. Returns up to `limit` hits ordered by relevance
    /// score, highest first.
    fn search(
        &self,
        collection: &str,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchHit>, SearchError>;

    /// Remove every document from a collection.
    fn clear(&self, collection: &str) -> Result<(), SearchError>;
}
