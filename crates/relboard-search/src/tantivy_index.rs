use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tantivy::collector::TopDocs;
use tantivy::directory::MmapDirectory;
use tantivy::query::QueryParser;
use tantivy::schema::Value as TantivyValue;
use tantivy::schema::{Field, STORED, STRING, Schema, TEXT};
use tantivy::{Index, IndexReader, IndexWriter, ReloadPolicy, TantivyDocument, Term, doc};

use crate::error::SearchError;
use crate::traits::{SearchHit, SearchIndex};

const WRITER_HEAP_BYTES: usize = 20_000_000;

/// Per-collection index state.
struct CollectionIndex {
    index: Index,
    reader: IndexReader,
    writer: Mutex<IndexWriter>,
    id_field: Field,
    body_field: Field,
}

impl CollectionIndex {
    fn commit(&self, writer: &mut IndexWriter) -> Result<(), SearchError> {
        writer.commit()?;
        self.reader.reload()?;
        Ok(())
    }
}

/// TantivyIndex is a SearchIndex implementation backed by Tantivy.
///
/// Each collection gets its own Tantivy index, either in memory or in a
/// subdirectory of `base_dir`. Documents have two fields:
/// - `_id` (STRING | STORED): exact-match record id, untokenized
/// - `_body` (TEXT): concatenated field values for full-text search
pub struct TantivyIndex {
    base_dir: Option<PathBuf>,
    collections: RwLock<HashMap<String, Arc<CollectionIndex>>>,
}

impl TantivyIndex {
    /// Create an index whose collections live under `base_dir`.
    pub fn open(base_dir: &Path) -> Result<Self, SearchError> {
        std::fs::create_dir_all(base_dir).map_err(|e| SearchError::Index(e.to_string()))?;

        Ok(Self {
            base_dir: Some(base_dir.to_path_buf()),
            collections: RwLock::new(HashMap::new()),
        })
    }

    /// Create an index held entirely in memory.
    pub fn in_memory() -> Self {
        Self {
            base_dir: None,
            collections: RwLock::new(HashMap::new()),
        }
    }

    /// Get or create a collection index.
    fn collection(&self, name: &str) -> Result<Arc<CollectionIndex>, SearchError> {
        // Fast path: already exists.
        if let Some(col) = self.collections.read().get(name) {
            return Ok(col.clone());
        }

        // Slow path: create.
        let mut collections = self.collections.write();
        if let Some(col) = collections.get(name) {
            return Ok(col.clone());
        }

        let mut schema_builder = Schema::builder();
        let id_field = schema_builder.add_text_field("_id", STRING | STORED);
        let body_field = schema_builder.add_text_field("_body", TEXT);
        let schema = schema_builder.build();

        let index = match &self.base_dir {
            Some(base_dir) => {
                let col_dir = base_dir.join(name);
                std::fs::create_dir_all(&col_dir)
                    .map_err(|e| SearchError::Index(e.to_string()))?;
                let dir =
                    MmapDirectory::open(&col_dir).map_err(|e| SearchError::Index(e.to_string()))?;
                Index::open_or_create(dir, schema)?
            }
            None => Index::create_in_ram(schema),
        };

        let writer: IndexWriter = index.writer_with_num_threads(1, WRITER_HEAP_BYTES)?;
        let reader: IndexReader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()?;

        tracing::debug!(collection = name, persistent = self.base_dir.is_some(), "Opened search collection");

        let col = Arc::new(CollectionIndex {
            index,
            reader,
            writer: Mutex::new(writer),
            id_field,
            body_field,
        });
        collections.insert(name.to_string(), col.clone());

        Ok(col)
    }
}

impl SearchIndex for TantivyIndex {
    fn index(
        &self,
        collection: &str,
        id: i64,
        fields: BTreeMap<String, String>,
    ) -> Result<(), SearchError> {
        let col = self.collection(collection)?;
        let id = id.to_string();

        // _body: field values only, so keys do not pollute the index
        let body: String = fields
            .into_values()
            .filter(|value| !value.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        let mut writer = col.writer.lock();

        // Delete existing document with same id (upsert).
        writer.delete_term(Term::from_field_text(col.id_field, &id));
        writer.add_document(doc!(
            col.id_field => id,
            col.body_field => body,
        ))?;

        col.commit(&mut writer)
    }

    fn delete(&self, collection: &str, id: i64) -> Result<(), SearchError> {
        let col = self.collection(collection)?;

        let mut writer = col.writer.lock();
        writer.delete_term(Term::from_field_text(col.id_field, &id.to_string()));

        col.commit(&mut writer)
    }

    fn search(
        &self,
        collection: &str,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchHit>, SearchError> {
        let col = self.collection(collection)?;

        let searcher = col.reader.searcher();
        // Only the _body field is searched. _id is untokenized.
        let query_parser = QueryParser::for_index(&col.index, vec![col.body_field]);
        let parsed = query_parser
            .parse_query(query)
            .map_err(|e| SearchError::Query(e.to_string()))?;

        let top_docs = searcher
            .search(&parsed, &TopDocs::with_limit(limit.max(1)))
            .map_err(|e| SearchError::Query(e.to_string()))?;

        let mut hits = Vec::with_capacity(top_docs.len());
        for (score, address) in top_docs {
            let doc: TantivyDocument = searcher.doc(address)?;
            let id = doc
                .get_first(col.id_field)
                .and_then(|value| value.as_str())
                .and_then(|value| value.parse::<i64>().ok());

            match id {
                Some(id) => hits.push(SearchHit { id, score }),
                None => tracing::warn!(collection, "Skipping search document without a valid id"),
            }
        }

        Ok(hits)
    }

    fn clear(&self, collection: &str) -> Result<(), SearchError> {
        let col = self.collection(collection)?;

        let mut writer = col.writer.lock();
        writer.delete_all_documents()?;

        col.commit(&mut writer)
    }
}
