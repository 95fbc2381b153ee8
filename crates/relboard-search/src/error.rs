use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("index error: {0}")]
    Index(String),

    #[error("query error: {0}")]
    Query(String),
}

impl From<::tantivy::TantivyError> for SearchError {
    fn from(e: ::tantivy::TantivyError) -> Self {
        SearchError::Index(e.to_string())
    }
}
