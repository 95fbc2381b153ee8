//! Relboard Search - full-text index mirroring the relational store
//!
//! The database stays the source of truth. The index only maps free-text
//! queries to record ids, which callers then load from the store.

pub mod error;
pub mod tantivy_index;
pub mod traits;

pub use error::SearchError;
pub use tantivy_index::TantivyIndex;
pub use traits::{SearchHit, SearchIndex};

/// Collection holding release documents
pub const COLLECTION_RELEASES: &str = "releases";
/// Collection holding SPR documents
pub const COLLECTION_SPRS: &str = "sprs";
/// Collection holding team event documents
pub const COLLECTION_TEAM_EVENTS: &str = "team_events";
/// Collection holding out-of-office documents
pub const COLLECTION_OUT_OF_OFFICES: &str = "out_of_offices";
