//! Relboard Persistence - Database entities and persistence layer
//!
//! This crate provides:
//! - SeaORM entity definitions
//! - Persistence trait abstractions used by the tracker services
//! - The SQL backend (PostgreSQL or SQLite via SeaORM)

pub mod entity;
pub mod model;
pub mod sql;
pub mod traits;

// Re-export sea-orm for convenience
pub use sea_orm;

// Re-export entity prelude
pub use entity::prelude::*;

// Re-export persistence traits
pub use traits::{
    OutOfOfficePersistence, PersistenceService, ReleasePersistence, SprPersistence,
    TeamEventPersistence, UserPersistence,
};

// Re-export SQL backend
pub use sql::ExternalDbPersistService;

pub use model::ReleaseCreateOutcome;
