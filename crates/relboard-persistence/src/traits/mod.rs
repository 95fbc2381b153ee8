//! Persistence traits for the storage abstraction layer
//!
//! The tracker services only talk to these traits, so the SQL backend can be
//! swapped or mocked in tests.

pub mod calendar;
pub mod release;
pub mod spr;
pub mod user;

pub use calendar::{OutOfOfficePersistence, TeamEventPersistence};
pub use release::ReleasePersistence;
pub use spr::SprPersistence;
pub use user::UserPersistence;

use async_trait::async_trait;

/// Unified persistence service trait
///
/// This is the main interface for all storage operations.
#[async_trait]
pub trait PersistenceService:
    ReleasePersistence
    + SprPersistence
    + TeamEventPersistence
    + OutOfOfficePersistence
    + UserPersistence
    + Send
    + Sync
{
    /// Health check for the storage backend
    async fn health_check(&self) -> anyhow::Result<()>;
}
