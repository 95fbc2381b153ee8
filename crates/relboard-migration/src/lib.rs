//! Schema migrations for the Relboard database
//!
//! PostgreSQL and SQLite are supported. Both understand the partial unique
//! index that keeps a single current release per territory.

pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_tables;
mod m20240301_000002_current_release_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_tables::Migration),
            Box::new(m20240301_000002_current_release_index::Migration),
        ]
    }
}
