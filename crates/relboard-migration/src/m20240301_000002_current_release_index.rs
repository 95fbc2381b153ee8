use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Partial unique index: a territory holds at most one row with `is_current`.
///
/// The query builder has no portable way to express the `WHERE` clause, so the
/// statement is issued as raw SQL understood by both PostgreSQL and SQLite.
const CREATE_CURRENT_RELEASE_INDEX: &str = "CREATE UNIQUE INDEX IF NOT EXISTS \
     ux_releases_current_territory ON releases (territory) WHERE is_current = TRUE";

const DROP_CURRENT_RELEASE_INDEX: &str = "DROP INDEX IF EXISTS ux_releases_current_territory";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(CREATE_CURRENT_RELEASE_INDEX)
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(DROP_CURRENT_RELEASE_INDEX)
            .await?;
        Ok(())
    }
}
