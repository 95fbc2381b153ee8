use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Login).string_len(50).not_null().unique_key())
                    .col(ColumnDef::new(Users::FirstName).string_len(50))
                    .col(ColumnDef::new(Users::LastName).string_len(50))
                    .col(ColumnDef::new(Users::Email).string_len(191))
                    .col(ColumnDef::new(Users::Activated).boolean().not_null().default(true))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Releases::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Releases::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Releases::ReleaseDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Releases::Territory).string_len(32).not_null())
                    .col(ColumnDef::new(Releases::Build).integer().not_null())
                    .col(ColumnDef::new(Releases::ReleaseLetter).string_len(16).not_null())
                    .col(ColumnDef::new(Releases::PrefixLetter).string_len(16))
                    .col(ColumnDef::new(Releases::DatabaseVersion).string_len(64).not_null())
                    .col(ColumnDef::new(Releases::WsVersion).string_len(64))
                    .col(ColumnDef::new(Releases::TmaVersion).string_len(64))
                    .col(ColumnDef::new(Releases::Port).integer())
                    .col(ColumnDef::new(Releases::NewFeatures).text())
                    .col(ColumnDef::new(Releases::UpdatedFeatures).text())
                    .col(
                        ColumnDef::new(Releases::IsCurrent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_releases_territory")
                    .table(Releases::Table)
                    .col(Releases::Territory)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Sprs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sprs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sprs::Territory).string_len(32).not_null())
                    .col(ColumnDef::new(Sprs::Number).integer().not_null().unique_key())
                    .col(ColumnDef::new(Sprs::FullNumber).string_len(64).not_null().unique_key())
                    .col(ColumnDef::new(Sprs::Description).text())
                    .col(ColumnDef::new(Sprs::Priority).string_len(32))
                    .col(ColumnDef::new(Sprs::Resolution).string_len(32))
                    .col(ColumnDef::new(Sprs::JiraLink).string_len(255))
                    .col(ColumnDef::new(Sprs::ReviewerId).big_integer())
                    .col(ColumnDef::new(Sprs::UserId).big_integer())
                    .col(ColumnDef::new(Sprs::ReleaseId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sprs_user")
                            .from(Sprs::Table, Sprs::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sprs_release")
                            .from(Sprs::Table, Sprs::ReleaseId)
                            .to(Releases::Table, Releases::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TeamEvents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeamEvents::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TeamEvents::StartTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeamEvents::EndTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TeamEvents::Description).string_len(255))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OutOfOffices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OutOfOffices::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OutOfOffices::StartTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OutOfOffices::EndTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(OutOfOffices::Description).string_len(255))
                    .col(ColumnDef::new(OutOfOffices::UserId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_out_of_offices_user")
                            .from(OutOfOffices::Table, OutOfOffices::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OutOfOffices::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TeamEvents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Sprs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Releases::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Login,
    FirstName,
    LastName,
    Email,
    Activated,
}

#[derive(DeriveIden)]
enum Releases {
    Table,
    Id,
    ReleaseDate,
    Territory,
    Build,
    ReleaseLetter,
    PrefixLetter,
    DatabaseVersion,
    WsVersion,
    TmaVersion,
    Port,
    NewFeatures,
    UpdatedFeatures,
    IsCurrent,
}

#[derive(DeriveIden)]
enum Sprs {
    Table,
    Id,
    Territory,
    Number,
    FullNumber,
    Description,
    Priority,
    Resolution,
    JiraLink,
    ReviewerId,
    UserId,
    ReleaseId,
}

#[derive(DeriveIden)]
enum TeamEvents {
    Table,
    Id,
    StartTime,
    EndTime,
    Description,
}

#[derive(DeriveIden)]
enum OutOfOffices {
    Table,
    Id,
    StartTime,
    EndTime,
    Description,
    UserId,
}
