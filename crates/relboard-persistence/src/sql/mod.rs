//! SQL-based persistence backend (PostgreSQL/SQLite via SeaORM)
//!
//! This module implements the `PersistenceService` trait with direct SeaORM
//! queries. Rows are translated into `relboard_core` model types on the way
//! out, enum columns are stored as their upper-case names.

use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use relboard_common::{ENTITY_OUT_OF_OFFICE, ENTITY_RELEASE, ENTITY_SPR, ENTITY_TEAM_EVENT};
use relboard_common::{ENTITY_USER, RelboardError};
use relboard_core::{
    OutOfOffice, OutOfOfficeQuery, PromotionDecision, RejectionKind, Release, ReleaseQuery, Spr,
    SprQuery, TeamEvent, TeamEventQuery, Territory, User, evaluate_promotion,
};
use sea_orm::*;

use crate::entity::{out_of_offices, releases, sprs, team_events, users};
use crate::model::ReleaseCreateOutcome;
use crate::traits::*;

/// External database persistence service
///
/// Wraps a SeaORM `DatabaseConnection` and implements all persistence traits
/// with direct database queries.
pub struct ExternalDbPersistService {
    db: DatabaseConnection,
}

impl ExternalDbPersistService {
    /// Create a new ExternalDbPersistService with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// One read, guard and insert cycle inside a single transaction.
    ///
    /// Store failures keep their `DbErr` so the caller can tell lock
    /// contention apart and run the whole cycle again.
    async fn release_create_once(
        &self,
        candidate: &Release,
        now: DateTime<Utc>,
    ) -> anyhow::Result<ReleaseCreateOutcome> {
        let tx = self.db.begin().await?;

        let existing: Vec<Release> = if candidate.current {
            let read = releases::Entity::find()
                .filter(release_condition(&ReleaseQuery::current_in(
                    candidate.territory,
                )))
                .all(&tx)
                .await;
            match read.map_err(anyhow::Error::from).and_then(convert_all) {
                Ok(existing) => existing,
                Err(e) => {
                    rollback_quietly(tx).await;
                    return Err(e);
                }
            }
        } else {
            Vec::new()
        };

        match insert_guarded(&tx, candidate, &existing, now).await {
            Ok(Ok(model)) => {
                tx.commit().await?;
                Ok(ReleaseCreateOutcome::Created(Release::try_from(model)?))
            }
            Ok(Err(kind)) => {
                tx.rollback().await?;
                Ok(ReleaseCreateOutcome::Rejected(kind))
            }
            Err(e) => {
                rollback_quietly(tx).await;
                Err(e.into())
            }
        }
    }
}

/// Rolls back a transaction whose statement already failed. The rollback
/// error, if any, is secondary to the one being returned.
async fn rollback_quietly(tx: DatabaseTransaction) {
    if let Err(e) = tx.rollback().await {
        tracing::debug!(error = %e, "Rollback after failed statement also failed");
    }
}

// ============================================================================
// PersistenceService implementation
// ============================================================================

#[async_trait]
impl PersistenceService for ExternalDbPersistService {
    async fn health_check(&self) -> anyhow::Result<()> {
        self.db.ping().await?;
        Ok(())
    }
}

// ============================================================================
// Row conversion helpers
// ============================================================================

fn parse_column<T>(column: &str, value: &str) -> anyhow::Result<T>
where
    T: FromStr<Err = String>,
{
    value.parse::<T>().map_err(|e| {
        anyhow::Error::from(RelboardError::DatabaseError(format!(
            "column '{}': {}",
            column, e
        )))
    })
}

fn parse_optional_column<T>(column: &str, value: Option<&str>) -> anyhow::Result<Option<T>>
where
    T: FromStr<Err = String>,
{
    value.map(|v| parse_column(column, v)).transpose()
}

fn convert_all<M, T>(models: Vec<M>) -> anyhow::Result<Vec<T>>
where
    T: TryFrom<M, Error = anyhow::Error>,
{
    models.into_iter().map(T::try_from).collect()
}

/// Reorders `items` to follow `ids`, dropping ids that were not found.
fn order_by_ids<T>(ids: &[i64], items: Vec<T>, id_of: impl Fn(&T) -> Option<i64>) -> Vec<T> {
    let mut by_id: HashMap<i64, T> = items
        .into_iter()
        .filter_map(|item| id_of(&item).map(|id| (id, item)))
        .collect();

    ids.iter().filter_map(|id| by_id.remove(id)).collect()
}

fn id_value(id: Option<i64>) -> ActiveValue<i64> {
    match id {
        Some(id) => Unchanged(id),
        None => NotSet,
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Translates a failed write into a domain error where the store reports a
/// condition the caller can act on.
fn write_error(
    err: DbErr,
    entity: &'static str,
    id: Option<i64>,
    on_unique: impl FnOnce() -> RelboardError,
) -> anyhow::Error {
    if let (DbErr::RecordNotUpdated | DbErr::RecordNotFound(_), Some(id)) = (&err, id) {
        return RelboardError::NotFound(entity, id).into();
    }

    if is_unique_violation(&err) {
        return on_unique().into();
    }

    tracing::error!(entity, error = %err, "Failed to write record");
    err.into()
}

/// Attempts made by `release_create` before a busy store is reported.
const PROMOTION_ATTEMPTS: u32 = 8;
const PROMOTION_RETRY_DELAY: Duration = Duration::from_millis(15);

/// True when the store refused the statement because another transaction
/// holds the lock, or when PostgreSQL aborted it as a serialization or
/// deadlock failure.
fn is_lock_contention(err: &anyhow::Error) -> bool {
    let runtime = match err.downcast_ref::<DbErr>() {
        Some(DbErr::Exec(e) | DbErr::Query(e) | DbErr::Conn(e)) => e,
        _ => return false,
    };

    let RuntimeErr::SqlxError(sea_orm::sqlx::Error::Database(db_err)) = runtime else {
        return false;
    };

    // SQLite reports extended result codes: BUSY 5, LOCKED 6 and their
    // RECOVERY, SHAREDCACHE, SNAPSHOT, VTAB and TIMEOUT variants.
    matches!(
        db_err.code().as_deref(),
        Some("5" | "6" | "261" | "262" | "517" | "518" | "773" | "40001" | "40P01")
    )
}

/// Runs the promotion guard against `existing` and inserts the candidate.
///
/// `existing` is what the caller read from the store. A current release that
/// committed after that read still surfaces here, through the partial unique
/// index, and is reported as a rejection.
async fn insert_guarded<C>(
    conn: &C,
    candidate: &Release,
    existing: &[Release],
    now: DateTime<Utc>,
) -> Result<Result<releases::Model, RejectionKind>, DbErr>
where
    C: ConnectionTrait,
{
    if let PromotionDecision::Reject { kind, .. } = evaluate_promotion(candidate, existing, now) {
        return Ok(Err(kind));
    }

    let mut active = release_active_model(candidate);
    active.id = NotSet;

    match active.insert(conn).await {
        Ok(model) => Ok(Ok(model)),
        Err(e) if is_unique_violation(&e) => {
            tracing::warn!(
                territory = %candidate.territory,
                "Current release inserted concurrently, rejecting promotion"
            );
            Ok(Err(RejectionKind::ProductionReleaseExists))
        }
        Err(e) => Err(e),
    }
}

// ============================================================================
// ReleasePersistence implementation
// ============================================================================

impl TryFrom<releases::Model> for Release {
    type Error = anyhow::Error;

    fn try_from(model: releases::Model) -> Result<Self, Self::Error> {
        let territory = parse_column("territory", &model.territory)?;

        Ok(Release {
            id: Some(model.id),
            date: model.release_date,
            territory,
            build: model.build,
            release_letter: model.release_letter,
            prefix_letter: model.prefix_letter,
            database_version: model.database_version,
            ws_version: model.ws_version,
            tma_version: model.tma_version,
            port: model.port,
            new_features: model.new_features,
            updated_features: model.updated_features,
            current: model.is_current,
        })
    }
}

fn release_active_model(release: &Release) -> releases::ActiveModel {
    releases::ActiveModel {
        id: id_value(release.id),
        release_date: Set(release.date),
        territory: Set(release.territory.as_str().to_string()),
        build: Set(release.build),
        release_letter: Set(release.release_letter.clone()),
        prefix_letter: Set(release.prefix_letter.clone()),
        database_version: Set(release.database_version.clone()),
        ws_version: Set(release.ws_version.clone()),
        tma_version: Set(release.tma_version.clone()),
        port: Set(release.port),
        new_features: Set(release.new_features.clone()),
        updated_features: Set(release.updated_features.clone()),
        is_current: Set(release.current),
    }
}

fn release_condition(query: &ReleaseQuery) -> Condition {
    let mut condition = Condition::all();

    if let Some(territory) = query.territory {
        condition = condition.add(releases::Column::Territory.eq(territory.as_str()));
    }
    if let Some(current) = query.current {
        condition = condition.add(releases::Column::IsCurrent.eq(current));
    }
    if let Some(build) = query.build {
        condition = condition.add(releases::Column::Build.eq(build));
    }
    if let Some(ref release_letter) = query.release_letter {
        condition = condition.add(releases::Column::ReleaseLetter.eq(release_letter.as_str()));
    }
    if let Some(date_from) = query.date_from {
        condition = condition.add(releases::Column::ReleaseDate.gte(date_from));
    }
    if let Some(date_to) = query.date_to {
        condition = condition.add(releases::Column::ReleaseDate.lte(date_to));
    }

    condition
}

fn current_exists() -> RelboardError {
    RejectionKind::ProductionReleaseExists.into()
}

#[async_trait]
impl ReleasePersistence for ExternalDbPersistService {
    async fn release_find_by_query(&self, query: &ReleaseQuery) -> anyhow::Result<Vec<Release>> {
        let models = releases::Entity::find()
            .filter(release_condition(query))
            .order_by_asc(releases::Column::Id)
            .all(&self.db)
            .await?;

        convert_all(models)
    }

    async fn release_count_by_query(&self, query: &ReleaseQuery) -> anyhow::Result<u64> {
        let count = releases::Entity::find()
            .filter(release_condition(query))
            .count(&self.db)
            .await?;

        Ok(count)
    }

    async fn release_find_by_id(&self, id: i64) -> anyhow::Result<Option<Release>> {
        releases::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Release::try_from)
            .transpose()
    }

    async fn release_find_by_ids(&self, ids: &[i64]) -> anyhow::Result<Vec<Release>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = releases::Entity::find()
            .filter(releases::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await?;

        Ok(order_by_ids(ids, convert_all(models)?, |r: &Release| r.id))
    }

    async fn release_find_current(&self) -> anyhow::Result<Vec<Release>> {
        self.release_find_by_query(&ReleaseQuery {
            current: Some(true),
            ..Default::default()
        })
        .await
    }

    async fn release_find_current_by_territory(
        &self,
        territory: Territory,
    ) -> anyhow::Result<Vec<Release>> {
        self.release_find_by_query(&ReleaseQuery::current_in(territory))
            .await
    }

    async fn release_find_future(&self, now: DateTime<Utc>) -> anyhow::Result<Vec<Release>> {
        let models = releases::Entity::find()
            .filter(releases::Column::IsCurrent.eq(false))
            .filter(releases::Column::ReleaseDate.gt(now))
            .order_by_asc(releases::Column::ReleaseDate)
            .order_by_asc(releases::Column::Id)
            .all(&self.db)
            .await?;

        convert_all(models)
    }

    async fn release_create(
        &self,
        candidate: &Release,
        now: DateTime<Utc>,
    ) -> anyhow::Result<ReleaseCreateOutcome> {
        let mut attempt = 1;

        loop {
            match self.release_create_once(candidate, now).await {
                Ok(outcome) => return Ok(outcome),
                Err(e) if attempt < PROMOTION_ATTEMPTS && is_lock_contention(&e) => {
                    tracing::debug!(
                        territory = %candidate.territory,
                        attempt,
                        "Release insert contended, retrying"
                    );
                    tokio::time::sleep(PROMOTION_RETRY_DELAY * attempt).await;
                    attempt += 1;
                }
                Err(e) if is_lock_contention(&e) => {
                    tracing::error!(
                        territory = %candidate.territory,
                        attempts = attempt,
                        error = %e,
                        "Release insert still contended, giving up"
                    );
                    return Err(RelboardError::DatabaseError(format!(
                        "release store busy after {} attempts",
                        attempt
                    ))
                    .into());
                }
                Err(e) => {
                    return Err(match e.downcast::<DbErr>() {
                        Ok(db_err) => write_error(db_err, ENTITY_RELEASE, None, current_exists),
                        Err(e) => e,
                    });
                }
            }
        }
    }

    async fn release_save(&self, release: &Release) -> anyhow::Result<Release> {
        let active = release_active_model(release);

        let result = match release.id {
            Some(_) => active.update(&self.db).await,
            None => active.insert(&self.db).await,
        };

        match result {
            Ok(model) => Release::try_from(model),
            Err(e) => Err(write_error(e, ENTITY_RELEASE, release.id, current_exists)),
        }
    }

    async fn release_delete(&self, id: i64) -> anyhow::Result<bool> {
        let result = releases::Entity::delete_by_id(id).exec(&self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

// ============================================================================
// SprPersistence implementation
// ============================================================================

impl TryFrom<sprs::Model> for Spr {
    type Error = anyhow::Error;

    fn try_from(model: sprs::Model) -> Result<Self, Self::Error> {
        let territory = parse_column("territory", &model.territory)?;
        let priority = parse_optional_column("priority", model.priority.as_deref())?;
        let resolution = parse_optional_column("resolution", model.resolution.as_deref())?;

        Ok(Spr {
            id: Some(model.id),
            territory,
            number: model.number,
            full_number: model.full_number,
            description: model.description,
            priority,
            resolution,
            jira_link: model.jira_link,
            reviewer_id: model.reviewer_id,
            user_id: model.user_id,
            release_id: model.release_id,
        })
    }
}

fn spr_active_model(spr: &Spr) -> sprs::ActiveModel {
    sprs::ActiveModel {
        id: id_value(spr.id),
        territory: Set(spr.territory.as_str().to_string()),
        number: Set(spr.number),
        full_number: Set(spr.full_number.clone()),
        description: Set(spr.description.clone()),
        priority: Set(spr.priority.map(|p| p.as_str().to_string())),
        resolution: Set(spr.resolution.map(|r| r.as_str().to_string())),
        jira_link: Set(spr.jira_link.clone()),
        reviewer_id: Set(spr.reviewer_id),
        user_id: Set(spr.user_id),
        release_id: Set(spr.release_id),
    }
}

fn spr_condition(query: &SprQuery) -> Condition {
    let mut condition = Condition::all();

    if let Some(territory) = query.territory {
        condition = condition.add(sprs::Column::Territory.eq(territory.as_str()));
    }
    if let Some(resolution) = query.resolution {
        condition = condition.add(sprs::Column::Resolution.eq(resolution.as_str()));
    }
    if let Some(priority) = query.priority {
        condition = condition.add(sprs::Column::Priority.eq(priority.as_str()));
    }
    if let Some(user_id) = query.user_id {
        condition = condition.add(sprs::Column::UserId.eq(user_id));
    }
    if let Some(release_id) = query.release_id {
        condition = condition.add(sprs::Column::ReleaseId.eq(release_id));
    }
    if let Some(number) = query.number {
        condition = condition.add(sprs::Column::Number.eq(number));
    }

    condition
}

#[async_trait]
impl SprPersistence for ExternalDbPersistService {
    async fn spr_find_by_query(&self, query: &SprQuery) -> anyhow::Result<Vec<Spr>> {
        let models = sprs::Entity::find()
            .filter(spr_condition(query))
            .order_by_asc(sprs::Column::Id)
            .all(&self.db)
            .await?;

        convert_all(models)
    }

    async fn spr_count_by_query(&self, query: &SprQuery) -> anyhow::Result<u64> {
        let count = sprs::Entity::find()
            .filter(spr_condition(query))
            .count(&self.db)
            .await?;

        Ok(count)
    }

    async fn spr_find_by_id(&self, id: i64) -> anyhow::Result<Option<Spr>> {
        sprs::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Spr::try_from)
            .transpose()
    }

    async fn spr_find_by_ids(&self, ids: &[i64]) -> anyhow::Result<Vec<Spr>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = sprs::Entity::find()
            .filter(sprs::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await?;

        Ok(order_by_ids(ids, convert_all(models)?, |s: &Spr| s.id))
    }

    async fn spr_save(&self, spr: &Spr) -> anyhow::Result<Spr> {
        let active = spr_active_model(spr);

        let result = match spr.id {
            Some(_) => active.update(&self.db).await,
            None => active.insert(&self.db).await,
        };

        match result {
            Ok(model) => Spr::try_from(model),
            Err(e) => Err(write_error(e, ENTITY_SPR, spr.id, || {
                RelboardError::IllegalArgument(format!(
                    "SPR number {} ({}) already exists",
                    spr.number, spr.full_number
                ))
            })),
        }
    }

    async fn spr_delete(&self, id: i64) -> anyhow::Result<bool> {
        let result = sprs::Entity::delete_by_id(id).exec(&self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

// ============================================================================
// TeamEventPersistence implementation
// ============================================================================

impl From<team_events::Model> for TeamEvent {
    fn from(model: team_events::Model) -> Self {
        TeamEvent {
            id: Some(model.id),
            start: model.start_time,
            end: model.end_time,
            description: model.description,
        }
    }
}

fn team_event_condition(query: &TeamEventQuery) -> Condition {
    let mut condition = Condition::all();

    if let Some(start_from) = query.start_from {
        condition = condition.add(team_events::Column::StartTime.gte(start_from));
    }
    if let Some(start_to) = query.start_to {
        condition = condition.add(team_events::Column::StartTime.lte(start_to));
    }

    condition
}

#[async_trait]
impl TeamEventPersistence for ExternalDbPersistService {
    async fn team_event_find_by_query(
        &self,
        query: &TeamEventQuery,
    ) -> anyhow::Result<Vec<TeamEvent>> {
        let models = team_events::Entity::find()
            .filter(team_event_condition(query))
            .order_by_asc(team_events::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(TeamEvent::from).collect())
    }

    async fn team_event_count_by_query(&self, query: &TeamEventQuery) -> anyhow::Result<u64> {
        let count = team_events::Entity::find()
            .filter(team_event_condition(query))
            .count(&self.db)
            .await?;

        Ok(count)
    }

    async fn team_event_find_by_id(&self, id: i64) -> anyhow::Result<Option<TeamEvent>> {
        let model = team_events::Entity::find_by_id(id).one(&self.db).await?;

        Ok(model.map(TeamEvent::from))
    }

    async fn team_event_find_by_ids(&self, ids: &[i64]) -> anyhow::Result<Vec<TeamEvent>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = team_events::Entity::find()
            .filter(team_events::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await?;
        let events = models.into_iter().map(TeamEvent::from).collect();

        Ok(order_by_ids(ids, events, |e: &TeamEvent| e.id))
    }

    async fn team_event_save(&self, event: &TeamEvent) -> anyhow::Result<TeamEvent> {
        let active = team_events::ActiveModel {
            id: id_value(event.id),
            start_time: Set(event.start),
            end_time: Set(event.end),
            description: Set(event.description.clone()),
        };

        let result = match event.id {
            Some(_) => active.update(&self.db).await,
            None => active.insert(&self.db).await,
        };

        result.map(TeamEvent::from).map_err(|e| {
            write_error(e, ENTITY_TEAM_EVENT, event.id, || {
                RelboardError::IllegalArgument("duplicate team event".to_string())
            })
        })
    }

    async fn team_event_delete(&self, id: i64) -> anyhow::Result<bool> {
        let result = team_events::Entity::delete_by_id(id).exec(&self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

// ============================================================================
// OutOfOfficePersistence implementation
// ============================================================================

impl From<out_of_offices::Model> for OutOfOffice {
    fn from(model: out_of_offices::Model) -> Self {
        OutOfOffice {
            id: Some(model.id),
            start: model.start_time,
            end: model.end_time,
            description: model.description,
            user_id: model.user_id,
        }
    }
}

fn out_of_office_condition(query: &OutOfOfficeQuery) -> Condition {
    let mut condition = Condition::all();

    if let Some(user_id) = query.user_id {
        condition = condition.add(out_of_offices::Column::UserId.eq(user_id));
    }
    if let Some(start_from) = query.start_from {
        condition = condition.add(out_of_offices::Column::StartTime.gte(start_from));
    }
    if let Some(start_to) = query.start_to {
        condition = condition.add(out_of_offices::Column::StartTime.lte(start_to));
    }

    condition
}

#[async_trait]
impl OutOfOfficePersistence for ExternalDbPersistService {
    async fn out_of_office_find_by_query(
        &self,
        query: &OutOfOfficeQuery,
    ) -> anyhow::Result<Vec<OutOfOffice>> {
        let models = out_of_offices::Entity::find()
            .filter(out_of_office_condition(query))
            .order_by_asc(out_of_offices::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(OutOfOffice::from).collect())
    }

    async fn out_of_office_count_by_query(
        &self,
        query: &OutOfOfficeQuery,
    ) -> anyhow::Result<u64> {
        let count = out_of_offices::Entity::find()
            .filter(out_of_office_condition(query))
            .count(&self.db)
            .await?;

        Ok(count)
    }

    async fn out_of_office_find_by_id(&self, id: i64) -> anyhow::Result<Option<OutOfOffice>> {
        let model = out_of_offices::Entity::find_by_id(id).one(&self.db).await?;

        Ok(model.map(OutOfOffice::from))
    }

    async fn out_of_office_find_by_ids(&self, ids: &[i64]) -> anyhow::Result<Vec<OutOfOffice>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = out_of_offices::Entity::find()
            .filter(out_of_offices::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await?;
        let absences = models.into_iter().map(OutOfOffice::from).collect();

        Ok(order_by_ids(ids, absences, |a: &OutOfOffice| a.id))
    }

    async fn out_of_office_save(&self, absence: &OutOfOffice) -> anyhow::Result<OutOfOffice> {
        let active = out_of_offices::ActiveModel {
            id: id_value(absence.id),
            start_time: Set(absence.start),
            end_time: Set(absence.end),
            description: Set(absence.description.clone()),
            user_id: Set(absence.user_id),
        };

        let result = match absence.id {
            Some(_) => active.update(&self.db).await,
            None => active.insert(&self.db).await,
        };

        result.map(OutOfOffice::from).map_err(|e| {
            write_error(e, ENTITY_OUT_OF_OFFICE, absence.id, || {
                RelboardError::IllegalArgument("duplicate out-of-office entry".to_string())
            })
        })
    }

    async fn out_of_office_delete(&self, id: i64) -> anyhow::Result<bool> {
        let result = out_of_offices::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

// ============================================================================
// UserPersistence implementation
// ============================================================================

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        User {
            id: Some(model.id),
            login: model.login,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            activated: model.activated,
        }
    }
}

#[async_trait]
impl UserPersistence for ExternalDbPersistService {
    async fn user_find_all(&self) -> anyhow::Result<Vec<User>> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn user_find_by_id(&self, id: i64) -> anyhow::Result<Option<User>> {
        let model = users::Entity::find_by_id(id).one(&self.db).await?;

        Ok(model.map(User::from))
    }

    async fn user_find_by_login(&self, login: &str) -> anyhow::Result<Option<User>> {
        let model = users::Entity::find()
            .filter(users::Column::Login.eq(login))
            .one(&self.db)
            .await?;

        Ok(model.map(User::from))
    }

    async fn user_create(&self, user: &User) -> anyhow::Result<User> {
        let active = users::ActiveModel {
            id: NotSet,
            login: Set(user.login.clone()),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            email: Set(user.email.clone()),
            activated: Set(user.activated),
        };

        active.insert(&self.db).await.map(User::from).map_err(|e| {
            write_error(e, ENTITY_USER, None, || {
                RelboardError::LoginExists(user.login.clone())
            })
        })
    }
}
