use std::sync::Arc;

use chrono::{Duration, Utc};
use relboard_common::RelboardError;
use relboard_core::{
    OutOfOffice, OutOfOfficeQuery, RejectionKind, Release, ReleaseQuery, Resolution, Spr,
    SprQuery, TeamEvent, TeamEventQuery, Territory, User,
};
use relboard_migration::{Migrator, MigratorTrait};
use relboard_persistence::sea_orm::{ConnectOptions, Database};
use relboard_persistence::*;
use tokio::task::JoinSet;

async fn setup() -> ExternalDbPersistService {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    ExternalDbPersistService::new(db)
}

fn release(territory: Territory, current: bool, offset_days: i64) -> Release {
    Release {
        id: None,
        date: Utc::now() + Duration::days(offset_days),
        territory,
        build: 100,
        release_letter: "C".to_string(),
        prefix_letter: None,
        database_version: "9.4".to_string(),
        ws_version: Some("2.1".to_string()),
        tma_version: None,
        port: Some(8443),
        new_features: Some("Timetable export".to_string()),
        updated_features: None,
        current,
    }
}

fn spr(number: i32, resolution: Option<Resolution>, user_id: Option<i64>) -> Spr {
    Spr {
        id: None,
        territory: Territory::Sed,
        number,
        full_number: format!("SED-{}", number),
        description: Some("Signal timing drift".to_string()),
        priority: None,
        resolution,
        jira_link: None,
        reviewer_id: None,
        user_id,
        release_id: None,
    }
}

fn user(login: &str) -> User {
    User {
        id: None,
        login: login.to_string(),
        first_name: None,
        last_name: None,
        email: None,
        activated: true,
    }
}

fn created(outcome: ReleaseCreateOutcome) -> Release {
    match outcome {
        ReleaseCreateOutcome::Created(release) => release,
        ReleaseCreateOutcome::Rejected(kind) => panic!("unexpected rejection: {:?}", kind),
    }
}

#[tokio::test]
async fn test_health_check() {
    let service = setup().await;
    assert!(service.health_check().await.is_ok());
}

#[tokio::test]
async fn test_release_create_assigns_id() {
    let service = setup().await;
    let now = Utc::now();

    let stored = created(
        service
            .release_create(&release(Territory::Hudson, true, -1), now)
            .await
            .unwrap(),
    );

    assert!(stored.id.is_some());
    assert!(stored.current);
    let loaded = service
        .release_find_by_id(stored.id.unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.territory, Territory::Hudson);
    assert_eq!(loaded.port, Some(8443));
}

#[tokio::test]
async fn test_release_create_rejects_second_current() {
    let service = setup().await;
    let now = Utc::now();

    created(
        service
            .release_create(&release(Territory::Ned, true, -10), now)
            .await
            .unwrap(),
    );
    let outcome = service
        .release_create(&release(Territory::Ned, true, -1), now)
        .await
        .unwrap();

    assert_eq!(
        outcome,
        ReleaseCreateOutcome::Rejected(RejectionKind::ProductionReleaseExists)
    );
    assert_eq!(service.release_find_current().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_release_create_other_territory_unaffected() {
    let service = setup().await;
    let now = Utc::now();

    created(
        service
            .release_create(&release(Territory::Ned, true, -10), now)
            .await
            .unwrap(),
    );
    created(
        service
            .release_create(&release(Territory::Sed, true, -10), now)
            .await
            .unwrap(),
    );

    assert_eq!(service.release_find_current().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_release_create_rejects_future_current() {
    let service = setup().await;

    let outcome = service
        .release_create(&release(Territory::Pscc, true, 3), Utc::now())
        .await
        .unwrap();

    assert_eq!(
        outcome,
        ReleaseCreateOutcome::Rejected(RejectionKind::ProductionIsFuture)
    );
    assert_eq!(
        service
            .release_count_by_query(&ReleaseQuery::default())
            .await
            .unwrap(),
        0
    );
}

#[tokio::test]
async fn test_release_save_bypasses_rule_but_not_index() {
    let service = setup().await;

    // A future-dated current release is accepted by the unguarded path
    service
        .release_save(&release(Territory::Chicago, true, 5))
        .await
        .unwrap();

    let err = service
        .release_save(&release(Territory::Chicago, true, -5))
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RelboardError>(),
        Some(RelboardError::ProductionReleaseExists(_))
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_promotions_create_one_current_release() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("relboard.db").display());
    let mut options = ConnectOptions::new(url);
    options.max_connections(8).sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    let service = Arc::new(ExternalDbPersistService::new(db));

    for territory in Territory::ALL {
        let mut tasks = JoinSet::new();
        for build in 0..8 {
            let service = service.clone();
            let mut candidate = release(territory, true, -1);
            candidate.build = build;
            tasks.spawn(async move { service.release_create(&candidate, Utc::now()).await });
        }

        let mut created = 0;
        let mut rejected = 0;
        while let Some(joined) = tasks.join_next().await {
            match joined.unwrap().unwrap() {
                ReleaseCreateOutcome::Created(_) => created += 1,
                ReleaseCreateOutcome::Rejected(kind) => {
                    assert_eq!(kind, RejectionKind::ProductionReleaseExists);
                    rejected += 1;
                }
            }
        }

        assert_eq!((created, rejected), (1, 7), "territory {}", territory);
        let current = service
            .release_find_current_by_territory(territory)
            .await
            .unwrap();
        assert_eq!(current.len(), 1);
    }
}

#[tokio::test]
async fn test_release_update() {
    let service = setup().await;
    let mut stored = service
        .release_save(&release(Territory::Hudson, false, -1))
        .await
        .unwrap();

    stored.build = 101;
    stored.current = true;
    let updated = service.release_save(&stored).await.unwrap();

    assert_eq!(updated.id, stored.id);
    assert_eq!(updated.build, 101);
    assert!(updated.current);
}

#[tokio::test]
async fn test_release_update_unknown_id() {
    let service = setup().await;
    let mut missing = release(Territory::Hudson, false, -1);
    missing.id = Some(4040);

    let err = service.release_save(&missing).await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<RelboardError>(),
        Some(&RelboardError::NotFound("release", 4040))
    );
}

#[tokio::test]
async fn test_release_find_future_excludes_current() {
    let service = setup().await;
    let now = Utc::now();

    service
        .release_save(&release(Territory::Hudson, false, 7))
        .await
        .unwrap();
    service
        .release_save(&release(Territory::Sed, false, -7))
        .await
        .unwrap();
    service
        .release_save(&release(Territory::Ned, true, 7))
        .await
        .unwrap();

    let future = service.release_find_future(now).await.unwrap();
    assert_eq!(future.len(), 1);
    assert_eq!(future[0].territory, Territory::Hudson);
}

#[tokio::test]
async fn test_release_find_current_is_stable() {
    let service = setup().await;
    let now = Utc::now();
    for territory in [Territory::Hudson, Territory::Sed] {
        created(
            service
                .release_create(&release(territory, true, -1), now)
                .await
                .unwrap(),
        );
    }

    let first = service.release_find_current().await.unwrap();
    let second = service.release_find_current().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_release_query_filters() {
    let service = setup().await;
    service
        .release_save(&release(Territory::Hudson, false, -1))
        .await
        .unwrap();
    service
        .release_save(&release(Territory::Sed, false, -1))
        .await
        .unwrap();

    let query = ReleaseQuery {
        territory: Some(Territory::Sed),
        ..Default::default()
    };
    let found = service.release_find_by_query(&query).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(service.release_count_by_query(&query).await.unwrap(), 1);

    let current = service
        .release_find_current_by_territory(Territory::Sed)
        .await
        .unwrap();
    assert!(current.is_empty());
}

#[tokio::test]
async fn test_release_delete_detaches_sprs() {
    let service = setup().await;
    let stored = service
        .release_save(&release(Territory::Sed, false, -1))
        .await
        .unwrap();
    let mut report = spr(1, None, None);
    report.release_id = stored.id;
    let report = service.spr_save(&report).await.unwrap();

    assert!(service.release_delete(stored.id.unwrap()).await.unwrap());
    assert!(!service.release_delete(stored.id.unwrap()).await.unwrap());

    let report = service
        .spr_find_by_id(report.id.unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(report.release_id, None);
}

#[tokio::test]
async fn test_release_find_by_ids_keeps_order() {
    let service = setup().await;
    let a = service
        .release_save(&release(Territory::Sed, false, -1))
        .await
        .unwrap();
    let b = service
        .release_save(&release(Territory::Ned, false, -1))
        .await
        .unwrap();

    let found = service
        .release_find_by_ids(&[b.id.unwrap(), 999, a.id.unwrap()])
        .await
        .unwrap();
    assert_eq!(found, vec![b, a]);
}

#[tokio::test]
async fn test_spr_round_trip_and_filters() {
    let service = setup().await;
    let owner = service.user_create(&user("alice")).await.unwrap();

    service
        .spr_save(&spr(1, Some(Resolution::Reviewed), owner.id))
        .await
        .unwrap();
    service
        .spr_save(&spr(2, Some(Resolution::PartiallyFixed), owner.id))
        .await
        .unwrap();
    service.spr_save(&spr(3, None, None)).await.unwrap();

    let reviewed = service
        .spr_find_by_query(&SprQuery {
            resolution: Some(Resolution::Reviewed),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(reviewed.len(), 1);
    assert_eq!(reviewed[0].number, 1);

    let owned = service
        .spr_find_by_query(&SprQuery::for_user(owner.id.unwrap()))
        .await
        .unwrap();
    assert_eq!(owned.len(), 2);
    assert_eq!(owned[1].resolution, Some(Resolution::PartiallyFixed));

    assert_eq!(
        service
            .spr_count_by_query(&SprQuery::default())
            .await
            .unwrap(),
        3
    );
}

#[tokio::test]
async fn test_spr_duplicate_number_rejected() {
    let service = setup().await;
    service.spr_save(&spr(5, None, None)).await.unwrap();

    let err = service.spr_save(&spr(5, None, None)).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RelboardError>(),
        Some(RelboardError::IllegalArgument(_))
    ));
}

#[tokio::test]
async fn test_team_event_crud() {
    let service = setup().await;
    let start = Utc::now();
    let event = service
        .team_event_save(&TeamEvent {
            id: None,
            start,
            end: start + Duration::hours(2),
            description: Some("Release retrospective".to_string()),
        })
        .await
        .unwrap();

    let loaded = service
        .team_event_find_by_id(event.id.unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.description.as_deref(), Some("Release retrospective"));

    let window = TeamEventQuery {
        start_from: Some(start - Duration::hours(1)),
        start_to: Some(start + Duration::hours(1)),
    };
    assert_eq!(service.team_event_count_by_query(&window).await.unwrap(), 1);

    assert!(service.team_event_delete(event.id.unwrap()).await.unwrap());
    assert!(
        service
            .team_event_find_by_id(event.id.unwrap())
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_out_of_office_by_user() {
    let service = setup().await;
    let owner = service.user_create(&user("bob")).await.unwrap();
    let start = Utc::now();

    service
        .out_of_office_save(&OutOfOffice {
            id: None,
            start,
            end: start + Duration::days(3),
            description: Some("Training".to_string()),
            user_id: owner.id,
        })
        .await
        .unwrap();
    service
        .out_of_office_save(&OutOfOffice {
            id: None,
            start,
            end: start + Duration::days(1),
            description: None,
            user_id: None,
        })
        .await
        .unwrap();

    let query = OutOfOfficeQuery {
        user_id: owner.id,
        ..Default::default()
    };
    let found = service.out_of_office_find_by_query(&query).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].description.as_deref(), Some("Training"));
}

#[tokio::test]
async fn test_user_login_unique() {
    let service = setup().await;
    service.user_create(&user("carol")).await.unwrap();

    let err = service.user_create(&user("carol")).await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<RelboardError>(),
        Some(&RelboardError::LoginExists("carol".to_string()))
    );

    let found = service.user_find_by_login("carol").await.unwrap();
    assert!(found.is_some());
    assert_eq!(service.user_find_all().await.unwrap().len(), 1);
}
