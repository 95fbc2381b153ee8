use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use chrono::{Duration, Utc};
use serde_json::{Value, json};

use relboard_migration::{Migrator, MigratorTrait};
use relboard_persistence::ExternalDbPersistService;
use relboard_persistence::sea_orm::{ConnectOptions, Database};
use relboard_search::TantivyIndex;
use relboard_tracker::TrackerServices;
use relboard_tracker::api::header::{ALERT_HEADER, ERROR_HEADER, PARAMS_HEADER};
use relboard_tracker::api::{self, ErrorBody};
use relboard_tracker::service::DEFAULT_MAX_SEARCH_RESULTS;

async fn create_test_app()
-> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    let services = TrackerServices::new(
        Arc::new(ExternalDbPersistService::new(db)),
        Arc::new(TantivyIndex::in_memory()),
        DEFAULT_MAX_SEARCH_RESULTS,
    );

    test::init_service(
        App::new()
            .app_data(web::Data::new(services))
            .service(web::scope("/api").configure(api::configure)),
    )
    .await
}

fn release_body(territory: &str, current: bool, offset_days: i64) -> Value {
    json!({
        "date": Utc::now() + Duration::days(offset_days),
        "territory": territory,
        "build": 340,
        "releaseLetter": "D",
        "databaseVersion": "11.0",
        "newFeatures": "Platform assignment overlay",
        "current": current,
    })
}

fn header(resp: &ServiceResponse, name: &str) -> String {
    resp.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

// ========================================================================
// Releases
// ========================================================================

#[actix_web::test]
async fn test_create_release_returns_location() {
    let app = create_test_app().await;

    let req = test::TestRequest::post()
        .uri("/api/releases")
        .set_json(release_body("HUDSON", true, -1))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(header(&resp, "Location"), "/api/releases/1");
    assert_eq!(header(&resp, ALERT_HEADER), "relboardApp.release.created");
    assert_eq!(header(&resp, PARAMS_HEADER), "1");

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["territory"], "HUDSON");
    assert_eq!(body["current"], true);
}

#[actix_web::test]
async fn test_second_current_release_is_bad_request() {
    let app = create_test_app().await;

    let req = test::TestRequest::post()
        .uri("/api/releases")
        .set_json(release_body("SED", true, -5))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/releases")
        .set_json(release_body("SED", true, -1))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(header(&resp, ERROR_HEADER), "error.currentExists");

    let body: ErrorBody = test::read_body_json(resp).await;
    assert_eq!(body.error_key, "currentExists");
    assert_eq!(body.entity_name.as_deref(), Some("release"));
    assert_eq!(
        body.message,
        "A release for this territory is already in production"
    );

    let req = test::TestRequest::get().uri("/api/releases/count?territory=SED").to_request();
    let count: u64 = test::call_and_read_body_json(&app, req).await;
    assert_eq!(count, 1);
}

#[actix_web::test]
async fn test_future_current_release_is_bad_request() {
    let app = create_test_app().await;

    let req = test::TestRequest::post()
        .uri("/api/releases")
        .set_json(release_body("NED", true, 2))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorBody = test::read_body_json(resp).await;
    assert_eq!(body.error_key, "prodReleaseBad");
    assert_eq!(
        body.message,
        "A release can not be in production at a date later than now"
    );
}

#[actix_web::test]
async fn test_create_with_id_and_update_without_id() {
    let app = create_test_app().await;

    let mut body = release_body("PSCC", false, 0);
    body["id"] = json!(7);
    let req = test::TestRequest::post().uri("/api/releases").set_json(&body).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorBody = test::read_body_json(resp).await;
    assert_eq!(error.error_key, "idexists");

    let req = test::TestRequest::put()
        .uri("/api/releases")
        .set_json(release_body("PSCC", false, 0))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorBody = test::read_body_json(resp).await;
    assert_eq!(error.error_key, "idnull");
}

#[actix_web::test]
async fn test_update_unknown_release_is_not_found() {
    let app = create_test_app().await;

    let mut body = release_body("CHICAGO", false, 0);
    body["id"] = json!(404);
    let req = test::TestRequest::put().uri("/api/releases").set_json(&body).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_update_release() {
    let app = create_test_app().await;

    let req = test::TestRequest::post()
        .uri("/api/releases")
        .set_json(release_body("UNIFIED", false, -3))
        .to_request();
    let mut saved: Value = test::call_and_read_body_json(&app, req).await;

    saved["build"] = json!(341);
    let req = test::TestRequest::put().uri("/api/releases").set_json(&saved).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(header(&resp, ALERT_HEADER), "relboardApp.release.updated");

    let req = test::TestRequest::get().uri("/api/releases/1").to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["build"], 341);
}

#[actix_web::test]
async fn test_invalid_release_body() {
    let app = create_test_app().await;

    let mut body = release_body("SED", false, 0);
    body["releaseLetter"] = json!("");
    let req = test::TestRequest::post().uri("/api/releases").set_json(&body).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/releases")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{\"territory\": \"ATLANTIS\"}")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorBody = test::read_body_json(resp).await;
    assert_eq!(error.error_key, "validation");
}

#[actix_web::test]
async fn test_create_release_without_current_flag() {
    let app = create_test_app().await;

    let mut body = release_body("PSCC", false, -1);
    body.as_object_mut().unwrap().remove("current");
    let req = test::TestRequest::post().uri("/api/releases").set_json(&body).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorBody = test::read_body_json(resp).await;
    assert_eq!(error.error_key, "validation");

    let req = test::TestRequest::get().uri("/api/releases/count").to_request();
    let count: u64 = test::call_and_read_body_json(&app, req).await;
    assert_eq!(count, 0);
}

#[actix_web::test]
async fn test_current_and_future_lists() {
    let app = create_test_app().await;

    for body in [
        release_body("HUDSON", true, -1),
        release_body("HUDSON", false, 7),
        release_body("SED", false, -7),
    ] {
        let req = test::TestRequest::post().uri("/api/releases").set_json(&body).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get().uri("/api/releases/current").to_request();
    let current: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(current.len(), 1);
    assert_eq!(current[0]["id"], 1);

    let req = test::TestRequest::get().uri("/api/releases/future").to_request();
    let future: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(future.len(), 1);
    assert_eq!(future[0]["id"], 2);

    let req = test::TestRequest::get().uri("/api/releases?current=false").to_request();
    let not_current: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(not_current.len(), 2);
}

#[actix_web::test]
async fn test_delete_release() {
    let app = create_test_app().await;

    let req = test::TestRequest::post()
        .uri("/api/releases")
        .set_json(release_body("NED", false, -1))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::delete().uri("/api/releases/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(header(&resp, ALERT_HEADER), "relboardApp.release.deleted");

    let req = test::TestRequest::delete().uri("/api/releases/1").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/api/releases/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(header(&resp, ERROR_HEADER), "error.notfound");
}

// ========================================================================
// SPRs and users
// ========================================================================

async fn create_user(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    login: &str,
) -> i64 {
    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "login": login }))
        .to_request();
    let user: Value = test::call_and_read_body_json(app, req).await;
    user["id"].as_i64().unwrap()
}

async fn create_spr(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    number: i32,
    resolution: Option<&str>,
    user_id: Option<i64>,
) -> Value {
    let req = test::TestRequest::post()
        .uri("/api/sprs")
        .set_json(json!({
            "territory": "CHICAGO",
            "number": number,
            "fullNumber": format!("CHI-{}", number),
            "description": "Track circuit flicker",
            "resolution": resolution,
            "userId": user_id,
        }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    test::read_body_json(resp).await
}

#[actix_web::test]
async fn test_duplicate_login_rejected() {
    let app = create_test_app().await;
    create_user(&app, "carol").await;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "login": "carol" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorBody = test::read_body_json(resp).await;
    assert_eq!(error.error_key, "userexists");
}

#[actix_web::test]
async fn test_open_spr_tally() {
    let app = create_test_app().await;
    let dana = create_user(&app, "dana").await;
    let eli = create_user(&app, "eli").await;

    create_spr(&app, 1, None, Some(dana)).await;
    create_spr(&app, 2, Some("PARTIALLY_FIXED"), Some(dana)).await;
    create_spr(&app, 3, Some("FIXED"), Some(dana)).await;
    create_spr(&app, 4, Some("CANNOT_REPRODUCE"), Some(eli)).await;

    let req = test::TestRequest::get().uri("/api/sprs/open/count").to_request();
    let counts: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0]["user"]["login"], "dana");
    assert_eq!(counts[0]["count"], 2);
    assert_eq!(counts[1]["user"]["login"], "eli");
    assert_eq!(counts[1]["count"], 0);

    let req = test::TestRequest::get().uri("/api/sprs/open").to_request();
    let open: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(open.len(), 2);

    let req = test::TestRequest::get()
        .uri(&format!("/api/sprs/open/user/{}", eli))
        .to_request();
    let open: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert!(open.is_empty());

    let req = test::TestRequest::get()
        .uri(&format!("/api/sprs/share/user/{}", dana))
        .to_request();
    let share: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(share, json!({ "total": 4, "totalUser": 3, "percentage": 75 }));
}

#[actix_web::test]
async fn test_reviewed_sprs() {
    let app = create_test_app().await;
    let fay = create_user(&app, "fay").await;

    create_spr(&app, 10, Some("REVIEWED"), Some(fay)).await;
    create_spr(&app, 11, Some("NEW"), Some(fay)).await;

    let req = test::TestRequest::get().uri("/api/sprs/reviewed").to_request();
    let reviewed: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(reviewed.len(), 1);
    assert_eq!(reviewed[0]["number"], 10);

    let req = test::TestRequest::get()
        .uri(&format!("/api/sprs/reviewed/count/user/{}", fay))
        .to_request();
    let count: usize = test::call_and_read_body_json(&app, req).await;
    assert_eq!(count, 1);

    let req = test::TestRequest::get()
        .uri(&format!("/api/sprs/user/{}", fay))
        .to_request();
    let owned: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(owned.len(), 2);
}

#[actix_web::test]
async fn test_spr_search() {
    let app = create_test_app().await;
    create_spr(&app, 21, None, None).await;

    let req = test::TestRequest::get()
        .uri("/api/_search/sprs?query=flicker")
        .to_request();
    let hits: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["fullNumber"], "CHI-21");

    let req = test::TestRequest::get()
        .uri("/api/_search/sprs?query=description%3A%28")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorBody = test::read_body_json(resp).await;
    assert_eq!(error.error_key, "badquery");
}

// ========================================================================
// Calendar and health
// ========================================================================

#[actix_web::test]
async fn test_team_event_lifecycle() {
    let app = create_test_app().await;
    let start = Utc::now();

    let req = test::TestRequest::post()
        .uri("/api/team-events")
        .set_json(json!({
            "start": start,
            "end": start + Duration::hours(2),
            "description": "Release retrospective",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(header(&resp, "Location"), "/api/team-events/1");

    let req = test::TestRequest::get()
        .uri("/api/_search/team-events?query=retrospective")
        .to_request();
    let hits: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(hits.len(), 1);

    let req = test::TestRequest::get().uri("/api/team-events/count").to_request();
    let count: u64 = test::call_and_read_body_json(&app, req).await;
    assert_eq!(count, 1);

    let req = test::TestRequest::delete().uri("/api/team-events/1").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn test_out_of_office_by_user() {
    let app = create_test_app().await;
    let gus = create_user(&app, "gus").await;
    let start = Utc::now();

    let req = test::TestRequest::post()
        .uri("/api/out-of-offices")
        .set_json(json!({
            "start": start,
            "end": start + Duration::days(5),
            "description": "Annual leave",
            "userId": gus,
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri(&format!("/api/out-of-offices?userId={}", gus))
        .to_request();
    let absences: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(absences.len(), 1);
    assert_eq!(absences[0]["description"], "Annual leave");

    let req = test::TestRequest::get().uri("/api/out-of-offices/99").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_health() {
    let app = create_test_app().await;

    let req = test::TestRequest::get().uri("/api/management/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "UP");
}
