//! Release endpoints

use actix_web::{HttpRequest, HttpResponse, Scope, delete, get, post, put, web};

use relboard_common::{ENTITY_RELEASE, RelboardError};
use relboard_core::{Release, ReleaseQuery};
use relboard_persistence::ReleaseCreateOutcome;

use super::error::AppError;
use super::response::{created, deleted, found, require_id, require_no_id, updated, validate_body};
use crate::TrackerServices;

/// Create a release. A current release goes through the promotion rule.
#[post("")]
async fn create_release(
    req: HttpRequest,
    services: web::Data<TrackerServices>,
    body: web::Json<Release>,
) -> Result<HttpResponse, AppError> {
    let release = body.into_inner();
    require_no_id(ENTITY_RELEASE, release.id)?;
    validate_body(&release)?;

    match services.releases.create_release(&release).await? {
        ReleaseCreateOutcome::Created(saved) => Ok(created(&req, ENTITY_RELEASE, saved.id, &saved)),
        ReleaseCreateOutcome::Rejected(kind) => Err(RelboardError::from(kind).into()),
    }
}

#[put("")]
async fn update_release(
    services: web::Data<TrackerServices>,
    body: web::Json<Release>,
) -> Result<HttpResponse, AppError> {
    let release = body.into_inner();
    require_id(ENTITY_RELEASE, release.id)?;
    validate_body(&release)?;

    let saved = services.releases.save(&release).await?;
    Ok(updated(ENTITY_RELEASE, saved.id, &saved))
}

#[get("")]
async fn list_releases(
    services: web::Data<TrackerServices>,
    query: web::Query<ReleaseQuery>,
) -> Result<HttpResponse, AppError> {
    let releases = services.releases.find_all(&query).await?;
    Ok(HttpResponse::Ok().json(releases))
}

#[get("/count")]
async fn count_releases(
    services: web::Data<TrackerServices>,
    query: web::Query<ReleaseQuery>,
) -> Result<HttpResponse, AppError> {
    let count = services.releases.count(&query).await?;
    Ok(HttpResponse::Ok().json(count))
}

#[get("/current")]
async fn current_releases(services: web::Data<TrackerServices>) -> Result<HttpResponse, AppError> {
    let releases = services.releases.find_current_releases().await?;
    Ok(HttpResponse::Ok().json(releases))
}

#[get("/future")]
async fn future_releases(services: web::Data<TrackerServices>) -> Result<HttpResponse, AppError> {
    let releases = services.releases.find_future_releases().await?;
    Ok(HttpResponse::Ok().json(releases))
}

#[get("/{id:\\d+}")]
async fn get_release(
    services: web::Data<TrackerServices>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    found(ENTITY_RELEASE, id, services.releases.find_one(id).await?)
}

#[get("/{id:\\d+}/sprs")]
async fn release_sprs(
    services: web::Data<TrackerServices>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let sprs = services.releases.find_sprs(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(sprs))
}

#[delete("/{id:\\d+}")]
async fn delete_release(
    services: web::Data<TrackerServices>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    deleted(ENTITY_RELEASE, id, services.releases.delete(id).await?)
}

pub fn routes() -> Scope {
    web::scope("/releases")
        .service(create_release)
        .service(update_release)
        .service(list_releases)
        .service(count_releases)
        .service(current_releases)
        .service(future_releases)
        .service(get_release)
        .service(release_sprs)
        .service(delete_release)
}
