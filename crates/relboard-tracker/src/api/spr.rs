//! SPR endpoints, including the per-user open tallies

use actix_web::{HttpRequest, HttpResponse, Scope, delete, get, post, put, web};

use relboard_common::ENTITY_SPR;
use relboard_core::{Spr, SprQuery};

use super::error::AppError;
use super::response::{created, deleted, found, require_id, require_no_id, updated, validate_body};
use crate::TrackerServices;

#[post("")]
async fn create_spr(
    req: HttpRequest,
    services: web::Data<TrackerServices>,
    body: web::Json<Spr>,
) -> Result<HttpResponse, AppError> {
    let spr = body.into_inner();
    require_no_id(ENTITY_SPR, spr.id)?;
    validate_body(&spr)?;

    let saved = services.sprs.save(&spr).await?;
    Ok(created(&req, ENTITY_SPR, saved.id, &saved))
}

#[put("")]
async fn update_spr(
    services: web::Data<TrackerServices>,
    body: web::Json<Spr>,
) -> Result<HttpResponse, AppError> {
    let spr = body.into_inner();
    require_id(ENTITY_SPR, spr.id)?;
    validate_body(&spr)?;

    let saved = services.sprs.save(&spr).await?;
    Ok(updated(ENTITY_SPR, saved.id, &saved))
}

#[get("")]
async fn list_sprs(
    services: web::Data<TrackerServices>,
    query: web::Query<SprQuery>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(services.sprs.find_all(&query).await?))
}

#[get("/count")]
async fn count_sprs(
    services: web::Data<TrackerServices>,
    query: web::Query<SprQuery>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(services.sprs.count(&query).await?))
}

#[get("/open")]
async fn open_sprs(services: web::Data<TrackerServices>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(services.sprs.find_open().await?))
}

/// Open SPR count per user; users with nothing open are listed with 0.
#[get("/open/count")]
async fn open_count_by_user(
    services: web::Data<TrackerServices>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(services.sprs.open_count_by_user().await?))
}

#[get("/reviewed")]
async fn reviewed_sprs(services: web::Data<TrackerServices>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(services.sprs.find_reviewed().await?))
}

#[get("/user/{user_id:\\d+}")]
async fn user_sprs(
    services: web::Data<TrackerServices>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(services.sprs.find_by_user(path.into_inner()).await?))
}

#[get("/open/user/{user_id:\\d+}")]
async fn user_open_sprs(
    services: web::Data<TrackerServices>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let sprs = services.sprs.find_open_by_user(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(sprs))
}

#[get("/share/user/{user_id:\\d+}")]
async fn user_share(
    services: web::Data<TrackerServices>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(services.sprs.user_share(path.into_inner()).await?))
}

#[get("/reviewed/count/user/{user_id:\\d+}")]
async fn user_reviewed_count(
    services: web::Data<TrackerServices>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let count = services.sprs.reviewed_count_for_user(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(count))
}

#[get("/{id:\\d+}")]
async fn get_spr(
    services: web::Data<TrackerServices>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    found(ENTITY_SPR, id, services.sprs.find_one(id).await?)
}

#[delete("/{id:\\d+}")]
async fn delete_spr(
    services: web::Data<TrackerServices>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    deleted(ENTITY_SPR, id, services.sprs.delete(id).await?)
}

pub fn routes() -> Scope {
    web::scope("/sprs")
        .service(create_spr)
        .service(update_spr)
        .service(list_sprs)
        .service(count_sprs)
        .service(open_sprs)
        .service(open_count_by_user)
        .service(reviewed_sprs)
        .service(user_sprs)
        .service(user_open_sprs)
        .service(user_share)
        .service(user_reviewed_count)
        .service(get_spr)
        .service(delete_spr)
}
