//! Team calendar endpoints

use actix_web::{HttpRequest, HttpResponse, Scope, delete, get, post, put, web};

use relboard_common::ENTITY_TEAM_EVENT;
use relboard_core::{TeamEvent, TeamEventQuery};

use super::error::AppError;
use super::response::{created, deleted, found, require_id, require_no_id, updated, validate_body};
use crate::TrackerServices;

#[post("")]
async fn create_team_event(
    req: HttpRequest,
    services: web::Data<TrackerServices>,
    body: web::Json<TeamEvent>,
) -> Result<HttpResponse, AppError> {
    let event = body.into_inner();
    require_no_id(ENTITY_TEAM_EVENT, event.id)?;
    validate_body(&event)?;

    let saved = services.team_events.save(&event).await?;
    Ok(created(&req, ENTITY_TEAM_EVENT, saved.id, &saved))
}

#[put("")]
async fn update_team_event(
    services: web::Data<TrackerServices>,
    body: web::Json<TeamEvent>,
) -> Result<HttpResponse, AppError> {
    let event = body.into_inner();
    require_id(ENTITY_TEAM_EVENT, event.id)?;
    validate_body(&event)?;

    let saved = services.team_events.save(&event).await?;
    Ok(updated(ENTITY_TEAM_EVENT, saved.id, &saved))
}

#[get("")]
async fn list_team_events(
    services: web::Data<TrackerServices>,
    query: web::Query<TeamEventQuery>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(services.team_events.find_all(&query).await?))
}

#[get("/count")]
async fn count_team_events(
    services: web::Data<TrackerServices>,
    query: web::Query<TeamEventQuery>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(services.team_events.count(&query).await?))
}

#[get("/{id:\\d+}")]
async fn get_team_event(
    services: web::Data<TrackerServices>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    found(ENTITY_TEAM_EVENT, id, services.team_events.find_one(id).await?)
}

#[delete("/{id:\\d+}")]
async fn delete_team_event(
    services: web::Data<TrackerServices>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    deleted(ENTITY_TEAM_EVENT, id, services.team_events.delete(id).await?)
}

pub fn routes() -> Scope {
    web::scope("/team-events")
        .service(create_team_event)
        .service(update_team_event)
        .service(list_team_events)
        .service(count_team_events)
        .service(get_team_event)
        .service(delete_team_event)
}
