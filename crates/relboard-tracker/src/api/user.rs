//! User directory endpoints

use actix_web::{HttpRequest, HttpResponse, Scope, get, post, web};

use relboard_common::ENTITY_USER;
use relboard_core::User;

use super::error::AppError;
use super::response::{created, found, require_no_id, validate_body};
use crate::TrackerServices;

#[get("")]
async fn list_users(services: web::Data<TrackerServices>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(services.users.find_all().await?))
}

#[get("/{id:\\d+}")]
async fn get_user(
    services: web::Data<TrackerServices>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    found(ENTITY_USER, id, services.users.find_one(id).await?)
}

#[post("")]
async fn create_user(
    req: HttpRequest,
    services: web::Data<TrackerServices>,
    body: web::Json<User>,
) -> Result<HttpResponse, AppError> {
    let user = body.into_inner();
    require_no_id(ENTITY_USER, user.id)?;
    validate_body(&user)?;

    let saved = services.users.create(&user).await?;
    Ok(created(&req, ENTITY_USER, saved.id, &saved))
}

pub fn routes() -> Scope {
    web::scope("/users")
        .service(list_users)
        .service(create_user)
        .service(get_user)
}
