//! Out-of-office endpoints

use actix_web::{HttpRequest, HttpResponse, Scope, delete, get, post, put, web};

use relboard_common::ENTITY_OUT_OF_OFFICE;
use relboard_core::{OutOfOffice, OutOfOfficeQuery};

use super::error::AppError;
use super::response::{created, deleted, found, require_id, require_no_id, updated, validate_body};
use crate::TrackerServices;

#[post("")]
async fn create_out_of_office(
    req: HttpRequest,
    services: web::Data<TrackerServices>,
    body: web::Json<OutOfOffice>,
) -> Result<HttpResponse, AppError> {
    let absence = body.into_inner();
    require_no_id(ENTITY_OUT_OF_OFFICE, absence.id)?;
    validate_body(&absence)?;

    let saved = services.out_of_offices.save(&absence).await?;
    Ok(created(&req, ENTITY_OUT_OF_OFFICE, saved.id, &saved))
}

#[put("")]
async fn update_out_of_office(
    services: web::Data<TrackerServices>,
    body: web::Json<OutOfOffice>,
) -> Result<HttpResponse, AppError> {
    let absence = body.into_inner();
    require_id(ENTITY_OUT_OF_OFFICE, absence.id)?;
    validate_body(&absence)?;

    let saved = services.out_of_offices.save(&absence).await?;
    Ok(updated(ENTITY_OUT_OF_OFFICE, saved.id, &saved))
}

#[get("")]
async fn list_out_of_offices(
    services: web::Data<TrackerServices>,
    query: web::Query<OutOfOfficeQuery>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(services.out_of_offices.find_all(&query).await?))
}

#[get("/count")]
async fn count_out_of_offices(
    services: web::Data<TrackerServices>,
    query: web::Query<OutOfOfficeQuery>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(services.out_of_offices.count(&query).await?))
}

#[get("/{id:\\d+}")]
async fn get_out_of_office(
    services: web::Data<TrackerServices>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    found(ENTITY_OUT_OF_OFFICE, id, services.out_of_offices.find_one(id).await?)
}

#[delete("/{id:\\d+}")]
async fn delete_out_of_office(
    services: web::Data<TrackerServices>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    deleted(ENTITY_OUT_OF_OFFICE, id, services.out_of_offices.delete(id).await?)
}

pub fn routes() -> Scope {
    web::scope("/out-of-offices")
        .service(create_out_of_office)
        .service(update_out_of_office)
        .service(list_out_of_offices)
        .service(count_out_of_offices)
        .service(get_out_of_office)
        .service(delete_out_of_office)
}
