//! Shared response builders for entity endpoints

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;
use validator::Validate;

use relboard_common::RelboardError;

use super::error::AppError;
use super::header::entity_alert;

/// Reject a request body that fails its field constraints.
pub fn validate_body<T: Validate>(body: &T) -> Result<(), AppError> {
    body.validate()
        .map_err(|e| RelboardError::IllegalArgument(e.to_string()).into())
}

/// 201 with a Location pointing at the new record.
pub fn created<T: Serialize>(
    req: &HttpRequest,
    entity: &str,
    id: Option<i64>,
    body: &T,
) -> HttpResponse {
    let id = id.unwrap_or_default();
    let location = format!("{}/{}", req.path().trim_end_matches('/'), id);

    let mut response = HttpResponse::Created();
    response.insert_header((header::LOCATION, location));
    for alert in entity_alert(entity, "created", id) {
        response.insert_header(alert);
    }
    response.json(body)
}

pub fn updated<T: Serialize>(entity: &str, id: Option<i64>, body: &T) -> HttpResponse {
    let mut response = HttpResponse::Ok();
    for alert in entity_alert(entity, "updated", id.unwrap_or_default()) {
        response.insert_header(alert);
    }
    response.json(body)
}

/// 204 when the record existed, 404 otherwise.
pub fn deleted(entity: &'static str, id: i64, existed: bool) -> Result<HttpResponse, AppError> {
    if !existed {
        return Err(RelboardError::NotFound(entity, id).into());
    }

    let mut response = HttpResponse::NoContent();
    for alert in entity_alert(entity, "deleted", id) {
        response.insert_header(alert);
    }
    Ok(response.finish())
}

pub fn found<T: Serialize>(
    entity: &'static str,
    id: i64,
    value: Option<T>,
) -> Result<HttpResponse, AppError> {
    match value {
        Some(value) => Ok(HttpResponse::Ok().json(value)),
        None => Err(RelboardError::NotFound(entity, id).into()),
    }
}

/// Fail when a record about to be created already carries an id.
pub fn require_no_id(entity: &'static str, id: Option<i64>) -> Result<(), AppError> {
    match id {
        Some(_) => Err(RelboardError::IdExists(entity).into()),
        None => Ok(()),
    }
}

/// Fail when a record about to be updated has no id.
pub fn require_id(entity: &'static str, id: Option<i64>) -> Result<(), AppError> {
    match id {
        Some(_) => Ok(()),
        None => Err(RelboardError::IdNull(entity).into()),
    }
}
