//! Full-text search endpoints

use actix_web::{HttpResponse, Scope, get, web};
use serde::Deserialize;

use super::error::AppError;
use crate::TrackerServices;

#[derive(Debug, Deserialize)]
pub struct SearchParam {
    pub query: String,
}

#[get("/releases")]
async fn search_releases(
    services: web::Data<TrackerServices>,
    params: web::Query<SearchParam>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(services.releases.search(&params.query).await?))
}

#[get("/sprs")]
async fn search_sprs(
    services: web::Data<TrackerServices>,
    params: web::Query<SearchParam>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(services.sprs.search(&params.query).await?))
}

#[get("/team-events")]
async fn search_team_events(
    services: web::Data<TrackerServices>,
    params: web::Query<SearchParam>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(services.team_events.search(&params.query).await?))
}

#[get("/out-of-offices")]
async fn search_out_of_offices(
    services: web::Data<TrackerServices>,
    params: web::Query<SearchParam>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(services.out_of_offices.search(&params.query).await?))
}

pub fn routes() -> Scope {
    web::scope("/_search")
        .service(search_releases)
        .service(search_sprs)
        .service(search_team_events)
        .service(search_out_of_offices)
}
