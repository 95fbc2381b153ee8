//! Health endpoint

use actix_web::{HttpResponse, Scope, get, web};
use serde::Serialize;

use crate::TrackerServices;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[get("/health")]
async fn health(services: web::Data<TrackerServices>) -> HttpResponse {
    match services.health_check().await {
        Ok(()) => HttpResponse::Ok().json(HealthStatus {
            status: "UP",
            error: None,
        }),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            HttpResponse::ServiceUnavailable().json(HealthStatus {
                status: "DOWN",
                error: Some(e.to_string()),
            })
        }
    }
}

pub fn routes() -> Scope {
    web::scope("/management").service(health)
}
