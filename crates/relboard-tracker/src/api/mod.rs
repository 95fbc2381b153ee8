//! REST API
//!
//! Every entity gets its own scope; [`configure`] mounts them all under the
//! caller's context path.

pub mod error;
pub mod header;
pub mod health;
pub mod out_of_office;
pub mod release;
pub mod response;
pub mod search;
pub mod spr;
pub mod team_event;
pub mod user;

use actix_web::web;

use relboard_common::RelboardError;

pub use error::{AppError, ErrorBody};

/// Register every tracker route and the request extractor error handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(release::routes())
        .service(spr::routes())
        .service(team_event::routes())
        .service(out_of_office::routes())
        .service(user::routes())
        .service(search::routes())
        .service(health::routes());
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::from(RelboardError::IllegalArgument(err.to_string())).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        AppError::from(RelboardError::IllegalArgument(err.to_string())).into()
    })
}
