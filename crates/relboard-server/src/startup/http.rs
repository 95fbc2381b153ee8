//! HTTP server setup

use actix_web::middleware::{Compress, Logger};
use actix_web::{App, HttpServer, dev::Server, web};

use relboard_tracker::{TrackerServices, api};

/// Creates and binds the API server.
///
/// Every tracker route is mounted under `context_path`.
pub fn main_server(
    services: TrackerServices,
    context_path: String,
    address: String,
    port: u16,
) -> Result<Server, std::io::Error> {
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Compress::default())
            .app_data(web::Data::new(services.clone()))
            .service(web::scope(&context_path).configure(api::configure))
    })
    .bind((address, port))?
    .run())
}
