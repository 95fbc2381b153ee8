//! Application startup: logging, service wiring and the HTTP server.

mod http;
mod logging;
mod services;

pub use http::main_server;
pub use logging::{LogRotation, LoggingConfig, LoggingGuard, init_logging};
pub use services::{build_services, services_for};
