//! Main entry point for the Relboard server.

use relboard_server::{model::Configuration, startup};
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let configuration = Configuration::new()?;
    let _logging_guard = startup::init_logging(&configuration.logging_config())?;

    let services = startup::build_services(&configuration).await?;

    let address = configuration.server_address();
    let port = configuration.server_port();
    let context_path = configuration.server_context_path();

    let server = startup::main_server(services, context_path.clone(), address.clone(), port)?;
    info!(%address, port, %context_path, "Relboard server started");

    server.await?;

    info!("Relboard server stopped");
    Ok(())
}
