pub mod routes;

use crate::{config::Config, gemini::GeminiClient};
use actix_web::{web, App, HttpServer};

pub const DEFAULT_PORT: u16 = 3000;

/// Bind and run the proxy server. One `GeminiClient` is built at startup and
/// shared read-only across workers.
pub async fn run(config: Config, client: GeminiClient) -> std::io::Result<()> {
    let port = config.port.unwrap_or(DEFAULT_PORT);
    let client = web::Data::new(client);

    crate::logger::log_startup_info(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), port);

    HttpServer::new(move || {
        App::new()
            .app_data(client.clone())
            .service(routes::index)
            .service(routes::generate)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
