mod api;
mod config;
mod database;
mod models;
mod services;
mod utils;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::services::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();

    log::info!("🚀 Starting User Records Service...");
    log::info!("📊 Database: {}", config.mongo_uri);

    // Initialize MongoDB connection
    let db = database::MongoDB::new(&config).await.map_err(|e| {
        log::error!("❌ Failed to connect to MongoDB: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    log::info!("✅ MongoDB connected successfully");

    let service = web::Data::new(UserService::new(Arc::new(db.clone())));

    let address = config.bind_address();
    log::info!("🌐 Server starting on {}", address);
    log::info!("📚 Swagger UI available at: http://{}/swagger-ui/", address);

    HttpServer::new(move || {
        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(service.clone())
            .wrap(api::cors())
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi)
            )
            .configure(api::configure)
    })
    .bind(address)?
    .run()
    .await?;

    log::info!("👋 Server stopped, closing MongoDB connection");
    db.shutdown().await;

    Ok(())
}
