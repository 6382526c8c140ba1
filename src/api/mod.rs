pub mod health;
pub mod swagger;
pub mod users;

use actix_cors::Cors;
use actix_web::{error::InternalError, web, HttpResponse};

use crate::models::MessageResponse;

/// Cross-origin requests are accepted from any origin
pub fn cors() -> Cors {
    Cors::permissive()
}

/// Registers every route; shared by `main` and the handler tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Corpo inválido também responde com {"message": ...}
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let message = format!("Error: {}", err);
        log::warn!("⚠️  Rejected request body: {}", err);
        InternalError::from_response(err, HttpResponse::BadRequest().json(MessageResponse::new(message)))
            .into()
    });

    cfg.app_data(json_config)
        .route("/health", web::get().to(health::health_check))
        .route("/get_data", web::get().to(users::get_data))
        .route("/add_data", web::post().to(users::add_data))
        .route("/update_data/{user_id}", web::put().to(users::update_data))
        .route("/delete_data/{user_id}", web::delete().to(users::delete_data));
}
