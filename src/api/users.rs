use actix_web::{web, HttpResponse, Responder, ResponseError};

use crate::models::{AddUserResponse, MessageResponse, UserPayload, UserResponse};
use crate::services::UserService;

/// GET /get_data - Lista todos os usuários
#[utoipa::path(
    get,
    path = "/get_data",
    tag = "Users",
    responses(
        (status = 200, description = "All users in store order", body = [UserResponse]),
        (status = 500, description = "Store failure", body = MessageResponse)
    )
)]
pub async fn get_data(service: web::Data<UserService>) -> impl Responder {
    match service.list_users().await {
        Ok(users) => {
            log::debug!("📋 Listed {} users", users.len());
            HttpResponse::Ok().json(users)
        }
        Err(e) => {
            log::error!("❌ Error listing users: {}", e);
            HttpResponse::InternalServerError().json(MessageResponse::new(e.to_string()))
        }
    }
}

/// POST /add_data - Cria um novo usuário
#[utoipa::path(
    post,
    path = "/add_data",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = AddUserResponse),
        (status = 400, description = "Name or email missing", body = MessageResponse)
    )
)]
pub async fn add_data(
    service: web::Data<UserService>,
    body: web::Json<UserPayload>,
) -> impl Responder {
    match service.add_user(body.into_inner()).await {
        Ok(id) => HttpResponse::Created().json(AddUserResponse {
            message: "User added successfully".to_string(),
            id,
        }),
        Err(e) => {
            log::warn!("⚠️  Failed to add user: {}", e);
            e.error_response()
        }
    }
}

/// PUT /update_data/{user_id} - Atualiza campos de um usuário
#[utoipa::path(
    put,
    path = "/update_data/{user_id}",
    tag = "Users",
    params(("user_id" = String, Path, description = "User id (ObjectId hex)")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = MessageResponse),
        (status = 400, description = "Missing fields, malformed id or store error", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse)
    )
)]
pub async fn update_data(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    body: web::Json<UserPayload>,
) -> impl Responder {
    match service.update_user(&user_id, body.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("User updated")),
        Err(e) => {
            log::warn!("⚠️  Failed to update user {}: {}", user_id, e);
            e.error_response()
        }
    }
}

/// DELETE /delete_data/{user_id} - Remove um usuário
#[utoipa::path(
    delete,
    path = "/delete_data/{user_id}",
    tag = "Users",
    params(("user_id" = String, Path, description = "User id (ObjectId hex)")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Malformed id or store error", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse)
    )
)]
pub async fn delete_data(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> impl Responder {
    match service.delete_user(&user_id).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("User deleted")),
        Err(e) => {
            log::warn!("⚠️  Failed to delete user {}: {}", user_id, e);
            e.error_response()
        }
    }
}
