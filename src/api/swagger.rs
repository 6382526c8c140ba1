use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Records Service API",
        version = "1.0.0",
        description = "CRUD over a single collection of user records stored in MongoDB.\n\n`name` and `email` are required on create and update; any other fields are stored as sent."
    ),
    paths(
        // Users
        crate::api::users::get_data,
        crate::api::users::add_data,
        crate::api::users::update_data,
        crate::api::users::delete_data,

        // Health
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::models::UserPayload,
            crate::models::UserResponse,
            crate::models::AddUserResponse,
            crate::models::MessageResponse,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "Create, list, update and delete user records."),
        (name = "Health", description = "Service and document store status."),
    )
)]
pub struct ApiDoc;
