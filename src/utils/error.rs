use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use crate::models::MessageResponse;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Name and Email are required";
pub const NOT_FOUND_MESSAGE: &str = "User not found";

#[derive(Debug)]
pub enum UserError {
    /// `name` or `email` missing or empty
    Validation,
    /// Path id is not a valid ObjectId
    InvalidId(String),
    /// Body could not be converted into a BSON document
    Payload(String),
    /// The document store rejected or failed the operation
    Store(String),
    NotFound,
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserError::Validation => write!(f, "{}", REQUIRED_FIELDS_MESSAGE),
            UserError::InvalidId(msg) => write!(f, "Error: {}", msg),
            UserError::Payload(msg) => write!(f, "Error: {}", msg),
            UserError::Store(msg) => write!(f, "Error: {}", msg),
            UserError::NotFound => write!(f, "{}", NOT_FOUND_MESSAGE),
        }
    }
}

impl std::error::Error for UserError {}

impl From<mongodb::error::Error> for UserError {
    fn from(e: mongodb::error::Error) -> Self {
        UserError::Store(e.to_string())
    }
}

// Malformed ids and store faults collapse into the same 400.
impl ResponseError for UserError {
    fn status_code(&self) -> StatusCode {
        match self {
            UserError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(MessageResponse::new(self.to_string()))
    }
}
