use mongodb::bson::{self, doc, Bson, Document};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

use crate::utils::UserError;

/// Body accepted by add and update.
///
/// `name` and `email` are optional at the type level so that a missing field
/// reaches validation instead of failing JSON extraction. Anything else the
/// caller sends is kept in `extra` and stored untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UserPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl UserPayload {
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            extra: HashMap::new(),
        }
    }

    /// Checks the required fields and builds the document to write.
    /// A caller-supplied `_id` is dropped: ids belong to the store.
    pub fn into_document(self) -> Result<Document, UserError> {
        let name = self.name.filter(|n| !n.is_empty()).ok_or(UserError::Validation)?;
        let email = self.email.filter(|e| !e.is_empty()).ok_or(UserError::Validation)?;

        let mut document = doc! { "name": name, "email": email };

        for (key, value) in self.extra {
            if key == "_id" {
                continue;
            }
            let value = bson::to_bson(&value).map_err(|e| UserError::Payload(e.to_string()))?;
            document.insert(key, value);
        }

        Ok(document)
    }
}

/// External representation of a stored record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&Document> for UserResponse {
    fn from(document: &Document) -> Self {
        UserResponse {
            id: render_id(document.get("_id")),
            name: document.get_str("name").unwrap_or_default().to_string(),
            email: document.get_str("email").unwrap_or_default().to_string(),
        }
    }
}

fn render_id(value: Option<&Bson>) -> String {
    match value {
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(Bson::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AddUserResponse {
    pub message: String,
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_missing_or_empty_fields_are_rejected() {
        let missing_email = UserPayload {
            name: Some("Ana".into()),
            ..Default::default()
        };
        assert!(matches!(missing_email.into_document(), Err(UserError::Validation)));

        let empty_name = UserPayload::new("", "ana@example.com");
        assert!(matches!(empty_name.into_document(), Err(UserError::Validation)));
    }

    #[test]
    fn test_extra_fields_pass_through() {
        let payload: UserPayload = serde_json::from_value(serde_json::json!({
            "name": "Ana",
            "email": "ana@example.com",
            "age": 31,
            "tags": ["admin"],
            "_id": "caller-chosen"
        }))
        .unwrap();

        let document = payload.into_document().unwrap();

        assert_eq!(document.get_str("name").unwrap(), "Ana");
        assert!(matches!(document.get("age"), Some(Bson::Int32(31)) | Some(Bson::Int64(31))));
        assert!(document.get_array("tags").is_ok());
        assert!(!document.contains_key("_id"));
    }

    #[test]
    fn test_response_from_document() {
        let oid = ObjectId::new();
        let stored = doc! { "_id": oid, "name": "Ana", "email": "ana@example.com", "age": 31 };

        let response = UserResponse::from(&stored);

        assert_eq!(response.id, oid.to_hex());
        assert_eq!(response.name, "Ana");
        assert_eq!(response.email, "ana@example.com");
    }

    #[test]
    fn test_response_defaults_missing_fields() {
        let stored = doc! { "_id": "legacy-id", "name": 42 };

        let response = UserResponse::from(&stored);

        assert_eq!(response.id, "legacy-id");
        assert_eq!(response.name, "");
        assert_eq!(response.email, "");
    }

    #[test]
    fn test_response_serializes_underscore_id() {
        let response = UserResponse {
            id: "abc".into(),
            name: "Ana".into(),
            email: "ana@example.com".into(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["_id"], "abc");
    }
}
