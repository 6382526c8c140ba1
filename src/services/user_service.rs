// ==================== USER RECORDS ====================
// CRUD sobre a coleção de usuários. Cada operação é uma única chamada ao store.

use mongodb::bson::oid::ObjectId;
use std::sync::Arc;

use super::user_store::UserStore;
use crate::models::{UserPayload, UserResponse};
use crate::utils::UserError;

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub async fn list_users(&self) -> Result<Vec<UserResponse>, UserError> {
        let documents = self.store.find_all().await?;
        Ok(documents.iter().map(UserResponse::from).collect())
    }

    /// Returns the new id as a hex string
    pub async fn add_user(&self, payload: UserPayload) -> Result<String, UserError> {
        let document = payload.into_document()?;
        let id = self.store.insert_one(document).await?;

        log::info!("✅ User added: {}", id);
        Ok(id.to_hex())
    }

    /// Required fields are checked before the id is parsed
    pub async fn update_user(&self, user_id: &str, payload: UserPayload) -> Result<(), UserError> {
        let fields = payload.into_document()?;
        let id = parse_id(user_id)?;

        match self.store.update_one(id, fields).await? {
            0 => Err(UserError::NotFound),
            _ => {
                log::info!("✅ User updated: {}", id);
                Ok(())
            }
        }
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<(), UserError> {
        let id = parse_id(user_id)?;

        match self.store.delete_one(id).await? {
            0 => Err(UserError::NotFound),
            _ => {
                log::info!("🗑️  User deleted: {}", id);
                Ok(())
            }
        }
    }

    pub async fn is_store_reachable(&self) -> bool {
        match self.store.ping().await {
            Ok(()) => true,
            Err(e) => {
                log::warn!("⚠️  Store ping failed: {}", e);
                false
            }
        }
    }
}

fn parse_id(user_id: &str) -> Result<ObjectId, UserError> {
    ObjectId::parse_str(user_id).map_err(|e| UserError::InvalidId(e.to_string()))
}
