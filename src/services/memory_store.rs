use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, Document};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use super::user_store::UserStore;
use crate::utils::UserError;

/// In-process store with the same observable behavior as the MongoDB one
#[derive(Default)]
pub struct InMemoryUserStore {
    documents: RwLock<Vec<Document>>,
    offline: AtomicBool,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following call fail like an unreachable server
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), UserError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(UserError::Store("server selection timeout".to_string()));
        }
        Ok(())
    }
}

fn matches_id(document: &Document, id: &ObjectId) -> bool {
    document.get_object_id("_id").map(|stored| &stored == id).unwrap_or(false)
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_all(&self) -> Result<Vec<Document>, UserError> {
        self.check_online()?;
        Ok(self.documents.read().await.clone())
    }

    async fn insert_one(&self, document: Document) -> Result<ObjectId, UserError> {
        self.check_online()?;
        let id = ObjectId::new();
        let mut stored = doc! { "_id": id };
        stored.extend(document);
        self.documents.write().await.push(stored);
        Ok(id)
    }

    async fn update_one(&self, id: ObjectId, fields: Document) -> Result<u64, UserError> {
        self.check_online()?;
        let mut documents = self.documents.write().await;
        match documents.iter_mut().find(|d| matches_id(d, &id)) {
            Some(stored) => {
                stored.extend(fields);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_one(&self, id: ObjectId) -> Result<u64, UserError> {
        self.check_online()?;
        let mut documents = self.documents.write().await;
        match documents.iter().position(|d| matches_id(d, &id)) {
            Some(index) => {
                documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn ping(&self) -> Result<(), UserError> {
        self.check_online()
    }
}
