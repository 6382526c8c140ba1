use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};

use crate::utils::UserError;

/// Operations the service needs from the document store.
///
/// Every method is a single store call; single-document atomicity is
/// whatever the store provides.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All records, in store iteration order
    async fn find_all(&self) -> Result<Vec<Document>, UserError>;

    /// Inserts a document and returns the id the store assigned
    async fn insert_one(&self, document: Document) -> Result<ObjectId, UserError>;

    /// Merges `fields` into the record (`$set` semantics). Returns the matched count.
    async fn update_one(&self, id: ObjectId, fields: Document) -> Result<u64, UserError>;

    /// Returns the deleted count
    async fn delete_one(&self, id: ObjectId) -> Result<u64, UserError>;

    async fn ping(&self) -> Result<(), UserError>;
}
