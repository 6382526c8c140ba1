use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Client, Collection, Database};
use std::error::Error;
use std::time::Duration;

use crate::config::AppConfig;
use crate::services::UserStore;
use crate::utils::UserError;

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
    users: Collection<Document>,
}

impl MongoDB {
    pub async fn new(config: &AppConfig) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(&config.mongo_uri).await?;

        // Falha rápido se o MongoDB não estiver acessível
        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));
        client_options.app_name = Some("user-records-service".to_string());

        let client = Client::with_options(client_options)?;
        let db = client.database(&config.database);
        let users = db.collection::<Document>(&config.collection);

        // Test connection
        db.run_command(doc! { "ping": 1 }).await?;

        log::info!(
            "✅ Using collection {}.{}",
            config.database,
            config.collection
        );

        Ok(Self { client, db, users })
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Waits for in-flight operations before closing the connection pool
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}

#[async_trait]
impl UserStore for MongoDB {
    async fn find_all(&self) -> Result<Vec<Document>, UserError> {
        let cursor = self.users.find(doc! {}).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn insert_one(&self, document: Document) -> Result<ObjectId, UserError> {
        let result = self.users.insert_one(document).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| UserError::Store(format!("unexpected inserted id: {}", result.inserted_id)))
    }

    async fn update_one(&self, id: ObjectId, fields: Document) -> Result<u64, UserError> {
        let result = self
            .users
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .await?;
        Ok(result.matched_count)
    }

    async fn delete_one(&self, id: ObjectId) -> Result<u64, UserError> {
        let result = self.users.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> Result<(), UserError> {
        self.database().run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_mongodb_round_trip() {
        dotenv::dotenv().ok();

        let mut config = AppConfig::from_env();
        config.collection = format!("users_test_{}", ObjectId::new().to_hex());

        let db = MongoDB::new(&config).await.expect("MongoDB not reachable");

        let id = db
            .insert_one(doc! { "name": "A", "email": "a@x.com", "role": "admin" })
            .await
            .unwrap();

        let matched = db
            .update_one(id, doc! { "name": "B", "email": "b@x.com" })
            .await
            .unwrap();
        assert_eq!(matched, 1);

        let all = db.find_all().await.unwrap();
        let stored = all.iter().find(|d| d.get_object_id("_id").ok() == Some(id)).unwrap();
        assert_eq!(stored.get_str("name").unwrap(), "B");
        assert_eq!(stored.get_str("role").unwrap(), "admin");

        assert_eq!(db.delete_one(id).await.unwrap(), 1);
        assert_eq!(db.delete_one(id).await.unwrap(), 0);

        db.users.drop().await.unwrap();
    }
}
