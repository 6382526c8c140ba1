use std::env;

pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE: &str = "userdb";
pub const DEFAULT_COLLECTION: &str = "users";

/// Runtime configuration read from the environment (and `.env`, if present)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: String,
    pub mongo_uri: String,
    pub database: String,
    pub collection: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Self {
            host: get("HOST", "0.0.0.0"),
            port: get("PORT", "5000"),
            mongo_uri: get("MONGO_URI", DEFAULT_MONGO_URI),
            database: get("MONGO_DATABASE", DEFAULT_DATABASE),
            collection: get("MONGO_COLLECTION", DEFAULT_COLLECTION),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
