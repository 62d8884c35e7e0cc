use serde::Deserialize;

pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017/urban_drive";
pub const DEFAULT_DATABASE: &str = "urban_drive";
pub const DEFAULT_USERS_COLLECTION: &str = "users";

/// Where the users collection lives.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    pub mongo_uri: String,
    pub database: String,
    pub users_collection: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mongo_uri: DEFAULT_MONGO_URI.into(),
            database: DEFAULT_DATABASE.into(),
            users_collection: DEFAULT_USERS_COLLECTION.into(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset or blank keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            mongo_uri: var("MONGO_URI", DEFAULT_MONGO_URI),
            database: var("MONGO_DB", DEFAULT_DATABASE),
            users_collection: var("USERS_COLLECTION", DEFAULT_USERS_COLLECTION),
        }
    }
}
