use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

pub const ADMIN_ROLE: &str = "admin";

/// Document written for a new superuser.
///
/// Field names match the web application's `users` schema, so `created_at`
/// keeps its snake_case key while the rest are camelCase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub email: String,
    /// werkzeug-style `pbkdf2:sha256:<iterations>$<salt>$<hex>`.
    pub password: String,
    pub user_name: String,
    pub phone: String,
    pub dob: String,
    pub gender: String,
    #[serde(rename = "created_at")]
    pub created_at: Option<DateTime>, // left null
    pub role: String,
    pub profile_image: Option<String>,
}

impl AdminUser {
    /// Fixed-shape admin record around an already hashed password.
    pub fn new(email: &str, password_hash: String) -> Self {
        Self {
            email: email.to_string(),
            password: password_hash,
            user_name: "Administrator".into(),
            phone: "1234567890".into(),
            dob: "01/01/1970".into(),
            gender: "Other".into(),
            created_at: None,
            role: ADMIN_ROLE.into(),
            profile_image: None,
        }
    }
}

/// What the lookup needs back from an existing user; other fields are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StoredUser {
    #[serde(rename = "_id", default)]
    pub id: Option<ObjectId>,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}
