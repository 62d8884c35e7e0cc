use async_trait::async_trait;
use mongodb::{
    bson::{doc, Bson},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    Collection,
};
use tracing::debug;

use crate::auth::repo_types::{AdminUser, StoredUser};

const DUPLICATE_KEY: i32 = 11000;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("user lookup failed: {0}")]
    Lookup(#[source] MongoError),
    #[error("a user with this email already exists (duplicate key)")]
    DuplicateKey,
    #[error("insert failed: {0}")]
    Insert(#[source] MongoError),
    #[error("could not encode document: {0}")]
    Serialization(String),
}

/// The two operations provisioning needs from the users collection.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<StoredUser>, StoreError>;
    /// Inserts the record and returns the generated id.
    async fn insert_admin(&self, user: &AdminUser) -> Result<String, StoreError>;
}

#[derive(Clone)]
pub struct MongoUserStore {
    users: Collection<AdminUser>,
}

impl MongoUserStore {
    pub fn new(users: Collection<AdminUser>) -> Self {
        Self { users }
    }

    /// `database.collection`, for logs.
    pub fn namespace(&self) -> String {
        self.users.namespace().to_string()
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<StoredUser>, StoreError> {
        let found = self
            .users
            .clone_with_type::<StoredUser>()
            .find_one(doc! { "email": email })
            .await
            .map_err(StoreError::Lookup)?;
        debug!(collection = %self.users.name(), found = found.is_some(), "find_by_email");
        Ok(found)
    }

    async fn insert_admin(&self, user: &AdminUser) -> Result<String, StoreError> {
        let result = self
            .users
            .insert_one(user)
            .await
            .map_err(classify_insert_error)?;
        Ok(id_to_string(result.inserted_id))
    }
}

fn classify_insert_error(e: MongoError) -> StoreError {
    match e.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(we)) if we.code == DUPLICATE_KEY => {
            StoreError::DuplicateKey
        }
        ErrorKind::BsonSerialization(inner) => StoreError::Serialization(inner.to_string()),
        _ => StoreError::Insert(e),
    }
}

pub(crate) fn id_to_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}
