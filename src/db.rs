use std::{sync::Arc, time::Duration};

use anyhow::Context;
use mongodb::{options::ClientOptions, Client};

use crate::{auth::repo::MongoUserStore, config::AppConfig};

const APP_NAME: &str = "urban-drive-admin";
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Owns the driver client for the lifetime of one run.
pub struct Database {
    client: Client,
    config: Arc<AppConfig>,
}

impl Database {
    /// Builds the client. No round-trip happens until the first operation.
    pub async fn connect(config: Arc<AppConfig>) -> anyhow::Result<Self> {
        let mut options = ClientOptions::parse(&config.mongo_uri)
            .await
            .context("parse mongodb connection string")?;
        options.app_name = Some(APP_NAME.into());
        options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);

        let client = Client::with_options(options).context("build mongodb client")?;
        Ok(Self { client, config })
    }

    pub fn users(&self) -> MongoUserStore {
        let users = self
            .client
            .database(&self.config.database)
            .collection(&self.config.users_collection);
        MongoUserStore::new(users)
    }

    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}
