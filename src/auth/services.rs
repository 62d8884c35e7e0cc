use anyhow::Context;
use tracing::{error, info, instrument, warn};

use crate::auth::{
    password::hash_password,
    repo::{StoreError, UserStore},
    repo_types::AdminUser,
};

/// Result of one provisioning run. Every variant is a handled outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provisioned {
    Created { id: String },
    AlreadyExists { email: String },
    InsertFailed { reason: String },
}

impl Provisioned {
    /// Line printed to the operator.
    pub fn report(&self) -> String {
        match self {
            Provisioned::Created { id } => {
                format!("Superuser created successfully with ID: {id}")
            }
            Provisioned::AlreadyExists { email } => {
                format!("Error: User with email '{email}' already exists.")
            }
            Provisioned::InsertFailed { reason } => {
                format!("Error creating superuser: {reason}")
            }
        }
    }
}

/// Ensures a single admin record exists for `email`.
///
/// The existence check and the insert are two separate round-trips, so two
/// concurrent runs for the same email can both pass the check. A lookup
/// failure is returned as an error; insert failures are reported through
/// [`Provisioned::InsertFailed`] and never raised.
#[instrument(skip(store, password))]
pub async fn create_superuser(
    store: &dyn UserStore,
    email: &str,
    password: &str,
) -> anyhow::Result<Provisioned> {
    if let Some(existing) = store
        .find_by_email(email)
        .await
        .context("look up user by email")?
    {
        warn!(
            email = %existing.email,
            existing_id = ?existing.id,
            existing_role = ?existing.role,
            "user already exists; nothing written"
        );
        return Ok(Provisioned::AlreadyExists {
            email: existing.email,
        });
    }

    let hash = hash_password(password);
    let user = AdminUser::new(email, hash);

    match store.insert_admin(&user).await {
        Ok(id) => {
            info!(user_id = %id, email = %email, "superuser created");
            Ok(Provisioned::Created { id })
        }
        Err(StoreError::DuplicateKey) => {
            warn!(email = %email, "insert hit duplicate key");
            Ok(Provisioned::AlreadyExists {
                email: email.to_string(),
            })
        }
        Err(e) => {
            error!(error = %e, email = %email, "create superuser failed");
            Ok(Provisioned::InsertFailed {
                reason: e.to_string(),
            })
        }
    }
}
