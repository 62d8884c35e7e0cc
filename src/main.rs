use std::sync::Arc;

use clap::Parser;

mod auth;
mod cli;
mod config;
mod db;

use crate::{auth::services::create_superuser, cli::Cli, config::AppConfig, db::Database};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "urban_drive_admin=info,mongodb=warn".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    // stdout is reserved for the operator-facing result line
    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();
    let config = Arc::new(AppConfig::from_env());

    let db = Database::connect(config).await?;
    let users = db.users();
    tracing::info!(namespace = %users.namespace(), email = %cli.email, "provisioning superuser");

    let result = create_superuser(&users, &cli.email, &cli.password).await;
    db.shutdown().await;

    // Insert failures come back as an outcome, so only lookup/hash errors exit non-zero.
    let outcome = result?;
    println!("{}", outcome.report());
    Ok(())
}
