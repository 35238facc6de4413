use std::sync::Arc;

use anyhow::Context;
use trivia_api::config::Settings;
use trivia_api::db::{self, SqliteRepository};
use trivia_api::server::{run_server, AppState};
use trivia_api::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let settings = Settings::load().context("Failed to load settings")?;
    let pool = db::establish_connection(&settings.database.path)
        .await
        .with_context(|| format!("Cannot open database {}", settings.database.path))?;

    if settings.database.run_migrations {
        tracing::info!("Running db migrations...");
        db::run_migrations(&pool).await?;
    }

    let state = AppState::new(Arc::new(SqliteRepository::new(pool)), settings.search);
    run_server(state, &settings.server.address()).await
}
