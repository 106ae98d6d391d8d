use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions};
use sqlx::{SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::services::auth_service::AuthService;
use crate::infra::repositories::{
    sqlite_config_repo::SqliteConfigRepo, sqlite_event_repo::SqliteEventRepo,
    sqlite_session_repo::SqliteSessionRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    info!("Initializing SQLite connection with WAL Mode...");

    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .expect("Invalid SQLite connection string")
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(opts)
        .await
        .expect("Failed to connect to SQLite");

    run_sqlite_migrations(&pool).await;

    state_from_pool(config, pool)
}

/// Wires the SQLite adapters into the application state.
pub fn state_from_pool(config: &Config, pool: SqlitePool) -> AppState {
    let config_repo = Arc::new(SqliteConfigRepo::new(pool.clone()));
    let session_repo = Arc::new(SqliteSessionRepo::new(pool.clone()));
    let auth_service = Arc::new(AuthService::new(
        config_repo,
        session_repo,
        config.default_admin_password.clone(),
        chrono::Duration::hours(config.session_ttl_hours),
    ));

    AppState {
        config: config.clone(),
        event_repo: Arc::new(SqliteEventRepo::new(pool)),
        auth_service,
    }
}

pub async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
