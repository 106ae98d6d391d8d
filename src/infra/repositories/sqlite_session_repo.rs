use crate::domain::{models::session::AdminSession, ports::AdminSessionRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

pub struct SqliteSessionRepo { pool: SqlitePool }
impl SqliteSessionRepo { pub fn new(pool: SqlitePool) -> Self { Self { pool } } }

#[async_trait]
impl AdminSessionRepository for SqliteSessionRepo {
    async fn create(&self, session: &AdminSession) -> Result<(), AppError> {
        sqlx::query("INSERT INTO admin_sessions (token_hash, created_at, expires_at) VALUES (?, ?, ?)")
            .bind(&session.token_hash)
            .bind(session.created_at)
            .bind(session.expires_at)
            .execute(&self.pool).await.map_err(AppError::from_store)?;
        Ok(())
    }

    async fn find(&self, token_hash: &str) -> Result<Option<AdminSession>, AppError> {
        sqlx::query_as::<_, AdminSession>(
            "SELECT token_hash, created_at, expires_at FROM admin_sessions WHERE token_hash = ?"
        )
            .bind(token_hash)
            .fetch_optional(&self.pool).await.map_err(AppError::from_store)
    }

    async fn delete(&self, token_hash: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM admin_sessions WHERE token_hash = ?")
            .bind(token_hash)
            .execute(&self.pool).await.map_err(AppError::from_store)?;
        Ok(())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM admin_sessions WHERE expires_at <= ?")
            .bind(now)
            .execute(&self.pool).await.map_err(AppError::from_store)?;
        Ok(result.rows_affected())
    }
}
