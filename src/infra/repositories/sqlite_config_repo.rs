use crate::domain::ports::AdminConfigRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

const ADMIN_PASSWORD_KEY: &str = "admin_password";

pub struct SqliteConfigRepo { pool: SqlitePool }
impl SqliteConfigRepo { pub fn new(pool: SqlitePool) -> Self { Self { pool } } }

#[async_trait]
impl AdminConfigRepository for SqliteConfigRepo {
    async fn get_password_hash(&self) -> Result<Option<String>, AppError> {
        sqlx::query_scalar::<_, String>("SELECT value FROM admin_config WHERE key = ?")
            .bind(ADMIN_PASSWORD_KEY)
            .fetch_optional(&self.pool).await.map_err(AppError::from_store)
    }

    async fn set_password_hash(&self, hash: &str) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO admin_config (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at"
        )
            .bind(ADMIN_PASSWORD_KEY)
            .bind(hash)
            .bind(Utc::now())
            .execute(&self.pool).await.map_err(AppError::from_store)?;
        Ok(())
    }
}
