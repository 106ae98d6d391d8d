use crate::domain::models::{
    event::{Event, EventFields, EventQuery},
    session::AdminSession,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Applies the equality/range constraints; orders by `event_date` only when asked.
    async fn list(&self, query: &EventQuery) -> Result<Vec<Event>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError>;
    async fn create(&self, fields: &EventFields) -> Result<Event, AppError>;
    async fn update(&self, id: &str, fields: &EventFields) -> Result<Event, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait AdminConfigRepository: Send + Sync {
    async fn get_password_hash(&self) -> Result<Option<String>, AppError>;
    async fn set_password_hash(&self, hash: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait AdminSessionRepository: Send + Sync {
    async fn create(&self, session: &AdminSession) -> Result<(), AppError>;
    async fn find(&self, token_hash: &str) -> Result<Option<AdminSession>, AppError>;
    async fn delete(&self, token_hash: &str) -> Result<(), AppError>;
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError>;
}
