use serde::{Deserialize, Serialize};
use chrono::{DateTime, Duration, Utc};
use sqlx::FromRow;

/// Server-side record of a signed-in admin. Only the token hash is kept.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct AdminSession {
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn new(token_hash: String, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            token_hash,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
