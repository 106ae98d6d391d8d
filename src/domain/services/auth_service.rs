use std::sync::Arc;
use crate::domain::{
    models::session::AdminSession,
    ports::{AdminConfigRepository, AdminSessionRepository},
};
use crate::domain::services::retry::RetryPolicy;
use crate::error::AppError;
use argon2::{password_hash::SaltString, Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use chrono::{Duration, Utc};
use rand::{distributions::Alphanumeric, Rng};
use sha2::{Sha256, Digest};
use tracing::{debug, info, warn};

pub const MIN_PASSWORD_LEN: usize = 4;

/// Shared-password gate for the single admin account.
pub struct AuthService {
    config_repo: Arc<dyn AdminConfigRepository>,
    session_repo: Arc<dyn AdminSessionRepository>,
    default_password: String,
    session_ttl: Duration,
    retry: RetryPolicy,
}

impl AuthService {
    pub fn new(
        config_repo: Arc<dyn AdminConfigRepository>,
        session_repo: Arc<dyn AdminSessionRepository>,
        default_password: String,
        session_ttl: Duration,
    ) -> Self {
        Self {
            config_repo,
            session_repo,
            default_password,
            session_ttl,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Checks the password and opens a session. Returns the raw cookie token.
    pub async fn sign_in(&self, password: &str) -> Result<String, AppError> {
        if password.is_empty() {
            return Err(AppError::validation("password", "Password is required"));
        }
        self.verify_password(password, "password").await?;

        let token: String = rand::thread_rng().sample_iter(&Alphanumeric).take(48).map(char::from).collect();
        let session = AdminSession::new(self.hash_token(&token), self.session_ttl);
        self.session_repo.create(&session).await?;

        match self.session_repo.delete_expired(Utc::now()).await {
            Ok(0) => {}
            Ok(swept) => debug!(swept, "Removed expired admin sessions"),
            Err(e) => warn!("Expired session sweep failed: {}", e),
        }

        info!("Admin signed in");
        Ok(token)
    }

    pub async fn sign_out(&self, token: &str) -> Result<(), AppError> {
        self.session_repo.delete(&self.hash_token(token)).await?;
        info!("Admin signed out");
        Ok(())
    }

    /// Looks up a live session for the cookie token. Expired sessions are removed.
    pub async fn resolve_session(&self, token: &str) -> Result<Option<AdminSession>, AppError> {
        let token_hash = self.hash_token(token);
        let Some(session) = self.session_repo.find(&token_hash).await? else {
            return Ok(None);
        };

        if session.is_expired(Utc::now()) {
            debug!("Dropping expired admin session");
            self.session_repo.delete(&token_hash).await?;
            return Ok(None);
        }
        Ok(Some(session))
    }

    pub async fn change_password(&self, current: &str, new: &str, confirm: &str) -> Result<(), AppError> {
        if current.is_empty() {
            return Err(AppError::validation("current_password", "Current password is required"));
        }
        if new.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::validation(
                "new_password",
                format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
            ));
        }
        if new != confirm {
            return Err(AppError::validation("confirm_password", "Confirmation does not match the new password"));
        }

        self.verify_password(current, "current_password").await?;

        let salt = SaltString::generate(&mut rand::thread_rng());
        let hash = Argon2::default()
            .hash_password(new.as_bytes(), &salt)
            .map_err(|_| AppError::Internal)?
            .to_string();

        self.config_repo.set_password_hash(&hash).await?;
        info!("Admin password changed");
        Ok(())
    }

    async fn verify_password(&self, candidate: &str, field: &'static str) -> Result<(), AppError> {
        let repo = self.config_repo.clone();
        let stored = self
            .retry
            .run("admin password read", || {
                let repo = repo.clone();
                async move { repo.get_password_hash().await }
            })
            .await?;

        let matches = match stored {
            Some(hash) => {
                let parsed = PasswordHash::new(&hash).map_err(|_| AppError::Internal)?;
                Argon2::default().verify_password(candidate.as_bytes(), &parsed).is_ok()
            }
            None => candidate == self.default_password,
        };

        if matches { Ok(()) } else { Err(AppError::InvalidPassword { field }) }
    }

    pub fn hash_token(&self, token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Default)]
    struct MemoryConfig {
        hash: Mutex<Option<String>>,
        offline_reads: AtomicU32,
    }

    #[async_trait]
    impl AdminConfigRepository for MemoryConfig {
        async fn get_password_hash(&self) -> Result<Option<String>, AppError> {
            if self.offline_reads.load(Ordering::SeqCst) > 0 {
                self.offline_reads.fetch_sub(1, Ordering::SeqCst);
                return Err(AppError::Unavailable("client is offline".into()));
            }
            Ok(self.hash.lock().unwrap().clone())
        }

        async fn set_password_hash(&self, hash: &str) -> Result<(), AppError> {
            *self.hash.lock().unwrap() = Some(hash.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemorySessions {
        sessions: Mutex<Vec<AdminSession>>,
        sweep_fails: bool,
    }

    #[async_trait]
    impl AdminSessionRepository for MemorySessions {
        async fn create(&self, session: &AdminSession) -> Result<(), AppError> {
            self.sessions.lock().unwrap().push(session.clone());
            Ok(())
        }

        async fn find(&self, token_hash: &str) -> Result<Option<AdminSession>, AppError> {
            Ok(self.sessions.lock().unwrap().iter().find(|s| s.token_hash == token_hash).cloned())
        }

        async fn delete(&self, token_hash: &str) -> Result<(), AppError> {
            self.sessions.lock().unwrap().retain(|s| s.token_hash != token_hash);
            Ok(())
        }

        async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
            if self.sweep_fails {
                return Err(AppError::Unavailable("database is locked".into()));
            }
            let mut sessions = self.sessions.lock().unwrap();
            let before = sessions.len();
            sessions.retain(|s| !s.is_expired(now));
            Ok((before - sessions.len()) as u64)
        }
    }

    fn service(config: Arc<MemoryConfig>, ttl: Duration) -> AuthService {
        AuthService::new(config, Arc::new(MemorySessions::default()), "0000".to_string(), ttl)
            .with_retry(RetryPolicy {
                max_attempts: 3,
                delay: std::time::Duration::from_millis(1),
                attempt_timeout: std::time::Duration::from_secs(1),
            })
    }

    #[tokio::test]
    async fn test_default_password_when_unset() {
        let auth = service(Arc::new(MemoryConfig::default()), Duration::hours(1));

        let token = auth.sign_in("0000").await.unwrap();
        assert!(auth.resolve_session(&token).await.unwrap().is_some());

        let err = auth.sign_in("1234").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidPassword { field: "password" }));
    }

    #[tokio::test]
    async fn test_failed_sweep_does_not_block_sign_in() {
        let sessions = Arc::new(MemorySessions { sweep_fails: true, ..Default::default() });
        let auth = AuthService::new(
            Arc::new(MemoryConfig::default()),
            sessions.clone(),
            "0000".to_string(),
            Duration::hours(1),
        );

        let token = auth.sign_in("0000").await.unwrap();
        assert!(auth.resolve_session(&token).await.unwrap().is_some());
        assert_eq!(sessions.sessions.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_sign_out_ends_session() {
        let auth = service(Arc::new(MemoryConfig::default()), Duration::hours(1));
        let token = auth.sign_in("0000").await.unwrap();

        auth.sign_out(&token).await.unwrap();
        assert!(auth.resolve_session(&token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_expired_session_is_rejected() {
        let auth = service(Arc::new(MemoryConfig::default()), Duration::seconds(-1));
        let token = auth.sign_in("0000").await.unwrap();
        assert!(auth.resolve_session(&token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_change_password_flow() {
        let config = Arc::new(MemoryConfig::default());
        let auth = service(config.clone(), Duration::hours(1));

        let err = auth.change_password("0000", "abc", "abc").await.unwrap_err();
        assert!(matches!(err, AppError::Validation { field: "new_password", .. }));

        let err = auth.change_password("0000", "abcd", "abce").await.unwrap_err();
        assert!(matches!(err, AppError::Validation { field: "confirm_password", .. }));

        let err = auth.change_password("9999", "abcd", "abcd").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidPassword { field: "current_password" }));

        auth.change_password("0000", "abcd", "abcd").await.unwrap();
        let stored = config.hash.lock().unwrap().clone().unwrap();
        assert!(stored.starts_with("$argon2"));

        assert!(auth.sign_in("0000").await.is_err());
        assert!(auth.sign_in("abcd").await.is_ok());
    }

    #[tokio::test]
    async fn test_offline_store_is_retried() {
        let config = Arc::new(MemoryConfig::default());
        config.offline_reads.store(2, Ordering::SeqCst);
        let auth = service(config.clone(), Duration::hours(1));

        assert!(auth.sign_in("0000").await.is_ok());

        config.offline_reads.store(5, Ordering::SeqCst);
        let err = auth.sign_in("0000").await.unwrap_err();
        assert!(matches!(err, AppError::Unavailable(_)));
    }
}
