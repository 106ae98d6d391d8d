use axum::{extract::FromRequestParts, http::request::Parts};
use crate::state::AppState;
use crate::domain::models::session::AdminSession;
use crate::error::AppError;
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::{Span, error};

pub const SESSION_COOKIE: &str = "admin_session";

/// A request made by the signed-in admin. Rejects with 401 otherwise.
pub struct AdminAuth(pub AdminSession);

impl FromRequestParts<Arc<AppState>> for AdminAuth {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let cookies = parts.extensions.get::<Cookies>().ok_or_else(|| {
            error!("CookieManagerLayer missing from router");
            AppError::Internal
        })?;

        let token = cookies
            .get(SESSION_COOKIE)
            .ok_or(AppError::Unauthorized)?
            .value()
            .to_string();

        let session = state
            .auth_service
            .resolve_session(&token)
            .await?
            .ok_or(AppError::Unauthorized)?;

        Span::current().record("admin", true);
        Ok(AdminAuth(session))
    }
}
