use axum::{extract::FromRequestParts, http::request::Parts};
use crate::state::AppState;
use crate::domain::models::session::AdminSession;
use crate::api::extractors::auth::SESSION_COOKIE;
use std::convert::Infallible;
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::debug;

pub struct MaybeAdmin(pub Option<AdminSession>);

impl FromRequestParts<Arc<AppState>> for MaybeAdmin {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let Some(cookies) = parts.extensions.get::<Cookies>() else {
            return Ok(MaybeAdmin(None));
        };

        let Some(token) = cookies.get(SESSION_COOKIE).map(|c| c.value().to_string()) else {
            return Ok(MaybeAdmin(None));
        };

        match state.auth_service.resolve_session(&token).await {
            Ok(session) => Ok(MaybeAdmin(session)),
            Err(e) => {
                // Treat as guest
                debug!("MaybeAdmin: session lookup failed: {}", e);
                Ok(MaybeAdmin(None))
            }
        }
    }
}
