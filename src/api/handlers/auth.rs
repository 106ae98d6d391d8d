use axum::{extract::State, response::IntoResponse, Json, http::StatusCode};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::{
    requests::{ChangePasswordRequest, LoginRequest},
    responses::SessionResponse,
};
use crate::api::extractors::{auth::{AdminAuth, SESSION_COOKIE}, maybe_auth::MaybeAdmin};
use std::sync::Arc;
use tower_cookies::{Cookies, Cookie};
use tower_cookies::cookie::SameSite;
use time::Duration;

pub async fn login(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let token = state.auth_service.sign_in(&payload.password).await?;

    let mut session_c = Cookie::new(SESSION_COOKIE, token);
    session_c.set_http_only(true);
    session_c.set_secure(state.config.cookie_secure);
    session_c.set_same_site(SameSite::Strict);
    session_c.set_path("/");
    session_c.set_max_age(Duration::hours(state.config.session_ttl_hours));
    cookies.add(session_c);

    Ok(Json(SessionResponse { authenticated: true }))
}

pub async fn logout(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    if let Some(cookie) = cookies.get(SESSION_COOKIE) {
        state.auth_service.sign_out(cookie.value()).await?;
    }

    cookies.remove(Cookie::build((SESSION_COOKIE, "")).path("/").into());

    Ok(StatusCode::OK)
}

pub async fn session_status(MaybeAdmin(session): MaybeAdmin) -> impl IntoResponse {
    Json(SessionResponse { authenticated: session.is_some() })
}

pub async fn change_password(
    State(state): State<Arc<AppState>>,
    _admin: AdminAuth,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<impl IntoResponse, AppError> {
    state
        .auth_service
        .change_password(&payload.current_password, &payload.new_password, &payload.confirm_password)
        .await?;

    Ok(Json(serde_json::json!({"status": "updated"})))
}
