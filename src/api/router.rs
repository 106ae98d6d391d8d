use axum::{
    body::Body,
    extract::Request,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, auth, event, batch_import};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tower_cookies::CookieManagerLayer;
use tracing::{error, info, info_span, warn, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/session", get(auth::session_status))
        .route("/api/v1/auth/password", post(auth::change_password))

        // Batch import (admin)
        .route("/api/v1/events/import", post(batch_import::run_import))
        .route("/api/v1/events/import/preview", post(batch_import::preview_import))
        .route("/api/v1/events/import/example", get(batch_import::import_example))

        // Events
        .route("/api/v1/events", get(event::list_events).post(event::create_event))
        .route("/api/v1/events/board", get(event::get_board))
        .route("/api/v1/events/{id}", get(event::get_event).put(event::update_event).delete(event::delete_event))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    info_span!(
                        "http_request",
                        request_id = %Uuid::new_v4(),
                        method = %request.method(),
                        path = %request.uri().path(),
                        admin = tracing::field::Empty,
                    )
                })
                .on_request(())
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    let status = response.status();
                    let latency_ms = latency.as_millis();
                    if status.is_client_error() {
                        warn!(status = status.as_u16(), latency_ms, "request rejected");
                    } else {
                        info!(status = status.as_u16(), latency_ms, "request served");
                    }
                })
                .on_failure(|failure: ServerErrorsFailureClass, latency: Duration, _span: &Span| {
                    error!(latency_ms = latency.as_millis(), "request failed: {}", failure);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
