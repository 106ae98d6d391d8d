use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AdminAuth;
use crate::api::dtos::{requests::BatchImportRequest, responses::ImportPreviewResponse};
use crate::domain::services::batch_import::{import_rows, parse_on, BATCH_IMPORT_EXAMPLE, PREVIEW_LIMIT};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn preview_import(
    State(state): State<Arc<AppState>>,
    _admin: AdminAuth,
    Json(payload): Json<BatchImportRequest>,
) -> Result<impl IntoResponse, AppError> {
    let rows = parse_on(&payload.text, &state.config.today());
    let total = rows.len();

    Ok(Json(ImportPreviewResponse {
        total,
        remaining: total.saturating_sub(PREVIEW_LIMIT),
        rows: rows.into_iter().take(PREVIEW_LIMIT).collect(),
    }))
}

pub async fn run_import(
    State(state): State<Arc<AppState>>,
    _admin: AdminAuth,
    Json(payload): Json<BatchImportRequest>,
) -> Result<impl IntoResponse, AppError> {
    let rows = parse_on(&payload.text, &state.config.today());
    if rows.is_empty() {
        return Err(AppError::validation("text", "No importable rows found"));
    }

    info!("Importing {} event rows", rows.len());
    let report = import_rows(state.event_repo.clone(), rows).await;
    Ok(Json(report))
}

pub async fn import_example() -> impl IntoResponse {
    Json(serde_json::json!({ "example": BATCH_IMPORT_EXAMPLE }))
}
