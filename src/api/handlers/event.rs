use axum::{extract::{State, Path, Query}, response::IntoResponse, Json, http::StatusCode};
use crate::state::AppState;
use crate::api::extractors::auth::AdminAuth;
use crate::api::dtos::{
    requests::EventListQuery,
    responses::{BoardEntry, BoardResponse, CompletedSection},
};
use crate::domain::models::event::{Event, EventDraft};
use crate::domain::services::{
    event_filter::has_active_filters,
    event_service::{list_events as load_events, validate_draft},
    partition::{focus_event, month_band, EventBoard, YearSelection},
};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EventListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filters = params.filters()?;
    let events = load_events(state.event_repo.as_ref(), &filters).await?;
    Ok(Json(events))
}

pub async fn get_board(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EventListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filters = params.filters()?;
    let year = params.year()?;
    let today = state.config.today();

    let events = load_events(state.event_repo.as_ref(), &filters).await?;
    let focus_event_id = focus_event(&events, &today).map(|e| e.id.clone());
    let board = EventBoard::partition(&events, &today);

    let entry = |event: &Event| BoardEntry {
        registration_status: board.status_of(event),
        is_past: event.event_date.as_str() < today.as_str(),
        month_band: month_band(&event.event_date),
        event: event.clone(),
    };

    let completed = CompletedSection {
        years: board.completed_years(),
        selected_year: match &year {
            YearSelection::All => "all".to_string(),
            YearSelection::Year(y) => y.clone(),
        },
        events: board.completed_in(&year).into_iter().map(entry).collect(),
    };

    Ok(Json(BoardResponse {
        today: today.clone(),
        has_active_filters: has_active_filters(&filters),
        focus_event_id,
        upcoming: board.upcoming.iter().map(entry).collect(),
        completed,
    }))
}

pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&id).await?
        .ok_or_else(|| AppError::NotFound(format!("Event '{}' not found", id)))?;
    Ok(Json(event))
}

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    _admin: AdminAuth,
    Json(payload): Json<EventDraft>,
) -> Result<impl IntoResponse, AppError> {
    let fields = validate_draft(payload)?;
    let created = state.event_repo.create(&fields).await?;
    info!("Event created: {} ({})", created.id, created.event_date);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_event(
    State(state): State<Arc<AppState>>,
    _admin: AdminAuth,
    Path(id): Path<String>,
    Json(payload): Json<EventDraft>,
) -> Result<impl IntoResponse, AppError> {
    let fields = validate_draft(payload)?;
    let updated = state.event_repo.update(&id, &fields).await?;
    info!("Event updated: {}", id);
    Ok(Json(updated))
}

pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    _admin: AdminAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.event_repo.delete(&id).await?;
    info!("Event deleted: {}", id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
