use tracing::debug;

use crate::domain::models::event::{Event, EventDraft, EventFields, EventFilters};
use crate::domain::ports::EventRepository;
use crate::domain::services::{date_normalizer, event_filter};
use crate::error::AppError;

/// Store round trip followed by the in-memory filter pass.
pub async fn list_events(repo: &dyn EventRepository, filters: &EventFilters) -> Result<Vec<Event>, AppError> {
    let plan = event_filter::plan_store_query(filters);
    debug!(?plan, "Listing events");
    let snapshot = repo.list(&plan).await?;
    Ok(event_filter::query(&snapshot, filters))
}

/// Validates admin form input into storable fields.
pub fn validate_draft(draft: EventDraft) -> Result<EventFields, AppError> {
    let name = draft.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::validation("name", "Event name is required"));
    }

    let event_date = date_normalizer::canonical(&draft.event_date)
        .ok_or_else(|| AppError::validation("event_date", "Event date must be YYYY-MM-DD"))?;

    let location = draft.location.trim().to_string();
    if location.is_empty() {
        return Err(AppError::validation("location", "Location is required"));
    }

    let registration_deadline = match blank_to_none(draft.registration_deadline) {
        Some(raw) => Some(
            date_normalizer::canonical(&raw)
                .ok_or_else(|| AppError::validation("registration_deadline", "Deadline must be YYYY-MM-DD"))?,
        ),
        None => None,
    };

    Ok(EventFields {
        name,
        event_date,
        location,
        is_domestic: draft.is_domestic.unwrap_or(true),
        registration_url: blank_to_none(draft.registration_url),
        registration_deadline,
        name_color: blank_to_none(draft.name_color),
        location_color: blank_to_none(draft.location_color),
    })
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
