use serde::Serialize;

use crate::domain::models::batch::BatchEventRow;
use crate::domain::models::event::{Event, RegistrationStatus};

#[derive(Serialize)]
pub struct BoardEntry {
    #[serde(flatten)]
    pub event: Event,
    pub registration_status: RegistrationStatus,
    pub is_past: bool,
    pub month_band: usize,
}

#[derive(Serialize)]
pub struct CompletedSection {
    pub years: Vec<String>,
    pub selected_year: String,
    pub events: Vec<BoardEntry>,
}

#[derive(Serialize)]
pub struct BoardResponse {
    pub today: String,
    pub has_active_filters: bool,
    pub focus_event_id: Option<String>,
    pub upcoming: Vec<BoardEntry>,
    pub completed: CompletedSection,
}

#[derive(Serialize)]
pub struct ImportPreviewResponse {
    pub total: usize,
    pub rows: Vec<BatchEventRow>,
    pub remaining: usize,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
}
