use serde::{Deserialize, Serialize};
use crate::domain::models::event::EventFields;

/// One parsed line of a batch import. Never stored as-is.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BatchEventRow {
    pub name: String,
    pub event_date: String,
    pub location: String,
    pub is_domestic: bool,
}

impl From<BatchEventRow> for EventFields {
    fn from(row: BatchEventRow) -> Self {
        Self {
            name: row.name,
            event_date: row.event_date,
            location: row.location,
            is_domestic: row.is_domestic,
            registration_url: None,
            registration_deadline: None,
            name_color: None,
            location_color: None,
        }
    }
}

#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct ImportReport {
    pub succeeded: usize,
    pub failed: usize,
    pub created_ids: Vec<String>,
}
