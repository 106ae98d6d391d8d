use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub event_date: String,
    pub location: String,
    pub is_domestic: bool,
    pub registration_url: Option<String>,
    pub registration_deadline: Option<String>,
    pub name_color: Option<String>,
    pub location_color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    pub fn has_registration_link(&self) -> bool {
        self.registration_url.as_deref().is_some_and(|u| !u.trim().is_empty())
    }

    /// Four-digit year prefix of the canonical event date.
    pub fn year(&self) -> &str {
        self.event_date.get(..4).unwrap_or(&self.event_date)
    }
}

/// Writable part of an event. The store owns `id` and the timestamps.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EventFields {
    pub name: String,
    pub event_date: String,
    pub location: String,
    pub is_domestic: bool,
    pub registration_url: Option<String>,
    pub registration_deadline: Option<String>,
    pub name_color: Option<String>,
    pub location_color: Option<String>,
}

/// Query intent coming from the listing page.
///
/// Empty strings count as "not set" so that a form posting blank inputs
/// behaves like the reset state.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct EventFilters {
    pub is_domestic: Option<bool>,
    pub from_date: String,
    pub to_date: String,
    pub location: String,
    pub keyword: String,
}

/// Constraints handed to the store. Produced by the filter engine's planner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventQuery {
    pub is_domestic: Option<bool>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub order_by_date: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Open,
    Closed,
    None,
}

/// Admin form input before validation. Blank optional fields mean "unset".
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct EventDraft {
    pub name: String,
    pub event_date: String,
    pub location: String,
    pub is_domestic: Option<bool>,
    pub registration_url: Option<String>,
    pub registration_deadline: Option<String>,
    pub name_color: Option<String>,
    pub location_color: Option<String>,
}
