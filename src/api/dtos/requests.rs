use serde::Deserialize;

use crate::domain::models::event::EventFilters;
use crate::domain::services::partition::YearSelection;
use crate::error::AppError;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Deserialize)]
pub struct BatchImportRequest {
    pub text: String,
}

/// Listing filters as they arrive on the query string.
///
/// `is_domestic` accepts `true`/`false`, `domestic`/`international`, or
/// blank/`all` for either.
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct EventListQuery {
    pub is_domestic: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub location: Option<String>,
    pub keyword: Option<String>,
    pub year: Option<String>,
}

impl EventListQuery {
    pub fn filters(&self) -> Result<EventFilters, AppError> {
        let is_domestic = match self.is_domestic.as_deref().map(str::trim) {
            None | Some("") | Some("all") => None,
            Some("true") | Some("domestic") => Some(true),
            Some("false") | Some("international") => Some(false),
            Some(_) => return Err(AppError::validation("is_domestic", "Expected true, false or all")),
        };

        let text = |v: &Option<String>| v.as_deref().map(str::trim).unwrap_or_default().to_string();

        Ok(EventFilters {
            is_domestic,
            from_date: text(&self.from_date),
            to_date: text(&self.to_date),
            location: text(&self.location),
            keyword: text(&self.keyword),
        })
    }

    pub fn year(&self) -> Result<YearSelection, AppError> {
        self.year
            .as_deref()
            .unwrap_or_default()
            .parse()
            .map_err(|msg: String| AppError::validation("year", msg))
    }
}
