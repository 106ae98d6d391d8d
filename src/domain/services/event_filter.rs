use crate::domain::models::event::{Event, EventFilters, EventQuery};

pub fn has_active_filters(filters: &EventFilters) -> bool {
    filters.is_domestic.is_some()
        || !filters.from_date.is_empty()
        || !filters.to_date.is_empty()
        || !filters.location.is_empty()
        || !filters.keyword.is_empty()
}

/// Splits the filters between what the store can evaluate and what stays in memory.
///
/// Store-side ordering is only requested when there is no equality constraint.
/// `query` sorts afterwards either way.
pub fn plan_store_query(filters: &EventFilters) -> EventQuery {
    EventQuery {
        is_domestic: filters.is_domestic,
        from_date: non_empty(&filters.from_date),
        to_date: non_empty(&filters.to_date),
        order_by_date: filters.is_domestic.is_none(),
    }
}

pub fn query(events: &[Event], filters: &EventFilters) -> Vec<Event> {
    let location = filters.location.to_lowercase();
    let keyword = filters.keyword.to_lowercase();

    let mut matched: Vec<Event> = events
        .iter()
        .filter(|e| filters.is_domestic.is_none_or(|d| e.is_domestic == d))
        .filter(|e| filters.from_date.is_empty() || e.event_date.as_str() >= filters.from_date.as_str())
        .filter(|e| filters.to_date.is_empty() || e.event_date.as_str() <= filters.to_date.as_str())
        .filter(|e| location.is_empty() || e.location.to_lowercase().contains(&location))
        .filter(|e| keyword.is_empty() || e.name.to_lowercase().contains(&keyword))
        .cloned()
        .collect();

    matched.sort_by(|a, b| a.event_date.cmp(&b.event_date));
    matched
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
