//! Upcoming/completed split of a filtered event list.

use std::collections::BTreeSet;
use std::str::FromStr;

use crate::domain::models::event::{Event, RegistrationStatus};

/// `open` while a link exists and `today` has not passed the deadline.
///
/// A deadline without a link is `None`: there is nothing to register through.
pub fn registration_status(event: &Event, today: &str) -> RegistrationStatus {
    if !event.has_registration_link() {
        return RegistrationStatus::None;
    }
    match event.registration_deadline.as_deref().filter(|d| !d.is_empty()) {
        None => RegistrationStatus::Open,
        Some(deadline) if today <= deadline => RegistrationStatus::Open,
        Some(_) => RegistrationStatus::Closed,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum YearSelection {
    #[default]
    All,
    Year(String),
}

impl FromStr for YearSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(YearSelection::All);
        }
        if s.len() == 4 && s.chars().all(|c| c.is_ascii_digit()) {
            return Ok(YearSelection::Year(s.to_string()));
        }
        Err(format!("'{}' is not a year", s))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventBoard {
    pub today: String,
    pub upcoming: Vec<Event>,
    pub completed: Vec<Event>,
}

impl EventBoard {
    pub fn partition(events: &[Event], today: &str) -> Self {
        let (mut upcoming, mut completed): (Vec<Event>, Vec<Event>) = events
            .iter()
            .cloned()
            .partition(|e| e.event_date.as_str() >= today);

        upcoming.sort_by(|a, b| {
            let a_open = registration_status(a, today) == RegistrationStatus::Open;
            let b_open = registration_status(b, today) == RegistrationStatus::Open;
            b_open.cmp(&a_open).then_with(|| a.event_date.cmp(&b.event_date))
        });
        completed.sort_by(|a, b| a.event_date.cmp(&b.event_date));

        Self { today: today.to_string(), upcoming, completed }
    }

    /// Distinct years among completed events, newest first.
    pub fn completed_years(&self) -> Vec<String> {
        let years: BTreeSet<&str> = self.completed.iter().map(Event::year).collect();
        let mut years: Vec<String> = years.into_iter().map(str::to_string).collect();
        years.sort_by_key(|y| std::cmp::Reverse(y.parse::<i64>().unwrap_or(i64::MIN)));
        years
    }

    pub fn completed_in(&self, selection: &YearSelection) -> Vec<&Event> {
        self.completed
            .iter()
            .filter(|e| match selection {
                YearSelection::All => true,
                YearSelection::Year(y) => e.year() == y,
            })
            .collect()
    }

    pub fn status_of(&self, event: &Event) -> RegistrationStatus {
        registration_status(event, &self.today)
    }
}

/// Row the listing scrolls to: the first event on or after `today`, else the last one.
pub fn focus_event<'a>(events: &'a [Event], today: &str) -> Option<&'a Event> {
    events
        .iter()
        .find(|e| e.event_date.as_str() >= today)
        .or_else(|| events.last())
}

/// Six-way alternating band per month (Jan/Jul share a band, and so on).
pub fn month_band(event_date: &str) -> usize {
    event_date
        .get(5..7)
        .and_then(|m| m.parse::<usize>().ok())
        .filter(|m| *m >= 1)
        .map_or(0, |m| (m - 1) % 6)
}
