//! Bulk event entry from text pasted out of a spreadsheet.
//!
//! Each line carries five cells: foreign flag, date, name, country, city.
//! Cells are tab separated, with commas accepted when a line has too few
//! tabs. Malformed lines degrade to placeholder values instead of failing
//! the whole paste.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::models::batch::{BatchEventRow, ImportReport};
use crate::domain::models::event::EventFields;
use crate::domain::ports::EventRepository;
use crate::domain::services::date_normalizer;

pub const COLUMN_COUNT: usize = 5;

/// Column labels of the spreadsheet the site admins copy from.
pub const HEADER_MARKERS: [&str; 5] = ["國外賽事", "比賽日期", "賽事名稱", "比賽國家", "比賽城市"];

pub const LOCATION_PLACEHOLDER: &str = "—";

pub const PREVIEW_LIMIT: usize = 10;

pub const BATCH_IMPORT_EXAMPLE: &str = "國外賽事\t比賽日期\t賽事名稱\t比賽國家\t比賽城市\n\
X\t2026/12/19\tBIXBI CUP (暫定)\t台灣\t\n\
O\t2026/12/12-13\t2026 光速盃 R6\t台灣";

/// Parses with today's date (UTC) as the fallback for rows without a date.
pub fn parse(text: &str) -> Vec<BatchEventRow> {
    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
    parse_on(text, &today)
}

/// Same as [`parse`] with the fallback date supplied by the caller.
pub fn parse_on(text: &str, today: &str) -> Vec<BatchEventRow> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let Some(first) = lines.first() else {
        return Vec::new();
    };

    let start = if is_header(&split_cells(first)) { 1 } else { 0 };

    lines[start..]
        .iter()
        .filter_map(|line| parse_row(&split_cells(line), today))
        .collect()
}

fn split_cells(line: &str) -> Vec<String> {
    let by_tab: Vec<String> = line.split('\t').map(|c| c.trim().to_string()).collect();
    if by_tab.len() >= COLUMN_COUNT {
        return by_tab;
    }

    let by_comma: Vec<String> = line.split(',').map(|c| c.trim().to_string()).collect();
    if by_comma.len() >= COLUMN_COUNT {
        return by_comma;
    }

    by_tab
}

fn is_header(cells: &[String]) -> bool {
    let leading: Vec<&String> = cells.iter().take(2).collect();
    HEADER_MARKERS
        .iter()
        .any(|marker| leading.iter().any(|cell| cell.contains(marker)))
}

fn parse_row(cells: &[String], today: &str) -> Option<BatchEventRow> {
    let cell = |i: usize| cells.get(i).map(String::as_str).unwrap_or("");

    let name = cell(2).trim();
    if name.is_empty() {
        return None;
    }

    let is_domestic = cell(0).trim().to_uppercase() != "O";

    let event_date = match date_normalizer::normalize(cell(1)) {
        d if d.is_empty() => today.to_string(),
        d => d,
    };

    let location = [cell(3), cell(4)]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string();

    Some(BatchEventRow {
        name: name.to_string(),
        event_date,
        location: if location.is_empty() { LOCATION_PLACEHOLDER.to_string() } else { location },
        is_domestic,
    })
}

/// Creates the rows one by one, in order. A failed row is counted and skipped.
///
/// Rows whose date is not a real `YYYY-MM-DD` day never reach the store.
pub async fn import_rows(repo: Arc<dyn EventRepository>, rows: Vec<BatchEventRow>) -> ImportReport {
    let mut report = ImportReport::default();

    for (index, row) in rows.into_iter().enumerate() {
        let Some(event_date) = date_normalizer::canonical(&row.event_date) else {
            warn!(row = index, name = %row.name, date = %row.event_date, "Batch row has no usable date");
            report.failed += 1;
            continue;
        };
        let fields = EventFields { event_date, ..EventFields::from(row) };
        match repo.create(&fields).await {
            Ok(event) => {
                report.succeeded += 1;
                report.created_ids.push(event.id);
            }
            Err(e) => {
                warn!(row = index, name = %fields.name, "Batch row failed: {}", e);
                report.failed += 1;
            }
        }
    }

    info!(succeeded = report.succeeded, failed = report.failed, "Batch import finished");
    report
}
