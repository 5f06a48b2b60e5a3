use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field} must be in YYYY-MM-DD format")]
pub struct InvalidDate {
    pub field: &'static str,
}

/// Parses a strict `YYYY-MM-DD` calendar day. No offsets, no single-digit parts.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(idx, b)| idx == 4 || idx == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Inclusive day range. Missing bounds are open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn is_bounded(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    /// Activity dates that fail to parse are never in range.
    pub fn contains(&self, date: &str) -> bool {
        let Some(date) = parse_date(date) else {
            return false;
        };
        if self.start.is_some_and(|start| date < start) {
            return false;
        }
        if self.end.is_some_and(|end| date > end) {
            return false;
        }
        true
    }
}

/// The bounds a caller supplied, echoed back in report responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DateQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl DateQuery {
    pub fn new(start_date: Option<&str>, end_date: Option<&str>) -> Self {
        Self {
            start_date: start_date.map(str::to_string),
            end_date: end_date.map(str::to_string),
        }
    }

    /// Builds the query from raw key/value pairs. A repeated key keeps every
    /// value joined by commas, which never parses as a date. Other keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "startDate" => &mut query.start_date,
                "endDate" => &mut query.end_date,
                _ => continue,
            };
            if let Some(existing) = slot.as_mut() {
                existing.push(',');
                existing.push_str(&value);
            } else {
                *slot = Some(value);
            }
        }
        query
    }

    /// Validates both bounds, `startDate` first. Empty values count as absent.
    pub fn resolve(&self) -> Result<(DateRange, Option<DateFilter>), InvalidDate> {
        let start_raw = non_empty(&self.start_date);
        let end_raw = non_empty(&self.end_date);

        let start = parse_bound(start_raw, "startDate")?;
        let end = parse_bound(end_raw, "endDate")?;

        let filter = (start_raw.is_some() || end_raw.is_some()).then(|| DateFilter {
            start_date: start_raw.map(str::to_string),
            end_date: end_raw.map(str::to_string),
        });

        Ok((DateRange { start, end }, filter))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|raw| !raw.is_empty())
}

fn parse_bound(raw: Option<&str>, field: &'static str) -> Result<Option<NaiveDate>, InvalidDate> {
    match raw {
        None => Ok(None),
        Some(raw) => parse_date(raw).map(Some).ok_or(InvalidDate { field }),
    }
}
