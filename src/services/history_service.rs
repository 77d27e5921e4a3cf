use crate::config::QueryDefaults;
use crate::error::{AppError, AppResult};
use crate::models::{DATETIME_FORMAT, DATE_FORMAT};
use crate::pricing;
use crate::repositories::ObservationRepository;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Which side of the range a date-only parameter belongs to.
enum RangeBound {
    Start,
    End,
}

/// One point of a product's price history.
#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    pub date: String,
    pub place: String,
    pub price_per_unit: f64,
}

/// Service for windowed price history queries
pub struct HistoryService {
    repo: Arc<ObservationRepository>,
    defaults: QueryDefaults,
}

impl HistoryService {
    pub fn new(repo: Arc<ObservationRepository>, defaults: QueryDefaults) -> Self {
        Self { repo, defaults }
    }

    /// Fetch a product's observations within a date range, oldest first
    ///
    /// Bounds accept `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD`; both are
    /// inclusive. The range defaults to the configured window ending
    /// at "now". An empty result is a `NotFound`, not an empty
    /// success, so callers can branch on data presence.
    pub async fn history(
        &self,
        name: &str,
        start: Option<&str>,
        end: Option<&str>,
    ) -> AppResult<Vec<HistoryEntry>> {
        let now = Utc::now().naive_utc();

        let start = match start {
            Some(raw) => parse_bound(raw, RangeBound::Start)?,
            None => now - Duration::days(self.defaults.history_window_days),
        };
        let end = match end {
            Some(raw) => parse_bound(raw, RangeBound::End)?,
            None => now,
        };

        if end < start {
            return Err(AppError::InvalidObservation(format!(
                "end date {end} precedes start date {start}"
            )));
        }

        let observations = self.repo.find_by_name_in_range(name, start, end).await?;
        if observations.is_empty() {
            return Err(AppError::NotFound(format!(
                "no price history for '{name}' in the requested range"
            )));
        }

        observations
            .iter()
            .map(|obs| {
                Ok(HistoryEntry {
                    date: obs.recorded_at.format(DATETIME_FORMAT).to_string(),
                    place: obs.place.clone(),
                    price_per_unit: pricing::unit_price(obs.total_price, obs.units)?,
                })
            })
            .collect()
    }
}

/// Parse a range parameter, widening date-only values to keep the
/// bound inclusive: a start date begins at midnight, an end date runs
/// to the last second of that day.
fn parse_bound(raw: &str, bound: RangeBound) -> AppResult<NaiveDateTime> {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT) {
        return Ok(datetime);
    }

    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
        AppError::InvalidObservation(format!(
            "invalid date '{raw}', expected YYYY-MM-DD or YYYY-MM-DD HH:MM:SS"
        ))
    })?;

    Ok(match bound {
        RangeBound::Start => date.and_time(NaiveTime::MIN),
        RangeBound::End => {
            date.and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_datetime() {
        let parsed = parse_bound("2024-01-15 08:30:00", RangeBound::Start).unwrap();
        assert_eq!(parsed.format(DATETIME_FORMAT).to_string(), "2024-01-15 08:30:00");
    }

    #[test]
    fn test_date_only_start_is_midnight() {
        let parsed = parse_bound("2024-01-15", RangeBound::Start).unwrap();
        assert_eq!(parsed.format(DATETIME_FORMAT).to_string(), "2024-01-15 00:00:00");
    }

    #[test]
    fn test_date_only_end_covers_whole_day() {
        let parsed = parse_bound("2024-01-15", RangeBound::End).unwrap();
        assert_eq!(parsed.format(DATETIME_FORMAT).to_string(), "2024-01-15 23:59:59");
    }

    #[test]
    fn test_garbage_date_rejected() {
        let err = parse_bound("not-a-date", RangeBound::Start).unwrap_err();
        assert!(err.is_invalid_observation());
    }
}
