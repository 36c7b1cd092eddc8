use alumni_directory::directory::RecordSource;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Shared handle to the roster backing every directory request.
pub(crate) type SharedSource = Arc<dyn RecordSource>;

/// Instant graduation dates are compared against. An explicit date counts
/// as the last moment of that day; otherwise the local clock is used.
pub(crate) fn evaluation_instant(today: Option<NaiveDate>) -> NaiveDateTime {
    match today {
        Some(date) => date.and_time(last_second_of_day()),
        None => Local::now().naive_local(),
    }
}

fn last_second_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).unwrap_or_default()
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_yes_no(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" => Ok(true),
        "no" | "false" => Ok(false),
        _ => Err(format!("expected 'yes' or 'no', got '{raw}'")),
    }
}
