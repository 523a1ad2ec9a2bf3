//! The deadline-alert feed behind the bell icon.
//!
//! The service has no push channel; alerts are derived on the client from
//! whatever working set is loaded, the same way the badge count is.

use chrono::NaiveDate;

use crate::models::{DerivedStatus, Scholarship};

/// One entry in the notification list.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub deadline: NaiveDate,
    /// Whole days until the deadline; 0 means it closes today.
    pub days_left: i64,
}

/// Build the alert feed: open scholarships closing within `window_days`.
///
/// Pure over its inputs - `today` is the caller's clock. Entries come back
/// soonest-deadline first. Records that are upcoming, already closed, or
/// dateless never alert.
pub fn deadline_alerts(
    records: &[Scholarship],
    today: NaiveDate,
    window_days: i64,
) -> Vec<Notification> {
    let mut alerts: Vec<Notification> = records
        .iter()
        .filter(|record| record.status_on(today) == DerivedStatus::Open)
        .filter_map(|record| {
            let deadline = record.end_date?;
            let days_left = (deadline - today).num_days();
            (days_left <= window_days).then(|| Notification {
                title: record.title.clone(),
                deadline,
                days_left,
            })
        })
        .collect();

    alerts.sort_by_key(|alert| alert.days_left);
    alerts
}
