//! Recruitment-status derivation.
//!
//! The whole engine is one pure function over calendar dates. The caller
//! supplies `today` rather than this module reading the clock, which keeps
//! every evaluation reproducible in tests.

use chrono::NaiveDate;
use tracing::warn;

use crate::models::DerivedStatus;

/// Parse an ISO `YYYY-MM-DD` date from the wire.
///
/// Absent, blank, or malformed input yields `None`. Bad dates are a data
/// problem on the server side; the client logs them and carries on rather
/// than failing a whole listing over one row.
pub fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }

    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            warn!("Invalid date on record: {:?}", trimmed);
            None
        }
    }
}

/// Derive a recruitment status from a date window.
///
/// A missing start bound means the window opened in the indefinite past
/// (such a record can never be 모집전); a missing end bound means it never
/// closes (never 모집완료 on that basis alone). Both boundary days count as
/// open: applications close at the end of the deadline day, not before it.
pub fn derive_status(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> DerivedStatus {
    if let Some(start) = start {
        if today < start {
            return DerivedStatus::Upcoming;
        }
    }

    if let Some(end) = end {
        if today > end {
            return DerivedStatus::Closed;
        }
    }

    DerivedStatus::Open
}
