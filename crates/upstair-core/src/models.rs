use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::status::derive_status;

/// A scholarship listing after normalization - the star of the show.
///
/// Built fresh from the wire on every fetch; a new fetch replaces the whole
/// working set, nothing is updated in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scholarship {
    pub title: String,
    /// External application URL; empty means "no action" for the caller.
    pub link: String,
    /// GPA the scholarship requires, on the 0.0-4.5 scale.
    pub min_gpa: f64,
    /// Academic year the scholarship targets (1-4).
    pub grade: u8,
    /// Enrollment tag exactly as the server stores it (재학/휴학). This is
    /// the server's own classification field, matched verbatim by the
    /// filter - not to be confused with the locally derived [`DerivedStatus`].
    pub status: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Deadline text for display. Carries the server's raw end-date string
    /// even when it failed to parse; 미정 when the server had none.
    pub deadline_label: String,
}

impl Scholarship {
    /// Recruitment status as of `today`.
    ///
    /// Recomputed on every call from the record's dates - never stored, so a
    /// listing loaded yesterday cannot show yesterday's answer.
    pub fn status_on(&self, today: NaiveDate) -> DerivedStatus {
        derive_status(self.start_date, self.end_date, today)
    }
}

/// Client-computed recruitment status of a listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DerivedStatus {
    Upcoming,
    Open,
    Closed,
}

impl DerivedStatus {
    /// Display label, as the service shows it to students.
    pub fn label(&self) -> &'static str {
        match self {
            DerivedStatus::Upcoming => "모집전",
            DerivedStatus::Open => "모집중",
            DerivedStatus::Closed => "모집완료",
        }
    }
}

impl std::fmt::Display for DerivedStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Criteria for the three-way scholarship filter.
///
/// The API contract requires all three together; none is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// The user's own GPA; a record is eligible when its requirement is at
    /// most this value.
    pub min_gpa: f64,
    /// Academic year to match exactly (1-4).
    pub grade: u8,
    /// Enrollment tag to match verbatim (재학/휴학).
    pub status: String,
}

impl FilterCriteria {
    pub fn new(min_gpa: f64, grade: u8, status: impl Into<String>) -> Self {
        Self {
            min_gpa,
            grade,
            status: status.into(),
        }
    }

    /// Whether a record satisfies every criterion.
    pub fn matches(&self, record: &Scholarship) -> bool {
        record.min_gpa <= self.min_gpa && record.grade == self.grade && record.status == self.status
    }
}

/// A row from the server-side filtered listing, which strips everything
/// down to title and link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilteredRecord {
    pub title: String,
    pub link: String,
}
