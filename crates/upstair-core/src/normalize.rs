//! Turning wire records into display-ready ones.
//!
//! The listing endpoint emits whatever its table holds, nulls and all, so
//! every gap gets a defined fallback here instead of leaking into the UI.

use upstair_api::{FilteredScholarship, RawScholarship};

use crate::models::{FilteredRecord, Scholarship};
use crate::status::parse_date;

/// Shown when a record arrives without a title.
pub const FALLBACK_TITLE: &str = "제목 없음";

/// Deadline text for records without an end date. Deliberately not a date,
/// so it cannot be mistaken for one.
pub const DEADLINE_UNSET: &str = "미정";

/// Normalize one raw record for display.
///
/// Missing title and link get their fallbacks, date strings are parsed
/// leniently, and the deadline label keeps the server's raw end-date text -
/// a student should see what the server said even when it did not parse.
pub fn normalize(raw: RawScholarship) -> Scholarship {
    let deadline_label = match raw.end_date.as_deref() {
        Some(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => DEADLINE_UNSET.to_string(),
    };

    Scholarship {
        title: raw.title.unwrap_or_else(|| FALLBACK_TITLE.to_string()),
        link: raw.link.unwrap_or_default(),
        min_gpa: raw.gpa.unwrap_or(0.0),
        grade: raw.grade.unwrap_or(0),
        status: raw.status.unwrap_or_default(),
        start_date: parse_date(raw.start_date.as_deref()),
        end_date: parse_date(raw.end_date.as_deref()),
        deadline_label,
    }
}

/// Normalize one row of the server-filtered listing.
pub fn normalize_filtered(raw: FilteredScholarship) -> FilteredRecord {
    FilteredRecord {
        title: raw.title.unwrap_or_else(|| FALLBACK_TITLE.to_string()),
        link: raw.link.unwrap_or_default(),
    }
}

/// Order records by deadline, soonest first; records without an end date
/// sink to the bottom of the list.
pub fn sort_by_deadline(records: &mut [Scholarship]) {
    records.sort_by(|a, b| match (a.end_date, b.end_date) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn raw(title: Option<&str>, end_date: Option<&str>) -> RawScholarship {
        RawScholarship {
            title: title.map(String::from),
            link: None,
            start_date: None,
            end_date: end_date.map(String::from),
            status: None,
            grade: None,
            gpa: None,
        }
    }

    #[test]
    fn fills_placeholders_for_missing_fields() {
        let record = normalize(raw(None, None));

        assert_eq!(record.title, FALLBACK_TITLE);
        assert_eq!(record.link, "");
        assert_eq!(record.deadline_label, DEADLINE_UNSET);
        assert_eq!(record.min_gpa, 0.0);
    }

    #[test]
    fn keeps_real_values() {
        let record = normalize(RawScholarship {
            title: Some("국가우수장학금".to_string()),
            link: Some("https://example.com".to_string()),
            start_date: Some("2024-03-01".to_string()),
            end_date: Some("2024-03-15".to_string()),
            status: Some("재학".to_string()),
            grade: Some(2),
            gpa: Some(3.5),
        });

        assert_eq!(record.title, "국가우수장학금");
        assert_eq!(
            record.end_date,
            Some(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
        );
        assert_eq!(record.deadline_label, "2024-03-15");
    }

    #[test]
    fn unparseable_deadline_keeps_its_raw_text() {
        let record = normalize(raw(Some("A"), Some("3월 중순")));

        // The date is unusable for status math but the label still shows
        // what the server sent
        assert_eq!(record.end_date, None);
        assert_eq!(record.deadline_label, "3월 중순");
    }

    #[test]
    fn blank_deadline_counts_as_unset() {
        let record = normalize(raw(Some("A"), Some("   ")));
        assert_eq!(record.deadline_label, DEADLINE_UNSET);
    }

    #[test]
    fn sorts_by_deadline_with_dateless_records_last() {
        let mut records = vec![
            normalize(raw(Some("no deadline"), None)),
            normalize(raw(Some("late"), Some("2024-04-01"))),
            normalize(raw(Some("soon"), Some("2024-03-15"))),
        ];

        sort_by_deadline(&mut records);

        let titles: Vec<_> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["soon", "late", "no deadline"]);
    }

    #[test]
    fn filtered_rows_get_the_same_fallbacks() {
        let record = normalize_filtered(FilteredScholarship {
            title: None,
            link: None,
        });

        assert_eq!(record.title, FALLBACK_TITLE);
        assert_eq!(record.link, "");
    }
}
