//! Client-side filter over the loaded working set.
//!
//! This is the local counterpart to the server's `/documents/filter`
//! endpoint. The two classification paths are deliberately kept separate -
//! see [`crate::catalog::Catalog`] for how callers choose between them.

use crate::models::{FilterCriteria, Scholarship};

/// Retain the records matching every criterion.
///
/// A pure subset transform: the input is untouched, the output contains
/// clones of the surviving records in their original order, and running it
/// twice with the same criteria changes nothing.
pub fn apply(records: &[Scholarship], criteria: &FilterCriteria) -> Vec<Scholarship> {
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}

/// Case-insensitive title substring search, for the search box.
pub fn search_by_title(records: &[Scholarship], query: &str) -> Vec<Scholarship> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| record.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, min_gpa: f64, grade: u8, status: &str) -> Scholarship {
        Scholarship {
            title: title.to_string(),
            link: String::new(),
            min_gpa,
            grade,
            status: status.to_string(),
            start_date: None,
            end_date: None,
            deadline_label: "미정".to_string(),
        }
    }

    #[test]
    fn retains_records_within_gpa_reach() {
        let records = vec![
            record("A", 3.0, 2, "재학"),
            record("B", 4.0, 2, "재학"),
        ];
        let criteria = FilterCriteria::new(3.5, 2, "재학");

        let kept = apply(&records, &criteria);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "A");
    }

    #[test]
    fn all_three_criteria_must_match() {
        let records = vec![
            record("gpa too high", 4.2, 2, "재학"),
            record("wrong grade", 3.0, 3, "재학"),
            record("wrong status", 3.0, 2, "휴학"),
            record("eligible", 3.0, 2, "재학"),
        ];
        let criteria = FilterCriteria::new(3.5, 2, "재학");

        let kept = apply(&records, &criteria);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "eligible");
    }

    #[test]
    fn output_is_a_subset_and_input_is_untouched() {
        let records = vec![
            record("A", 3.0, 2, "재학"),
            record("B", 4.0, 1, "휴학"),
        ];
        let criteria = FilterCriteria::new(4.5, 1, "휴학");

        let kept = apply(&records, &criteria);

        assert!(kept.iter().all(|r| records.contains(r)));
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn filtering_is_idempotent() {
        let records = vec![
            record("A", 3.0, 2, "재학"),
            record("B", 3.4, 2, "재학"),
            record("C", 4.0, 2, "재학"),
        ];
        let criteria = FilterCriteria::new(3.5, 2, "재학");

        let once = apply(&records, &criteria);
        let twice = apply(&once, &criteria);

        assert_eq!(once, twice);
    }

    #[test]
    fn gpa_boundary_is_inclusive() {
        let records = vec![record("exact", 3.5, 2, "재학")];
        let criteria = FilterCriteria::new(3.5, 2, "재학");

        assert_eq!(apply(&records, &criteria).len(), 1);
    }

    #[test]
    fn title_search_is_case_insensitive() {
        let records = vec![
            record("National Merit Scholarship", 3.0, 2, "재학"),
            record("성적우수장학금", 3.0, 2, "재학"),
        ];

        assert_eq!(search_by_title(&records, "merit").len(), 1);
        assert_eq!(search_by_title(&records, "장학금").len(), 1);
        assert_eq!(search_by_title(&records, "없는검색어").len(), 0);
    }

    #[test]
    fn blank_search_returns_everything() {
        let records = vec![record("A", 3.0, 2, "재학")];
        assert_eq!(search_by_title(&records, "   ").len(), 1);
    }
}
