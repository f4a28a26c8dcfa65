// BayLog - core/filter.rs
//
// Search filtering and date grouping for the single-bay view.
// A record matches when ANY searchable field contains the query.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::WashRecord;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Case-insensitive substring query over plate, brand, colour, wash type,
/// ISO date and operators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Build a query from raw user input. Only case is folded; whitespace
    /// is part of the needle.
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
        }
    }

    /// Returns true if the query matches everything.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Check whether a record matches (OR across fields).
    pub fn matches(&self, record: &WashRecord) -> bool {
        if self.is_empty() {
            return true;
        }

        let date = record.date_string();
        [
            record.plate.as_str(),
            record.brand.as_str(),
            record.color.as_str(),
            record.wash_type.as_str(),
            date.as_str(),
            record.operators.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// All visible records of one service day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup<'a> {
    pub date: NaiveDate,
    /// Records in insertion order.
    pub records: Vec<&'a WashRecord>,
}

impl DayGroup<'_> {
    /// Heading for the group, e.g. "2025-06-02".
    pub fn label(&self) -> String {
        self.date
            .format(crate::util::constants::DATE_FORMAT)
            .to_string()
    }
}

/// Group records by service date, most recent day first.
///
/// Record order inside each group follows the input order.
pub fn group_by_date<'a, I>(records: I) -> Vec<DayGroup<'a>>
where
    I: IntoIterator<Item = &'a WashRecord>,
{
    let mut by_day: BTreeMap<NaiveDate, Vec<&'a WashRecord>> = BTreeMap::new();
    for record in records {
        by_day.entry(record.date).or_default().push(record);
    }

    by_day
        .into_iter()
        .rev()
        .map(|(date, records)| DayGroup { date, records })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Bay;

    fn make_record(id: u64, plate: &str, brand: &str, date: (i32, u32, u32)) -> WashRecord {
        WashRecord {
            id,
            bay: Bay::first(),
            plate: plate.to_string(),
            brand: brand.to_string(),
            color: "White".to_string(),
            wash_type: "Valet wash".to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            operators: "Sam,Lee".to_string(),
        }
    }

    #[test]
    fn test_empty_query_matches_all() {
        let record = make_record(1, "ABC123", "Toyota", (2025, 6, 1));
        assert!(SearchQuery::new("").matches(&record));
        assert!(SearchQuery::new("").is_empty());
    }

    #[test]
    fn test_whitespace_is_part_of_the_query() {
        let record = make_record(1, "ABC123", "Toyota", (2025, 6, 1));
        assert!(!SearchQuery::new("abc ").matches(&record));
        assert!(!SearchQuery::new(" toyota").matches(&record));
        // "Valet wash" carries the only space in this record.
        assert!(SearchQuery::new("t w").matches(&record));

        let spaced = make_record(2, "KCA 123A", "Toyota", (2025, 6, 1));
        assert!(SearchQuery::new("kca ").matches(&spaced));
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let toyota = make_record(1, "ABC123", "Toyota", (2025, 6, 1));
        let honda = make_record(2, "XYZ999", "Honda", (2025, 6, 1));
        let query = SearchQuery::new("abc");
        assert!(query.matches(&toyota));
        assert!(!query.matches(&honda));
    }

    #[test]
    fn test_query_matches_any_field() {
        let record = make_record(1, "ABC123", "Toyota", (2025, 6, 1));
        assert!(SearchQuery::new("TOYO").matches(&record));
        assert!(SearchQuery::new("white").matches(&record));
        assert!(SearchQuery::new("valet").matches(&record));
        assert!(SearchQuery::new("2025-06").matches(&record));
        assert!(SearchQuery::new("lee").matches(&record));
        assert!(!SearchQuery::new("porsche").matches(&record));
    }

    #[test]
    fn test_groups_are_most_recent_first() {
        let records = vec![
            make_record(1, "A1", "Toyota", (2025, 6, 1)),
            make_record(2, "B2", "Toyota", (2025, 6, 2)),
            make_record(3, "C3", "Toyota", (2025, 6, 1)),
        ];
        let groups = group_by_date(&records);
        let labels: Vec<String> = groups.iter().map(DayGroup::label).collect();
        assert_eq!(labels, vec!["2025-06-02", "2025-06-01"]);

        let ids: Vec<u64> = groups[1].records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]); // insertion order within the day
    }

    #[test]
    fn test_group_by_date_empty() {
        let records: Vec<WashRecord> = Vec::new();
        assert!(group_by_date(&records).is_empty());
    }
}
