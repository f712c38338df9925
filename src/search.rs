/// Substring Record Search
///
/// A search is a filter, never a reorder: a record survives when the
/// case-insensitive string form of the designated field contains the term.
/// Records whose field is null or missing are excluded. An empty term is
/// the identity. Inputs are never mutated.

use crate::value::Record;

/// Filter records by a case-insensitive substring match on one field,
/// returning a new sequence in the original relative order.
pub fn filter_records(records: &[Record], term: &str, field: &str) -> Vec<Record> {
    if term.is_empty() {
        return records.to_vec();
    }

    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| {
            record
                .get(field)
                .and_then(|value| value.to_display_string())
                .map(|text| text.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::FieldValue;

    fn named(name: &str) -> Record {
        let mut record = Record::new();
        record.insert("Name".to_string(), FieldValue::from(name));
        record
    }

    fn names(records: &[Record]) -> Vec<&str> {
        records
            .iter()
            .filter_map(|r| r.get("Name").and_then(|v| v.as_text()))
            .collect()
    }

    #[test]
    fn test_case_insensitive_substring() {
        let records = vec![named("Acme Corp"), named("Beta"), named("acme2")];

        let matched = filter_records(&records, "acme", "Name");
        assert_eq!(names(&matched), vec!["Acme Corp", "acme2"]);
    }

    #[test]
    fn test_empty_term_is_identity() {
        let records = vec![named("Acme Corp"), named("Beta")];
        let matched = filter_records(&records, "", "Name");
        assert_eq!(matched, records);
    }

    #[test]
    fn test_null_and_missing_fields_excluded() {
        let mut with_null = Record::new();
        with_null.insert("Name".to_string(), FieldValue::Null);
        let without_field = Record::new();
        let records = vec![named("Acme"), with_null, without_field];

        let matched = filter_records(&records, "a", "Name");
        assert_eq!(names(&matched), vec!["Acme"]);
    }

    #[test]
    fn test_preserves_relative_order() {
        let records = vec![
            named("Zeta Acme"),
            named("Beta"),
            named("Acme Corp"),
            named("acme2"),
        ];

        let matched = filter_records(&records, "ACME", "Name");
        assert_eq!(names(&matched), vec!["Zeta Acme", "Acme Corp", "acme2"]);
    }

    #[test]
    fn test_matches_number_display_form() {
        let mut record = Record::new();
        record.insert("AnnualRevenue".to_string(), FieldValue::Number(1250.0));

        let matched = filter_records(&[record], "125", "AnnualRevenue");
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn test_does_not_mutate_input() {
        let records = vec![named("Acme"), named("Beta")];
        let snapshot = records.clone();
        let _ = filter_records(&records, "acme", "Name");
        assert_eq!(records, snapshot);
    }
}
