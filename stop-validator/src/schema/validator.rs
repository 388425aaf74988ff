//! Field and batch validation against the schema.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::rules::{FieldRule, rule_for};
use crate::domain::{Field, StopRecord};

/// Decide whether one value violates its rule.
///
/// Checks run in order and the first failing one decides:
///
/// 1. an empty string is fine for an optional field;
/// 2. an empty string is an error for a required field;
/// 3. a value of the wrong JSON type is an error;
/// 4. a text value that does not match the rule's format is an error.
///
/// # Examples
///
/// ```
/// use stop_validator::domain::Field;
/// use stop_validator::schema::{is_error_field, rule_for};
/// use serde_json::json;
///
/// assert!(!is_error_field(&json!(""), rule_for(Field::StopType)));
/// assert!(is_error_field(&json!(""), rule_for(Field::ATime)));
/// assert!(is_error_field(&json!("8:00"), rule_for(Field::ATime)));
/// assert!(!is_error_field(&json!("08:00"), rule_for(Field::ATime)));
/// ```
pub fn is_error_field(value: &Value, rule: &FieldRule) -> bool {
    let is_empty = value.as_str() == Some("");

    if !rule.required && is_empty {
        return false;
    }
    if is_empty || !rule.kind.matches(value) {
        return true;
    }

    match (&rule.format, value.as_str()) {
        (Some(format), Some(text)) => !format.matches(text),
        _ => false,
    }
}

/// Error counts per field for a whole batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorReport {
    counts: [usize; 6],
}

impl ErrorReport {
    /// Number of erroneous values seen for a field.
    pub fn get(&self, field: Field) -> usize {
        self.counts[field.index()]
    }

    /// Total errors across all fields.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Whether the batch had no field errors at all.
    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }

    /// Per-field counts, in schema order. Every field is present.
    pub fn iter(&self) -> impl Iterator<Item = (Field, usize)> + '_ {
        Field::ALL.into_iter().map(|field| (field, self.get(field)))
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Type and required field validation: {} errors",
            self.total()
        )?;
        for (field, count) in self.iter() {
            write!(f, "\n{field}: {count}")?;
        }
        Ok(())
    }
}

impl Serialize for ErrorReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(field, count)| (field.key(), count)))
    }
}

/// Count field errors over every record.
///
/// Only fields present on a record are checked; a missing key is not an
/// error in itself.
pub fn find_errors(records: &[StopRecord]) -> ErrorReport {
    let mut report = ErrorReport::default();

    for record in records {
        for (field, value) in record.fields() {
            if is_error_field(value, rule_for(field)) {
                report.counts[field.index()] += 1;
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> StopRecord {
        serde_json::from_value(value).unwrap()
    }

    fn is_error(field: Field, value: Value) -> bool {
        is_error_field(&value, rule_for(field))
    }

    #[test]
    fn optional_empty_is_not_an_error() {
        assert!(!is_error(Field::StopType, json!("")));
    }

    #[test]
    fn required_empty_is_an_error() {
        assert!(is_error(Field::BusId, json!("")));
        assert!(is_error(Field::StopName, json!("")));
        assert!(is_error(Field::ATime, json!("")));
    }

    #[test]
    fn wrong_type_is_an_error() {
        assert!(is_error(Field::BusId, json!("128")));
        assert!(is_error(Field::BusId, json!(1.5)));
        assert!(is_error(Field::BusId, json!(true)));
        assert!(is_error(Field::StopId, json!(null)));
        assert!(is_error(Field::StopName, json!(7)));
        assert!(is_error(Field::StopType, json!(1)));
        assert!(is_error(Field::ATime, json!(810)));
    }

    #[test]
    fn format_mismatch_is_an_error() {
        assert!(is_error(Field::StopName, json!("Elm")));
        assert!(is_error(Field::StopType, json!("A")));
        assert!(is_error(Field::ATime, json!("25:00")));
    }

    #[test]
    fn valid_values_pass() {
        assert!(!is_error(Field::BusId, json!(128)));
        assert!(!is_error(Field::StopId, json!(0)));
        assert!(!is_error(Field::StopName, json!("Prospekt Avenue")));
        assert!(!is_error(Field::NextStop, json!(3)));
        assert!(!is_error(Field::StopType, json!("O")));
        assert!(!is_error(Field::ATime, json!("08:12")));
    }

    #[test]
    fn integer_fields_ignore_format() {
        // Integer rules carry no format, so any integer passes.
        assert!(!is_error(Field::NextStop, json!(-1)));
    }

    #[test]
    fn clean_batch() {
        let records = vec![
            record(json!({
                "bus_id": 1, "stop_id": 1, "stop_name": "Sample Street",
                "next_stop": 2, "stop_type": "S", "a_time": "08:00"
            })),
            record(json!({
                "bus_id": 1, "stop_id": 2, "stop_name": "Sample Boulevard",
                "next_stop": 0, "stop_type": "F", "a_time": "08:10"
            })),
        ];

        let report = find_errors(&records);
        assert!(report.is_clean());
        assert_eq!(report.iter().count(), 6);
    }

    #[test]
    fn counts_per_field() {
        let records = vec![
            record(json!({
                "bus_id": "x", "stop_id": 1, "stop_name": "Elm",
                "next_stop": 2, "stop_type": "Q", "a_time": "8:00"
            })),
            record(json!({
                "bus_id": 1, "stop_id": "", "stop_name": "Elm",
                "next_stop": 2, "stop_type": "", "a_time": "08:00"
            })),
        ];

        let report = find_errors(&records);
        assert_eq!(report.get(Field::BusId), 1);
        assert_eq!(report.get(Field::StopId), 1);
        assert_eq!(report.get(Field::StopName), 2);
        assert_eq!(report.get(Field::NextStop), 0);
        assert_eq!(report.get(Field::StopType), 1);
        assert_eq!(report.get(Field::ATime), 1);
        assert_eq!(report.total(), 6);
    }

    #[test]
    fn missing_fields_are_not_counted() {
        let records = vec![record(json!({"bus_id": 1}))];
        let report = find_errors(&records);
        assert!(report.is_clean());
    }

    #[test]
    fn display() {
        let records = vec![record(json!({"bus_id": "", "a_time": "99:99"}))];
        let report = find_errors(&records);
        assert_eq!(
            report.to_string(),
            "Type and required field validation: 2 errors\n\
             bus_id: 1\n\
             stop_id: 0\n\
             stop_name: 0\n\
             next_stop: 0\n\
             stop_type: 0\n\
             a_time: 1"
        );
    }

    #[test]
    fn serializes_in_schema_order() {
        let report = find_errors(&[]);
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"bus_id":0,"stop_id":0,"stop_name":0,"next_stop":0,"stop_type":0,"a_time":0}"#
        );
    }
}
