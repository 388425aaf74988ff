//! Stop records as read from the input batch.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

use super::{Field, StopType};

/// One stop observation.
///
/// Values are kept exactly as they appeared in the input so the schema
/// validator can see type errors. A missing `stop_type` key is stored as
/// the empty string; every other missing key stays missing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct StopRecord {
    values: [Option<Value>; 6],
}

impl StopRecord {
    /// Returns the raw value of a field, if the record has it.
    pub fn get(&self, field: Field) -> Option<&Value> {
        self.values[field.index()].as_ref()
    }

    /// Iterate over the fields this record carries, in schema order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &Value)> {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value)))
    }

    /// The stop name as text.
    ///
    /// Names that are not JSON strings are rendered as JSON, so a stray
    /// `42` still takes part in name comparisons as `"42"`.
    pub fn stop_name(&self) -> Option<String> {
        self.get(Field::StopName).map(value_text)
    }

    /// The stop type, if the record carries a recognised code.
    ///
    /// Empty, unknown and non-string codes all mean a regular stop.
    pub fn stop_type(&self) -> Option<StopType> {
        self.get(Field::StopType)
            .and_then(Value::as_str)
            .and_then(|code| StopType::parse(code).ok())
    }

    /// The arrival time as text, compared lexicographically by the
    /// schedule check.
    pub fn arrival_time(&self) -> Option<String> {
        self.get(Field::ATime).map(value_text)
    }
}

impl From<Map<String, Value>> for StopRecord {
    fn from(object: Map<String, Value>) -> Self {
        let mut values: [Option<Value>; 6] = Default::default();

        for (key, value) in object {
            match Field::from_key(&key) {
                Some(field) => values[field.index()] = Some(value),
                None => warn!(key = %key, "ignoring unknown stop record field"),
            }
        }

        let stop_type = &mut values[Field::StopType.index()];
        if stop_type.is_none() {
            *stop_type = Some(Value::String(String::new()));
        }

        Self { values }
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
