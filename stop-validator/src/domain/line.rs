//! Bus line identifiers.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Identifier of a bus line, taken from a record's `bus_id`.
///
/// A `LineId` is only built from a JSON integer; see
/// [`LineIndex`](crate::network::LineIndex) for the rule deciding which
/// records contribute one. Any JSON integer fits, from `i64::MIN` up to
/// `u64::MAX`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LineId(i128);

impl LineId {
    pub fn new(id: impl Into<i128>) -> Self {
        Self(id.into())
    }

    /// Extract a line id from a JSON value.
    ///
    /// Returns `None` for anything but a JSON integer. Booleans and floats
    /// are not integers here, even when they compare equal to one.
    ///
    /// # Examples
    ///
    /// ```
    /// use stop_validator::domain::LineId;
    /// use serde_json::json;
    ///
    /// assert_eq!(LineId::from_value(&json!(128)), Some(LineId::new(128)));
    /// assert_eq!(LineId::from_value(&json!(u64::MAX)), Some(LineId::new(u64::MAX)));
    /// assert_eq!(LineId::from_value(&json!("128")), None);
    /// assert_eq!(LineId::from_value(&json!(128.0)), None);
    /// assert_eq!(LineId::from_value(&json!(true)), None);
    /// ```
    pub fn from_value(value: &Value) -> Option<Self> {
        value
            .as_i64()
            .map(i128::from)
            .or_else(|| value.as_u64().map(i128::from))
            .map(Self)
    }

    pub fn get(self) -> i128 {
        self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_integer() {
        assert_eq!(LineId::from_value(&json!(0)), Some(LineId::new(0)));
        assert_eq!(LineId::from_value(&json!(-7)), Some(LineId::new(-7)));
        assert_eq!(LineId::from_value(&json!(512)), Some(LineId::new(512)));
    }

    #[test]
    fn full_integer_range() {
        let max = LineId::from_value(&json!(u64::MAX)).unwrap();
        assert_eq!(max.get(), i128::from(u64::MAX));
        assert_eq!(max.to_string(), "18446744073709551615");

        let min = LineId::from_value(&json!(i64::MIN)).unwrap();
        assert_eq!(min.get(), i128::from(i64::MIN));
        assert_ne!(max, LineId::new(-1));
    }

    #[test]
    fn reject_non_integers() {
        assert_eq!(LineId::from_value(&json!("")), None);
        assert_eq!(LineId::from_value(&json!(1.5)), None);
        assert_eq!(LineId::from_value(&json!(null)), None);
        assert_eq!(LineId::from_value(&json!([1])), None);
        assert_eq!(LineId::from_value(&json!(false)), None);
    }

    #[test]
    fn display_and_debug() {
        let id = LineId::new(256);
        assert_eq!(id.to_string(), "256");
        assert_eq!(format!("{:?}", id), "LineId(256)");
    }

    #[test]
    fn serializes_as_number() {
        assert_eq!(serde_json::to_string(&LineId::new(42)).unwrap(), "42");
        assert_eq!(
            serde_json::to_string(&LineId::new(u64::MAX)).unwrap(),
            "18446744073709551615"
        );
    }
}
