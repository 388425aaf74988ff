//! Stop record field names.

use std::fmt;

use serde::Serialize;

/// One of the six fields a stop record may carry.
///
/// The declaration order is the schema order, which is also the order
/// fields appear in every report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    BusId,
    StopId,
    StopName,
    NextStop,
    StopType,
    ATime,
}

impl Field {
    /// All fields, in schema order.
    pub const ALL: [Field; 6] = [
        Field::BusId,
        Field::StopId,
        Field::StopName,
        Field::NextStop,
        Field::StopType,
        Field::ATime,
    ];

    /// Look up a field by its JSON key.
    ///
    /// # Examples
    ///
    /// ```
    /// use stop_validator::domain::Field;
    ///
    /// assert_eq!(Field::from_key("a_time"), Some(Field::ATime));
    /// assert_eq!(Field::from_key("arrival"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// The JSON key for this field.
    pub fn key(self) -> &'static str {
        match self {
            Field::BusId => "bus_id",
            Field::StopId => "stop_id",
            Field::StopName => "stop_name",
            Field::NextStop => "next_stop",
            Field::StopType => "stop_type",
            Field::ATime => "a_time",
        }
    }

    /// Position of this field in schema order.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
