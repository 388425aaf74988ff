//! Stop type codes.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an unknown stop type code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop type: {reason}")]
pub struct InvalidStopType {
    reason: &'static str,
}

/// The role a stop plays on its line.
///
/// Regular stops carry no code at all, so they have no variant here:
/// a record's stop type is an `Option<StopType>`.
///
/// # Examples
///
/// ```
/// use stop_validator::domain::StopType;
///
/// assert_eq!(StopType::parse("S").unwrap(), StopType::Start);
/// assert_eq!(StopType::parse("O").unwrap(), StopType::OnDemand);
///
/// // Codes are case sensitive and exactly one character
/// assert!(StopType::parse("s").is_err());
/// assert!(StopType::parse("SF").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StopType {
    /// `S`: the line's origin.
    Start,
    /// `F`: the line's terminus.
    Finish,
    /// `O`: served only on request.
    OnDemand,
}

impl StopType {
    /// Parse a stop type from its one-letter code.
    pub fn parse(s: &str) -> Result<Self, InvalidStopType> {
        match s {
            "S" => Ok(StopType::Start),
            "F" => Ok(StopType::Finish),
            "O" => Ok(StopType::OnDemand),
            "" => Err(InvalidStopType {
                reason: "empty code",
            }),
            _ => Err(InvalidStopType {
                reason: "must be one of S, F, O",
            }),
        }
    }

    /// Returns the one-letter code.
    pub fn code(self) -> char {
        match self {
            StopType::Start => 'S',
            StopType::Finish => 'F',
            StopType::OnDemand => 'O',
        }
    }
}

impl fmt::Display for StopType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
