//! Reading a batch of stop records.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::domain::StopRecord;

/// Errors reading or parsing the input batch.
///
/// These are the only fatal errors: anything wrong with the content of a
/// well-formed batch is reported by the checks instead.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The input could not be read
    #[error("failed to read input: {0}")]
    Read(#[from] std::io::Error),

    /// The input is not a JSON array of objects
    #[error("malformed input: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a batch from JSON text.
///
/// # Examples
///
/// ```
/// use stop_validator::input::parse_batch;
///
/// let batch = parse_batch(r#"[{"bus_id": 128, "stop_name": "Prospekt Avenue"}]"#).unwrap();
/// assert_eq!(batch.len(), 1);
///
/// assert!(parse_batch(r#"{"bus_id": 128}"#).is_err());
/// assert!(parse_batch("[1, 2]").is_err());
/// ```
pub fn parse_batch(text: &str) -> Result<Vec<StopRecord>, InputError> {
    Ok(serde_json::from_str(text)?)
}

/// Read the whole of `reader` and parse it as a batch.
pub fn read_batch<R: Read>(mut reader: R) -> Result<Vec<StopRecord>, InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_batch(&text)
}

/// Read and parse a batch from a file.
pub fn read_batch_file(path: &Path) -> Result<Vec<StopRecord>, InputError> {
    parse_batch(&fs::read_to_string(path)?)
}
