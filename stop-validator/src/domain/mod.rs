//! Domain types for bus stop validation.
//!
//! Records are kept close to their raw JSON form so that schema errors
//! can be counted; the typed views here (`LineId`, `StopType`) are only
//! produced from values that make sense.

mod field;
mod line;
mod record;
mod stop_type;

pub use field::Field;
pub use line::LineId;
pub use record::StopRecord;
pub use stop_type::{InvalidStopType, StopType};
