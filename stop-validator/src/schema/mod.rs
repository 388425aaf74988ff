//! Stop record schema and validation.
//!
//! The schema is a static table of per-field rules (type, required,
//! format). Validation never fails: it only counts erroneous values.

mod rules;
mod validator;

pub use rules::{FieldFormat, FieldKind, FieldRule, Schema, rule_for};
pub use validator::{ErrorReport, find_errors, is_error_field};
