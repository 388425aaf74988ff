//! The static field rule table.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::domain::Field;

/// The JSON type a field must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A JSON integer. Floats and booleans do not count.
    Integer,
    /// A JSON string.
    Text,
}

impl FieldKind {
    /// Whether a value has this kind.
    pub fn matches(self, value: &Value) -> bool {
        match self {
            FieldKind::Integer => value.is_i64() || value.is_u64(),
            FieldKind::Text => value.is_string(),
        }
    }
}

/// A value-format constraint, matched from the start of the value.
///
/// The match is anchored at the start only; the pattern supplies its own
/// end anchor. Every pattern in the schema ends in `\n?$`, so a value with
/// a single trailing newline still matches.
#[derive(Debug, Clone)]
pub struct FieldFormat {
    regex: Regex,
}

impl FieldFormat {
    /// Compile a format pattern.
    pub fn new(pattern: &'static str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{pattern})"))?;
        Ok(Self { regex })
    }

    /// Whether `text` matches this format from its first character.
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Validation rule for one field.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub kind: FieldKind,
    pub required: bool,
    pub format: Option<FieldFormat>,
}

impl FieldRule {
    fn new(kind: FieldKind, required: bool, format: Option<&'static str>) -> Self {
        let format = format.map(|pattern| {
            FieldFormat::new(pattern).expect("schema format patterns are valid regexes")
        });
        Self {
            kind,
            required,
            format,
        }
    }
}

/// Rules for every stop record field, indexed by [`Field`].
#[derive(Debug)]
pub struct Schema {
    rules: [FieldRule; 6],
}

static SCHEMA: LazyLock<Schema> = LazyLock::new(|| Schema {
    rules: [
        FieldRule::new(FieldKind::Integer, true, None),
        FieldRule::new(FieldKind::Integer, true, None),
        FieldRule::new(
            FieldKind::Text,
            true,
            Some(r"([A-Z][a-z]+ )+(Road|Avenue|Boulevard|Street)\n?$"),
        ),
        FieldRule::new(FieldKind::Integer, true, None),
        FieldRule::new(FieldKind::Text, false, Some(r"[SOF]\n?$")),
        FieldRule::new(
            FieldKind::Text,
            true,
            Some(r"(2[0-3]|[0-1][0-9]):([0-5][0-9])\n?$"),
        ),
    ],
});

impl Schema {
    /// The process-wide schema.
    pub fn global() -> &'static Schema {
        &SCHEMA
    }

    /// The rule for a field.
    pub fn rule(&self, field: Field) -> &FieldRule {
        &self.rules[field.index()]
    }
}

/// Shorthand for `Schema::global().rule(field)`.
pub fn rule_for(field: Field) -> &'static FieldRule {
    Schema::global().rule(field)
}
