//! Grouping of stop records by bus line.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::domain::{Field, LineId, StopRecord};
use crate::schema::{is_error_field, rule_for};

/// The records of one line, in input order.
#[derive(Debug, Clone)]
pub struct LineGroup<'a> {
    id: LineId,
    records: Vec<&'a StopRecord>,
}

impl<'a> LineGroup<'a> {
    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn records(&self) -> &[&'a StopRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Index of a batch's records by line.
///
/// Only records whose `bus_id` passes schema validation are indexed.
/// Records with a bad `bus_id` belong to no line and are left out of
/// every per-line check.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    /// Groups in the order their line was first seen.
    lines: Vec<LineGroup<'a>>,
}

impl<'a> LineIndex<'a> {
    /// Build the index from a batch.
    pub fn build(records: &'a [StopRecord]) -> Self {
        let bus_id_rule = rule_for(Field::BusId);
        let mut lines: Vec<LineGroup<'a>> = Vec::new();
        let mut positions: HashMap<LineId, usize> = HashMap::new();
        let mut skipped = 0usize;

        for record in records {
            let id = record
                .get(Field::BusId)
                .filter(|value| !is_error_field(value, bus_id_rule))
                .and_then(LineId::from_value);

            let Some(id) = id else {
                skipped += 1;
                continue;
            };

            let position = *positions.entry(id).or_insert_with(|| {
                lines.push(LineGroup {
                    id,
                    records: Vec::new(),
                });
                lines.len() - 1
            });
            lines[position].records.push(record);
        }

        debug!(
            lines = lines.len(),
            records = records.len(),
            skipped,
            "built line index"
        );

        Self { lines }
    }

    /// Line ids in first-seen order.
    pub fn line_ids(&self) -> impl Iterator<Item = LineId> + '_ {
        self.lines.iter().map(LineGroup::id)
    }

    /// Line groups in first-seen order.
    pub fn lines(&self) -> &[LineGroup<'a>] {
        &self.lines
    }

    /// The group for a line, if the batch has it.
    pub fn line(&self, id: LineId) -> Option<&LineGroup<'a>> {
        self.lines.iter().find(|group| group.id == id)
    }

    /// Number of stops on each line.
    pub fn stop_counts(&self) -> StopCounts {
        StopCounts {
            lines: self
                .lines
                .iter()
                .map(|group| LineStopCount {
                    bus_id: group.id,
                    stops: group.len(),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Stop count for one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineStopCount {
    pub bus_id: LineId,
    pub stops: usize,
}

/// Stop counts for every line, in line order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StopCounts {
    lines: Vec<LineStopCount>,
}

impl StopCounts {
    pub fn iter(&self) -> impl Iterator<Item = &LineStopCount> {
        self.lines.iter()
    }
}

impl fmt::Display for StopCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Line names and number of stops:")?;
        for line in &self.lines {
            write!(f, "\nbus_id: {}, stops: {}", line.bus_id, line.stops)?;
        }
        Ok(())
    }
}
