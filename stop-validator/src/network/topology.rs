//! Start/finish classification of each line's stops.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use super::LineIndex;
use crate::domain::{LineId, StopType};

/// Stop names of one line, bucketed by role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopologyCounter {
    pub line: LineId,
    /// Names of stops typed `S`, in input order. Duplicates are kept.
    pub start_names: Vec<String>,
    /// Names of stops typed `F`, in input order. Duplicates are kept.
    pub finish_names: Vec<String>,
    /// Every stop name on the line.
    pub all_names: BTreeSet<String>,
}

impl TopologyCounter {
    fn new(line: LineId) -> Self {
        Self {
            line,
            start_names: Vec::new(),
            finish_names: Vec::new(),
            all_names: BTreeSet::new(),
        }
    }
}

/// A line without exactly one start and one finish stop.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
pub enum TopologyError {
    #[error("There is no start or end stop for the line: {0}.")]
    MissingTerminal(LineId),

    #[error("There is too many start or end stops for the line: {0}.")]
    TooManyTerminals(LineId),
}

impl TopologyError {
    /// The offending line.
    pub fn line(&self) -> LineId {
        match self {
            TopologyError::MissingTerminal(line) | TopologyError::TooManyTerminals(line) => *line,
        }
    }
}

/// Result of classifying and validating every line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopologyOutcome {
    /// Every line has exactly one start and one finish stop.
    Validated(Vec<TopologyCounter>),
    /// The first line, in line order, that does not.
    Invalid(TopologyError),
}

impl TopologyOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, TopologyOutcome::Validated(_))
    }
}

/// Classify every line's stops without validating them.
///
/// Counters come back in line order, one per line. Use this when the
/// counters feed another check; use [`classify_validated`] for
/// reporting.
pub fn classify(index: &LineIndex<'_>) -> Vec<TopologyCounter> {
    index
        .lines()
        .iter()
        .map(|group| {
            let mut counter = TopologyCounter::new(group.id());

            for record in group.records() {
                let Some(name) = record.stop_name() else {
                    continue;
                };
                match record.stop_type() {
                    Some(StopType::Start) => counter.start_names.push(name.clone()),
                    Some(StopType::Finish) => counter.finish_names.push(name.clone()),
                    _ => {}
                }
                counter.all_names.insert(name);
            }

            counter
        })
        .collect()
}

/// Check that every line has exactly one start and one finish stop.
///
/// Stops at the first offending line.
pub fn validate_topology(counters: &[TopologyCounter]) -> Result<(), TopologyError> {
    for counter in counters {
        let starts = counter.start_names.len();
        let finishes = counter.finish_names.len();

        if starts == 0 || finishes == 0 {
            return Err(TopologyError::MissingTerminal(counter.line));
        }
        if starts > 1 || finishes > 1 {
            return Err(TopologyError::TooManyTerminals(counter.line));
        }
    }
    Ok(())
}

/// Classify every line and validate the result.
pub fn classify_validated(index: &LineIndex<'_>) -> TopologyOutcome {
    let counters = classify(index);

    match validate_topology(&counters) {
        Ok(()) => TopologyOutcome::Validated(counters),
        Err(err) => {
            debug!(line = %err.line(), error = %err, "line topology invalid");
            TopologyOutcome::Invalid(err)
        }
    }
}
