//! Arrival time ordering along each line.

use std::fmt;

use serde::Serialize;

use super::LineIndex;
use crate::domain::LineId;

/// Schedule result for one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineSchedule {
    pub bus_id: LineId,
    /// The first stop whose arrival time is not later than every
    /// earlier stop on the line.
    pub wrong_time_at: Option<String>,
}

/// Schedule results for every line, in line order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScheduleReport {
    lines: Vec<LineSchedule>,
}

impl ScheduleReport {
    /// True when no line has a violation.
    pub fn is_ok(&self) -> bool {
        self.lines.iter().all(|line| line.wrong_time_at.is_none())
    }

    /// Every line, violating or not.
    pub fn lines(&self) -> &[LineSchedule] {
        &self.lines
    }

    /// The offending stop for a line, if it has one.
    pub fn violation(&self, line: LineId) -> Option<&str> {
        self.lines
            .iter()
            .find(|schedule| schedule.bus_id == line)
            .and_then(|schedule| schedule.wrong_time_at.as_deref())
    }

    /// Lines with a violation, paired with their offending stop.
    pub fn violations(&self) -> impl Iterator<Item = (LineId, &str)> {
        self.lines.iter().filter_map(|schedule| {
            schedule
                .wrong_time_at
                .as_deref()
                .map(|stop| (schedule.bus_id, stop))
        })
    }
}

impl fmt::Display for ScheduleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Arrival time test:")?;
        if self.is_ok() {
            return f.write_str("\nOK");
        }
        for (line, stop) in self.violations() {
            write!(f, "\nbus_id line {line}: wrong time on station {stop}")?;
        }
        Ok(())
    }
}

/// Check that arrival times strictly increase along each line.
///
/// Records are taken in input order, not sorted by time. Times compare as
/// strings, which matches chronological order for zero-padded `HH:MM`.
/// Only the first violation on a line is reported. Records without an
/// arrival time are skipped.
pub fn check_schedule(index: &LineIndex<'_>) -> ScheduleReport {
    let lines = index
        .lines()
        .iter()
        .map(|group| {
            let mut latest: Option<String> = None;
            let mut wrong_time_at = None;

            for record in group.records() {
                let Some(time) = record.arrival_time() else {
                    continue;
                };
                if latest.as_ref().is_some_and(|max| time <= *max) {
                    wrong_time_at = Some(record.stop_name().unwrap_or_default());
                    break;
                }
                latest = Some(time);
            }

            LineSchedule {
                bus_id: group.id(),
                wrong_time_at,
            }
        })
        .collect();

    ScheduleReport { lines }
}
