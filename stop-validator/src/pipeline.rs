//! Running a selection of checks over a batch.

use std::fmt;

use serde::Serialize;

use crate::domain::{LineId, StopRecord};
use crate::network::{
    KeyStationSets, LineIndex, OnDemandReport, ScheduleReport, StopCounts, TopologyOutcome,
    check_on_demand, check_schedule, classify_validated,
};
use crate::schema::{ErrorReport, find_errors};

/// A check that can be run over a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Check {
    /// Per-field type and format validation
    Fields,
    /// Number of stops on each line
    Lines,
    /// Start, transfer and finish stops
    Topology,
    /// Arrival time ordering
    Schedule,
    /// On-demand stops at key stations
    OnDemand,
    /// Every check above, in order
    All,
}

impl Check {
    /// The order checks run and report in.
    pub const ORDER: [Check; 5] = [
        Check::Fields,
        Check::Lines,
        Check::Topology,
        Check::Schedule,
        Check::OnDemand,
    ];

    fn selected_by(self, checks: &[Check]) -> bool {
        checks.iter().any(|c| *c == self || *c == Check::All)
    }
}

/// Topology report: key stations, or why they were not derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TopologySummary {
    Valid { key_stations: KeyStationSets },
    Invalid { line: LineId, error: String },
}

impl From<TopologyOutcome> for TopologySummary {
    fn from(outcome: TopologyOutcome) -> Self {
        match outcome {
            TopologyOutcome::Validated(counters) => TopologySummary::Valid {
                key_stations: KeyStationSets::derive(&counters),
            },
            TopologyOutcome::Invalid(err) => TopologySummary::Invalid {
                line: err.line(),
                error: err.to_string(),
            },
        }
    }
}

impl fmt::Display for TopologySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopologySummary::Valid { key_stations } => write!(f, "{key_stations}"),
            TopologySummary::Invalid { error, .. } => f.write_str(error),
        }
    }
}

/// Results of the checks that were run.
///
/// Renders as text with `Display` and as JSON with `Serialize`; checks
/// that were not run are left out of both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<ErrorReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<StopCounts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topology: Option<TopologySummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_demand: Option<OnDemandReport>,
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sections: [Option<&dyn fmt::Display>; 5] = [
            self.fields.as_ref().map(|r| r as &dyn fmt::Display),
            self.lines.as_ref().map(|r| r as &dyn fmt::Display),
            self.topology.as_ref().map(|r| r as &dyn fmt::Display),
            self.schedule.as_ref().map(|r| r as &dyn fmt::Display),
            self.on_demand.as_ref().map(|r| r as &dyn fmt::Display),
        ];

        let mut first = true;
        for section in sections.into_iter().flatten() {
            if !first {
                f.write_str("\n")?;
            }
            first = false;
            write!(f, "{section}")?;
        }
        Ok(())
    }
}

/// Run the selected checks over a batch.
///
/// Checks run in [`Check::ORDER`] whatever order they are given in, and
/// each runs at most once.
///
/// # Examples
///
/// ```
/// use stop_validator::input::parse_batch;
/// use stop_validator::pipeline::{Check, run_checks};
///
/// let batch = parse_batch(r#"[
///     {"bus_id": 1, "stop_id": 1, "stop_name": "Sample Street", "next_stop": 2, "stop_type": "S", "a_time": "08:00"},
///     {"bus_id": 1, "stop_id": 2, "stop_name": "Sample Boulevard", "next_stop": 0, "stop_type": "F", "a_time": "08:10"}
/// ]"#).unwrap();
///
/// let report = run_checks(&batch, &[Check::OnDemand]);
/// assert_eq!(report.to_string(), "On demand stops test:\nOK");
/// ```
pub fn run_checks(records: &[StopRecord], checks: &[Check]) -> BatchReport {
    let index = LineIndex::build(records);
    let mut report = BatchReport::default();

    for check in Check::ORDER {
        if !check.selected_by(checks) {
            continue;
        }
        match check {
            Check::Fields => report.fields = Some(find_errors(records)),
            Check::Lines => report.lines = Some(index.stop_counts()),
            Check::Topology => report.topology = Some(classify_validated(&index).into()),
            Check::Schedule => report.schedule = Some(check_schedule(&index)),
            Check::OnDemand => report.on_demand = Some(check_on_demand(&index)),
            Check::All => {}
        }
    }

    report
}
