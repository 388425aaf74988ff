//! Line-level checks over a batch of stop records.
//!
//! Everything here works off a [`LineIndex`]: the topology classifier
//! buckets each line's stops, the key station deriver combines the
//! buckets across lines, and the schedule and on-demand checks report
//! per-line and per-stop problems.

mod key_stations;
mod line_index;
mod on_demand;
mod schedule;
mod topology;

pub use key_stations::KeyStationSets;
pub use line_index::{LineGroup, LineIndex, LineStopCount, StopCounts};
pub use on_demand::{OnDemandReport, check_on_demand};
pub use schedule::{LineSchedule, ScheduleReport, check_schedule};
pub use topology::{
    TopologyCounter, TopologyError, TopologyOutcome, classify, classify_validated,
    validate_topology,
};
