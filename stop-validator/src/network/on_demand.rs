//! On-demand stops that coincide with key stations.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use super::{KeyStationSets, LineIndex, classify};
use crate::domain::StopType;
use crate::report::quoted_list;

/// Names of on-demand stops that are also key stations, sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OnDemandReport {
    conflicts: Vec<String>,
}

impl OnDemandReport {
    pub fn is_ok(&self) -> bool {
        self.conflicts.is_empty()
    }

    pub fn conflicts(&self) -> &[String] {
        &self.conflicts
    }
}

impl fmt::Display for OnDemandReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("On demand stops test:\n")?;
        if self.is_ok() {
            f.write_str("OK")
        } else {
            write!(f, "Wrong stop type: {}", quoted_list(&self.conflicts))
        }
    }
}

/// Find on-demand stops whose name is a start, finish or transfer stop.
///
/// Key stations come from the raw classification, so this check runs
/// even when some line has a bad start/finish setup.
pub fn check_on_demand(index: &LineIndex<'_>) -> OnDemandReport {
    let key_stations = KeyStationSets::derive(&classify(index));

    let conflicts: BTreeSet<String> = index
        .lines()
        .iter()
        .flat_map(|group| group.records())
        .filter(|record| record.stop_type() == Some(StopType::OnDemand))
        .filter_map(|record| record.stop_name())
        .filter(|name| key_stations.contains(name))
        .collect();

    if !conflicts.is_empty() {
        debug!(conflicts = conflicts.len(), "on-demand stops at key stations");
    }

    OnDemandReport {
        conflicts: conflicts.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StopRecord;
    use serde_json::json;

    fn records(stops: &[(i64, &str, &str)]) -> Vec<StopRecord> {
        stops
            .iter()
            .map(|(bus_id, name, stop_type)| {
                serde_json::from_value(json!({
                    "bus_id": bus_id,
                    "stop_name": name,
                    "stop_type": stop_type,
                }))
                .unwrap()
            })
            .collect()
    }

    fn check(stops: &[(i64, &str, &str)]) -> OnDemandReport {
        let batch = records(stops);
        let index = LineIndex::build(&batch);
        check_on_demand(&index)
    }

    #[test]
    fn no_on_demand_stops() {
        let report = check(&[
            (1, "Sample Street", "S"),
            (1, "Sample Boulevard", "F"),
        ]);
        assert!(report.is_ok());
        assert_eq!(report.to_string(), "On demand stops test:\nOK");
    }

    #[test]
    fn on_demand_at_start_stop() {
        let report = check(&[
            (1, "Sample Street", "S"),
            (1, "Sample Boulevard", "F"),
            (1, "Sample Street", "O"),
        ]);
        assert_eq!(report.conflicts(), ["Sample Street"]);
        assert_eq!(
            report.to_string(),
            "On demand stops test:\nWrong stop type: ['Sample Street']"
        );
    }

    #[test]
    fn on_demand_at_transfer_stop() {
        let report = check(&[
            (1, "Elm Street", "S"),
            (1, "Pine Avenue", "O"),
            (1, "Oak Road", "F"),
            (2, "Ash Road", "S"),
            (2, "Pine Avenue", ""),
            (2, "Fir Street", "F"),
        ]);
        assert_eq!(report.conflicts(), ["Pine Avenue"]);
    }

    #[test]
    fn on_demand_elsewhere_is_fine() {
        let report = check(&[
            (1, "Elm Street", "S"),
            (1, "Pine Avenue", "O"),
            (1, "Oak Road", "F"),
            (2, "Ash Road", "S"),
            (2, "Fir Street", "F"),
        ]);
        assert!(report.is_ok());
    }

    #[test]
    fn conflicts_are_sorted_and_distinct() {
        let report = check(&[
            (1, "Sunset Boulevard", "S"),
            (1, "Elm Street", "O"),
            (1, "Elm Street", "F"),
            (2, "Sunset Boulevard", "O"),
            (2, "Elm Street", "O"),
            (2, "Ash Road", "F"),
        ]);
        assert_eq!(report.conflicts(), ["Elm Street", "Sunset Boulevard"]);
        assert_eq!(
            report.to_string(),
            "On demand stops test:\nWrong stop type: ['Elm Street', 'Sunset Boulevard']"
        );
    }

    #[test]
    fn trailing_newline_stays_on_one_line() {
        let batch: Vec<StopRecord> = [
            json!({"bus_id": 1, "stop_id": 1, "stop_name": "Elm Street\n", "next_stop": 2,
                   "stop_type": "S", "a_time": "08:00"}),
            json!({"bus_id": 1, "stop_id": 2, "stop_name": "Oak Road", "next_stop": 3,
                   "stop_type": "F", "a_time": "08:10"}),
            json!({"bus_id": 1, "stop_id": 3, "stop_name": "Elm Street\n", "next_stop": 0,
                   "stop_type": "O", "a_time": "08:20"}),
        ]
        .into_iter()
        .map(|value| serde_json::from_value(value).unwrap())
        .collect();

        // the name passes the schema, so it reaches the report
        assert!(crate::schema::find_errors(&batch).is_clean());

        let index = LineIndex::build(&batch);
        let report = check_on_demand(&index);
        assert_eq!(report.conflicts(), ["Elm Street\n"]);
        assert_eq!(
            report.to_string(),
            "On demand stops test:\nWrong stop type: ['Elm Street\\n']"
        );
        assert_eq!(report.to_string().lines().count(), 2);
    }

    #[test]
    fn runs_despite_invalid_topology() {
        // Line 1 has no finish stop; its start is still a key station.
        let report = check(&[(1, "Elm Street", "S"), (1, "Elm Street", "O")]);
        assert_eq!(report.conflicts(), ["Elm Street"]);
    }

    #[test]
    fn records_with_invalid_bus_id_are_ignored() {
        let mut batch = records(&[(1, "Elm Street", "S"), (1, "Oak Road", "F")]);
        batch.push(
            serde_json::from_value(json!({
                "bus_id": "1",
                "stop_name": "Elm Street",
                "stop_type": "O",
            }))
            .unwrap(),
        );
        let index = LineIndex::build(&batch);
        assert!(check_on_demand(&index).is_ok());
    }
}
