//! Start, finish and transfer stops across all lines.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use super::TopologyCounter;
use crate::report::quoted_list;

/// Stations with an operational role on at least one line.
///
/// Every set iterates in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeyStationSets {
    pub starts: BTreeSet<String>,
    pub finishes: BTreeSet<String>,
    /// Names served by two or more distinct lines.
    pub transfers: BTreeSet<String>,
}

impl KeyStationSets {
    /// Derive the key stations from per-line counters.
    ///
    /// Transfers are found by intersecting the stop sets of every pair of
    /// counters with different lines. Both orderings of each pair are
    /// visited.
    pub fn derive(counters: &[TopologyCounter]) -> Self {
        let mut sets = Self::default();

        for counter in counters {
            sets.starts.extend(counter.start_names.iter().cloned());
            sets.finishes.extend(counter.finish_names.iter().cloned());

            for other in counters.iter().filter(|other| other.line != counter.line) {
                sets.transfers
                    .extend(counter.all_names.intersection(&other.all_names).cloned());
            }
        }

        sets
    }

    /// Whether a name is a start, finish or transfer stop.
    pub fn contains(&self, name: &str) -> bool {
        self.starts.contains(name) || self.finishes.contains(name) || self.transfers.contains(name)
    }
}

impl fmt::Display for KeyStationSets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Start stops: {} {}",
            self.starts.len(),
            quoted_list(&self.starts)
        )?;
        writeln!(
            f,
            "Transfer stops: {} {}",
            self.transfers.len(),
            quoted_list(&self.transfers)
        )?;
        write!(
            f,
            "Finish stops: {} {}",
            self.finishes.len(),
            quoted_list(&self.finishes)
        )
    }
}
