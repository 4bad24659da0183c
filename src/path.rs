//! C5: path and station recovery — turning a bidirectional search result
//! back into the stations of an assembly line.

use crate::bfs::{construction_c, BfsResult};
use crate::closure::AncestorMatrix;
use crate::frontier::FrontierList;

/// One station: the set of real tasks assigned to it, in ascending order.
///
/// The synthetic source and sink nodes never appear here even though they
/// are present in the underlying frontier transitions — see
/// [`Station::from_raw_transition`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    tasks: Vec<usize>,
}

impl Station {
    /// Tasks assigned to this station, ascending, 1-based.
    pub fn tasks(&self) -> &[usize] {
        &self.tasks
    }

    /// Builds a station from the raw task set a transition produces,
    /// filtering out the synthetic source (`0`) and sink (`sink`) ids.
    ///
    /// The raw set always contains the sink when `fp` is the sink singleton
    /// (the sink is trivially its own ancestor) and never contains the
    /// source once `f` holds any real task (the source is an ancestor of
    /// every real task, which disqualifies it at the first eligibility
    /// check) — so this filter only ever has visible effect on the last
    /// transition of a path, but it is applied unconditionally since cheap
    /// filtering is simpler than special-casing the final station.
    fn from_raw_transition(raw: Vec<usize>, sink: usize) -> Self {
        let mut tasks: Vec<usize> = raw.into_iter().filter(|&t| t != 0 && t != sink).collect();
        tasks.sort_unstable();
        Station { tasks }
    }
}

/// A complete solution: the station partition and the frontier path that
/// produced it.
#[derive(Debug, Clone)]
pub struct Solution {
    stations: Vec<Station>,
    frontier_path: Vec<usize>,
}

impl Solution {
    /// Number of stations opened, i.e. `k` in a SALBP-1 solution.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// The stations, in line order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// The sequence of frontier indices the search traversed from the
    /// source singleton to the sink singleton, inclusive.
    pub fn frontier_path(&self) -> &[usize] {
        &self.frontier_path
    }
}

/// Reconstructs the full solution from a completed bidirectional search:
/// recovers the frontier path, then derives one station per consecutive
/// pair of frontiers along it.
pub fn recover_solution(
    result: &BfsResult,
    frontiers: &FrontierList,
    ancestors: &AncestorMatrix,
    node_count: usize,
    sink: usize,
) -> Solution {
    let frontier_path = result.path();

    let stations = frontier_path
        .windows(2)
        .map(|pair| {
            let f = frontiers.get(pair[0]).members();
            let fp = frontiers.get(pair[1]).members();
            let raw = construction_c(f, fp, node_count, ancestors);
            Station::from_raw_transition(raw, sink)
        })
        .collect();

    Solution {
        stations,
        frontier_path,
    }
}
