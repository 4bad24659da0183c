//! Top-level orchestration: wires C1 through C5 into a single entry point.

use crate::bfs::bidirectional_bfs;
use crate::closure::AncestorMatrix;
use crate::cocomparability::CocomparabilityGraph;
use crate::error::SalbpError;
use crate::frontier::enumerate_frontiers;
use crate::instance::Instance;
use crate::path::{recover_solution, Solution};

/// Solves a SALBP-1 instance exactly: the minimum number of stations and
/// one feasible assignment of tasks to them.
///
/// This runs the full pipeline once per call; nothing is cached or reused
/// across calls, in keeping with the crate's synchronous, single-threaded
/// execution model.
pub fn solve(instance: &Instance) -> Result<Solution, SalbpError> {
    let node_count = instance.node_count();
    let sink = instance.sink();

    let ancestors = AncestorMatrix::from_arcs(node_count, instance.arcs());
    let cocomparability = CocomparabilityGraph::from_ancestors(&ancestors);
    let frontiers = enumerate_frontiers(&cocomparability, &ancestors, instance.durations());

    let idx_source = frontiers
        .find_singleton(Instance::SOURCE)
        .ok_or(SalbpError::SourceFrontierNotFound)?;
    let idx_sink = frontiers
        .find_singleton(sink)
        .ok_or(SalbpError::SinkFrontierNotFound)?;

    let bfs_result = bidirectional_bfs(
        &frontiers,
        &ancestors,
        instance.durations(),
        node_count,
        instance.cycle_time(),
        idx_source,
        idx_sink,
    )?;

    let solution = recover_solution(&bfs_result, &frontiers, &ancestors, node_count, sink);

    log::debug!(
        "solved instance with {} tasks in {} stations",
        instance.task_count(),
        solution.station_count()
    );

    Ok(solution)
}
