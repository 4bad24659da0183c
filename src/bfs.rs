//! C4: bidirectional search over the frontier-transition graph.
//!
//! Frontiers are never linked by an explicit adjacency list; a transition
//! `F -> F'` exists iff `F'` dominates `F` (see [`inclusion`]) and the
//! intermediate task set between them fits in one cycle (see
//! [`transition_load`]). The two directions are not mirror images of each
//! other: the backward search swaps the argument order of both checks
//! relative to the forward search, which is pinned from the source
//! algorithm rather than derivable from symmetry.

use crate::closure::AncestorMatrix;
use crate::error::SalbpError;
use crate::frontier::FrontierList;

/// `true` iff every member of `f` has a member of `fp` that is a
/// descendant-or-equal of it — i.e. `fp` "covers" `f` tasks forward in the
/// precedence order. A frontier can only transition to one that includes
/// it in this sense.
fn inclusion(f: &[usize], fp: &[usize], ancestors: &AncestorMatrix) -> bool {
    f.iter().all(|&task| {
        fp.iter()
            .any(|&taskp| task == taskp || ancestors.is_ancestor(task, taskp))
    })
}

/// `true` iff node `l` is eligible for the intermediate set between `f` and
/// `fp`: it must not be an ancestor of anything already in `f` (it would
/// then belong behind the cut, not between the two frontiers), and it must
/// be an ancestor of something in `fp` (it must lie ahead of the old cut).
pub(crate) fn eligible_between(l: usize, f: &[usize], fp: &[usize], ancestors: &AncestorMatrix) -> bool {
    if f.iter().any(|&task| ancestors.is_ancestor(l, task)) {
        return false;
    }
    fp.iter().any(|&taskp| ancestors.is_ancestor(l, taskp))
}

/// The task set assigned to a station opened at `f` and closed at `fp`:
/// every node of the instance that is eligible per [`eligible_between`].
pub(crate) fn construction_c(f: &[usize], fp: &[usize], node_count: usize, ancestors: &AncestorMatrix) -> Vec<usize> {
    (0..node_count)
        .filter(|&l| eligible_between(l, f, fp, ancestors))
        .collect()
}

/// Total duration of the task set a transition from `f` to `fp` would load
/// into one station.
fn transition_load(f: &[usize], fp: &[usize], node_count: usize, ancestors: &AncestorMatrix, durations: &[u64]) -> u64 {
    construction_c(f, fp, node_count, ancestors)
        .iter()
        .map(|&l| durations[l])
        .sum()
}

/// Parent pointers and distances recorded by one direction of the search,
/// indexed by frontier id.
#[derive(Debug, Clone)]
struct Side {
    parent: Vec<Option<usize>>,
    dist: Vec<Option<u64>>,
}

impl Side {
    fn new(n: usize, start: usize) -> Self {
        let mut dist = vec![None; n];
        dist[start] = Some(0);
        Side {
            parent: vec![None; n],
            dist,
        }
    }
}

/// Result of a completed bidirectional search: both sides' parent/distance
/// tables, plus the frontier id where they met.
#[derive(Debug, Clone)]
pub struct BfsResult {
    parent_forward: Vec<Option<usize>>,
    parent_backward: Vec<Option<usize>>,
    meeting_point: usize,
}

impl BfsResult {
    /// Reconstructs the full frontier path from the source singleton to the
    /// sink singleton, inclusive, by walking both parent chains from the
    /// meeting point.
    pub fn path(&self) -> Vec<usize> {
        let mut forward_half = Vec::new();
        let mut cursor = Some(self.meeting_point);
        while let Some(node) = cursor {
            forward_half.push(node);
            cursor = self.parent_forward[node];
        }
        forward_half.reverse();

        let mut cursor = self.parent_backward[self.meeting_point];
        while let Some(node) = cursor {
            forward_half.push(node);
            cursor = self.parent_backward[node];
        }

        forward_half
    }
}

/// Runs the bidirectional search from the source singleton (`idx_source`)
/// to the sink singleton (`idx_sink`), alternating one BFS level at a time,
/// pruned by each frontier's per-pivot heuristic.
pub fn bidirectional_bfs(
    frontiers: &FrontierList,
    ancestors: &AncestorMatrix,
    durations: &[u64],
    node_count: usize,
    cycle_time: u64,
    idx_source: usize,
    idx_sink: usize,
) -> Result<BfsResult, SalbpError> {
    let n = frontiers.len();
    let mut forward = Side::new(n, idx_source);
    let mut backward = Side::new(n, idx_sink);

    let mut queue_forward = vec![idx_source];
    let mut queue_backward = vec![idx_sink];
    let mut expand_forward = true;

    loop {
        if queue_forward.is_empty() && queue_backward.is_empty() {
            break;
        }

        if expand_forward && !queue_forward.is_empty() {
            let mut next = Vec::new();
            for &u in &queue_forward {
                let current_level = forward.dist[u].expect("queued node has a recorded distance");
                let f = frontiers.get(u).members();

                for v in 0..n {
                    if u == v || forward.dist[v].is_some() {
                        continue;
                    }
                    let candidate = frontiers.get(v);
                    let h_v = candidate.heuristic_forward();
                    if h_v != cycle_time && current_level < h_v / cycle_time {
                        continue;
                    }

                    let fp = candidate.members();
                    if !inclusion(f, fp, ancestors) {
                        continue;
                    }
                    if transition_load(f, fp, node_count, ancestors, durations) > cycle_time {
                        continue;
                    }

                    forward.dist[v] = Some(current_level + 1);
                    forward.parent[v] = Some(u);

                    if backward.dist[v].is_some() {
                        return Ok(BfsResult {
                            parent_forward: forward.parent,
                            parent_backward: backward.parent,
                            meeting_point: v,
                        });
                    }
                    next.push(v);
                }
            }
            queue_forward = next;
            expand_forward = false;
        } else if !expand_forward && !queue_backward.is_empty() {
            let mut next = Vec::new();
            for &u in &queue_backward {
                let current_level = backward.dist[u].expect("queued node has a recorded distance");
                let f = frontiers.get(u).members();

                for v in 0..n {
                    if u == v || backward.dist[v].is_some() {
                        continue;
                    }
                    let candidate = frontiers.get(v);
                    let h_v = candidate.heuristic_backward();
                    if h_v != cycle_time && current_level < h_v / cycle_time {
                        continue;
                    }

                    let fp = candidate.members();
                    // Backward direction: argument order swaps relative to
                    // the forward check above — `fp` is tested against `f`,
                    // not the other way round.
                    if !inclusion(fp, f, ancestors) {
                        continue;
                    }
                    if transition_load(fp, f, node_count, ancestors, durations) > cycle_time {
                        continue;
                    }

                    backward.dist[v] = Some(current_level + 1);
                    backward.parent[v] = Some(u);

                    if forward.dist[v].is_some() {
                        return Ok(BfsResult {
                            parent_forward: forward.parent,
                            parent_backward: backward.parent,
                            meeting_point: v,
                        });
                    }
                    next.push(v);
                }
            }
            queue_backward = next;
            expand_forward = true;
        } else {
            break;
        }
    }

    log::debug!("bidirectional search exhausted both frontiers without meeting");
    Err(SalbpError::NoFeasiblePath)
}
