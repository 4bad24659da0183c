//! C3: frontier enumeration — every clique of the cocomparability graph
//! `H`, reached via degeneracy-ordered pivot expansion, each carrying a
//! forward/backward work heuristic.

use crate::closure::AncestorMatrix;
use crate::cocomparability::CocomparabilityGraph;

/// A single frontier: a non-empty antichain (clique of `H`) plus the two
/// heuristics attached at emission.
///
/// The heuristics are computed from the pivot vertex alone (the vertex that
/// was being expanded when this frontier was emitted), not from the full
/// member set — every frontier sharing a pivot shares the same heuristic
/// pair. This matches the source algorithm and is required for the pruning
/// rule in the bidirectional search to remain an admissible lower bound.
#[derive(Debug, Clone)]
pub struct Frontier {
    members: Vec<usize>,
    heuristic_forward: u64,
    heuristic_backward: u64,
}

impl Frontier {
    /// Node ids in this frontier, sorted ascending.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Lower bound on the total duration of work that must precede this
    /// frontier.
    pub fn heuristic_forward(&self) -> u64 {
        self.heuristic_forward
    }

    /// Lower bound on the total duration of work that must succeed this
    /// frontier.
    pub fn heuristic_backward(&self) -> u64 {
        self.heuristic_backward
    }

    fn is_singleton(&self, node: usize) -> bool {
        self.members.len() == 1 && self.members[0] == node
    }
}

/// All frontiers enumerated for an instance, in emission order. A
/// frontier's identity is its index into this list.
#[derive(Debug, Clone)]
pub struct FrontierList {
    frontiers: Vec<Frontier>,
}

impl FrontierList {
    pub fn len(&self) -> usize {
        self.frontiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frontiers.is_empty()
    }

    pub fn get(&self, index: usize) -> &Frontier {
        &self.frontiers[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Frontier> {
        self.frontiers.iter()
    }

    /// Index of the first (only, by construction) frontier that is exactly
    /// `{node}`.
    pub fn find_singleton(&self, node: usize) -> Option<usize> {
        self.frontiers.iter().position(|f| f.is_singleton(node))
    }
}

/// Computes the degeneracy ordering of `h`: repeatedly remove a live vertex
/// of minimum current degree (ties broken by smallest index), recording the
/// removal order.
fn degeneracy_order(h: &CocomparabilityGraph) -> Vec<usize> {
    let n = h.len();
    let mut live = vec![true; n];
    let mut degree: Vec<usize> = (0..n).map(|v| h.degree_among(v, &live)).collect();
    let mut order = Vec::with_capacity(n);

    for _ in 0..n {
        let next = (0..n)
            .filter(|&v| live[v])
            .min_by_key(|&v| (degree[v], v))
            .expect("live set is non-empty while iterations remain");

        order.push(next);
        live[next] = false;
        for neighbor in h.live_neighbors(next, &live) {
            degree[neighbor] -= 1;
        }
    }

    order
}

/// Enumerates, for pivot `x`, every subset `S` of `neighbors` such that
/// `{x} ∪ S` is a clique of `h`, appending one [`Frontier`] per subset.
///
/// This performs the same combinatorial enumeration as the source
/// algorithm's bitmask expansion, restated as index-based backtracking so
/// the subset count is bounded by recursion depth rather than a `1 << k`
/// mask (which would overflow for wide pivots).
fn emit_cliques_with_pivot(
    x: usize,
    neighbors: &[usize],
    h: &CocomparabilityGraph,
    heuristic_forward: u64,
    heuristic_backward: u64,
    out: &mut Vec<Frontier>,
) {
    fn backtrack(
        neighbors: &[usize],
        idx: usize,
        current: &mut Vec<usize>,
        h: &CocomparabilityGraph,
        heuristic_forward: u64,
        heuristic_backward: u64,
        out: &mut Vec<Frontier>,
    ) {
        if idx == neighbors.len() {
            let mut members = current.clone();
            members.sort_unstable();
            out.push(Frontier {
                members,
                heuristic_forward,
                heuristic_backward,
            });
            return;
        }

        // Branch 1: exclude neighbors[idx].
        backtrack(
            neighbors,
            idx + 1,
            current,
            h,
            heuristic_forward,
            heuristic_backward,
            out,
        );

        // Branch 2: include it, if doing so keeps `current` a clique.
        let candidate = neighbors[idx];
        if current.iter().all(|&m| h.adjacent(m, candidate)) {
            current.push(candidate);
            backtrack(
                neighbors,
                idx + 1,
                current,
                h,
                heuristic_forward,
                heuristic_backward,
                out,
            );
            current.pop();
        }
    }

    let mut current = vec![x];
    backtrack(
        neighbors,
        0,
        &mut current,
        h,
        heuristic_forward,
        heuristic_backward,
        out,
    );
}

/// Enumerates every frontier of `h`, attaching per-pivot heuristics derived
/// from `ancestors` and `durations`.
pub fn enumerate_frontiers(
    h: &CocomparabilityGraph,
    ancestors: &AncestorMatrix,
    durations: &[u64],
) -> FrontierList {
    let n = h.len();
    let order = degeneracy_order(h);
    let mut live = vec![true; n];
    let mut frontiers = Vec::new();

    for x in order {
        let heuristic_forward: u64 = (0..n)
            .filter(|&i| i != x && ancestors.is_ancestor(i, x))
            .map(|i| durations[i])
            .sum();
        let heuristic_backward: u64 = (0..n)
            .filter(|&i| i != x && ancestors.is_ancestor(x, i))
            .map(|i| durations[i])
            .sum();

        let neighbors = h.live_neighbors(x, &live);
        emit_cliques_with_pivot(x, &neighbors, h, heuristic_forward, heuristic_backward, &mut frontiers);

        live[x] = false;
    }

    log::debug!("frontier enumeration: {} frontiers emitted over {n} nodes", frontiers.len());

    FrontierList { frontiers }
}
