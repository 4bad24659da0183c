//! C2: cocomparability graph `H` — the undirected complement of the
//! comparability relation.

use crate::closure::AncestorMatrix;

/// The cocomparability graph `H` of a precedence DAG.
///
/// `{i, j}` is an edge of `H` iff `i != j` and neither is an ancestor of the
/// other in the DAG. Like [`AncestorMatrix`](crate::closure::AncestorMatrix),
/// adjacency is stored as a flat row-major bitset.
#[derive(Debug, Clone)]
pub struct CocomparabilityGraph {
    n: usize,
    bits: Vec<bool>,
    edge_count: usize,
}

impl CocomparabilityGraph {
    /// Builds `H` from the ancestor matrix `A`.
    pub fn from_ancestors(ancestors: &AncestorMatrix) -> Self {
        let n = ancestors.len();
        let mut bits = vec![false; n * n];
        let mut edge_count = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                if ancestors.incomparable(i, j) {
                    bits[i * n + j] = true;
                    bits[j * n + i] = true;
                    edge_count += 1;
                }
            }
        }

        log::debug!("cocomparability graph: {n} nodes, {edge_count} edges");

        CocomparabilityGraph {
            n,
            bits,
            edge_count,
        }
    }

    #[inline]
    pub fn adjacent(&self, i: usize, j: usize) -> bool {
        self.bits[i * self.n + j]
    }

    /// Degree of `v` among vertices still present in `live` (a boolean mask
    /// of removed/live status, `true` meaning still live).
    pub fn degree_among(&self, v: usize, live: &[bool]) -> usize {
        (0..self.n)
            .filter(|&u| u != v && live[u] && self.adjacent(v, u))
            .count()
    }

    /// Neighbours of `v` still present in `live`.
    pub fn live_neighbors(&self, v: usize, live: &[bool]) -> Vec<usize> {
        (0..self.n)
            .filter(|&u| u != v && live[u] && self.adjacent(v, u))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// `true` iff `members` is pairwise adjacent, i.e. a clique of `H`.
    pub fn is_clique(&self, members: &[usize]) -> bool {
        for (a, &x) in members.iter().enumerate() {
            for &y in &members[a + 1..] {
                if !self.adjacent(x, y) {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn independent_tasks_form_a_complete_graph() {
        let a = AncestorMatrix::from_arcs(3, &[]);
        let h = CocomparabilityGraph::from_ancestors(&a);
        assert_eq!(h.edge_count(), 3);
        assert!(h.adjacent(0, 1));
        assert!(h.adjacent(1, 2));
        assert!(h.adjacent(0, 2));
    }

    #[test]
    fn chain_has_no_edges() {
        let a = AncestorMatrix::from_arcs(3, &[(0, 1), (1, 2)]);
        let h = CocomparabilityGraph::from_ancestors(&a);
        assert_eq!(h.edge_count(), 0);
    }

    #[test]
    fn is_clique_checks_pairwise_adjacency() {
        let a = AncestorMatrix::from_arcs(4, &[(0, 3)]);
        let h = CocomparabilityGraph::from_ancestors(&a);
        // 1 and 2 are incomparable with everything except each other via 0/3.
        assert!(h.is_clique(&[1, 2]));
        assert!(!h.is_clique(&[0, 1]));
    }
}
