//! Validated problem input: tasks, durations, precedence arcs and cycle time.

use crate::error::SalbpError;

/// A validated SALBP-1 instance.
///
/// Node `0` is the synthetic source and node `n + 1` the synthetic sink;
/// real tasks occupy `1..=n`. `durations` is indexed by node id and always
/// has length `n + 2`, with `durations[0] == durations[n + 1] == 0`.
///
/// Every task without an explicit predecessor gets an implicit arc from the
/// source, and every task without an explicit successor gets an implicit arc
/// to the sink — callers of [`Instance::new`] do not need to supply those
/// arcs themselves.
#[derive(Debug, Clone)]
pub struct Instance {
    n: usize,
    durations: Vec<u64>,
    arcs: Vec<(usize, usize)>,
    cycle_time: u64,
}

impl Instance {
    /// Node id of the synthetic source.
    pub const SOURCE: usize = 0;

    /// Builds and validates an instance from Entry A's flat input shape.
    ///
    /// `durations` must have length `n`. `arcs` is a flat `(u, v)` list over
    /// the node id space `{0, 1..=n, n+1}`; the caller may omit source/sink
    /// arcs, as this constructor inserts them.
    pub fn new(
        n: usize,
        durations: &[u64],
        arcs: &[(usize, usize)],
        cycle_time: u64,
    ) -> Result<Self, SalbpError> {
        if n == 0 {
            return Err(SalbpError::EmptyInstance);
        }
        if cycle_time == 0 {
            return Err(SalbpError::ZeroCycleTime);
        }
        if durations.len() != n {
            return Err(SalbpError::DurationsLengthMismatch {
                got: durations.len(),
                expected: n,
            });
        }
        let sink = n + 1;
        for &(u, v) in arcs {
            if u > sink {
                return Err(SalbpError::TaskIdOutOfRange { task_id: u, n });
            }
            if v > sink {
                return Err(SalbpError::TaskIdOutOfRange { task_id: v, n });
            }
        }

        let mut full_durations = Vec::with_capacity(n + 2);
        full_durations.push(0); // source
        full_durations.extend_from_slice(durations);
        full_durations.push(0); // sink

        let mut has_pred = vec![false; n + 2];
        let mut has_succ = vec![false; n + 2];
        for &(u, v) in arcs {
            has_succ[u] = true;
            has_pred[v] = true;
        }

        let mut full_arcs = arcs.to_vec();
        for task in 1..=n {
            if !has_pred[task] {
                full_arcs.push((Self::SOURCE, task));
            }
        }
        for task in 1..=n {
            if !has_succ[task] {
                full_arcs.push((task, sink));
            }
        }

        log::debug!(
            "instance: n={n} tasks, {} explicit arcs, {} total arcs after source/sink insertion, cycle_time={cycle_time}",
            arcs.len(),
            full_arcs.len()
        );

        Ok(Instance {
            n,
            durations: full_durations,
            arcs: full_arcs,
            cycle_time,
        })
    }

    /// Number of real tasks.
    pub fn task_count(&self) -> usize {
        self.n
    }

    /// Total node count including source and sink (`n + 2`).
    pub fn node_count(&self) -> usize {
        self.n + 2
    }

    /// Node id of the synthetic sink (`n + 1`).
    pub fn sink(&self) -> usize {
        self.n + 1
    }

    /// Duration of a node, indexed by node id (`0..=n+1`).
    pub fn durations(&self) -> &[u64] {
        &self.durations
    }

    /// Precedence arcs over the full node space, including inserted
    /// source/sink arcs.
    pub fn arcs(&self) -> &[(usize, usize)] {
        &self.arcs
    }

    /// The cycle time `c`.
    pub fn cycle_time(&self) -> u64 {
        self.cycle_time
    }
}
