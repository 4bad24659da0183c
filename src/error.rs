//! Error types for the SALBP-1 solver pipeline.

use thiserror::Error;

/// Everything that can go wrong building an [`Instance`](crate::instance::Instance)
/// or running the solver against one.
///
/// Each variant corresponds to one of the error kinds of the solver design:
/// instance validation, the two frontier-lookup failures, and the no-path
/// case. There is deliberately no "allocation failure" variant — unlike the
/// C implementation this crate descends from, Rust's global allocator aborts
/// the process on an allocation failure rather than handing back a `Result`,
/// so there is no value this type could hold for that case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SalbpError {
    /// `n == 0`: an instance must contain at least one real task.
    #[error("instance has no tasks (n must be >= 1)")]
    EmptyInstance,

    /// `cycle_time == 0`: no task of positive duration could ever be scheduled.
    #[error("cycle time must be a positive integer, got 0")]
    ZeroCycleTime,

    /// A precedence arc referenced a task id outside `[0, n+1]`.
    #[error("task id {task_id} is out of range for an instance with {n} tasks")]
    TaskIdOutOfRange { task_id: usize, n: usize },

    /// The `durations` slice passed to [`Instance::new`](crate::instance::Instance::new)
    /// did not have exactly `n` entries.
    #[error("durations slice has {got} entries, expected {expected} (one per task)")]
    DurationsLengthMismatch { got: usize, expected: usize },

    /// The frontier enumerator never produced the `{source}` singleton.
    ///
    /// This indicates a bug in frontier enumeration, since the design
    /// guarantees the singleton is always emitted; it is kept as a checked
    /// error rather than a panic because it is cheap to detect and callers
    /// embedding this solver should get a `Result`, not a process abort.
    #[error("no frontier consisting of only the source node was found")]
    SourceFrontierNotFound,

    /// The frontier enumerator never produced the `{sink}` singleton.
    #[error("no frontier consisting of only the sink node was found")]
    SinkFrontierNotFound,

    /// The bidirectional search exhausted both frontiers without the two
    /// sides meeting. For a well-formed DAG with `cycle_time >= max(duration)`
    /// this cannot happen; it signals an infeasible cycle time.
    #[error("no feasible station assignment exists for the given cycle time")]
    NoFeasiblePath,
}
