//! An exact solver for the Simple Assembly Line Balancing Problem, type 1
//! (SALBP-1): given a set of tasks with durations and precedence
//! constraints, and a fixed cycle time, find the minimum number of
//! stations that can host all tasks without violating the cycle time or
//! the precedence order.
//!
//! The solver works over the frontier graph of the precedence DAG rather
//! than searching station assignments directly: a *frontier* is an
//! antichain of tasks that forms a valid cut of the precedence order, and
//! a feasible station boundary corresponds to a transition between two
//! frontiers whose intermediate task set fits in one cycle. Enumerating
//! frontiers reduces to clique enumeration in the cocomparability graph of
//! the DAG, and finding the minimum station count reduces to a shortest
//! path in the (implicit) graph of frontier transitions, found with a
//! bidirectional, heuristically pruned search.
//!
//! ```
//! use salbp1::{solve, Instance};
//!
//! let instance = Instance::new(3, &[5, 5, 5], &[], 10).unwrap();
//! let solution = solve(&instance).unwrap();
//! assert_eq!(solution.station_count(), 2);
//! ```

mod bfs;
mod closure;
mod cocomparability;
mod error;
mod frontier;
mod instance;
mod path;
mod solver;

pub use error::SalbpError;
pub use instance::Instance;
pub use path::{Solution, Station};
pub use solver::solve;
