//! Safe membership handle for a fixed-size group of peer processes.
//!
//! The heavy lifting (process addressing, message buffering, collective
//! synchronization) lives in the external MPI runtime; this crate wraps the
//! handful of operations the coordination demos need behind a typed API.
//! Per MPI's default error handler, a failed transfer or collective aborts
//! the process; only joining the group and querying the node name can
//! observe and report failure.
use std::result::Result as StandardResult;

mod group;
pub use group::ProcessGroup;
pub use mpi::topology::Rank;

/// Channel identifier carried by directed transfers.
pub type Tag = i32;

#[derive(Debug, Copy, Clone)]
pub enum Error {
    /// Joining the process group failed (runtime refused initialization or
    /// was already initialized)
    InitFailure,
    /// The runtime could not report the name of this node
    NodeNameQuery,
}

pub type Result<T> = StandardResult<T, Error>;
