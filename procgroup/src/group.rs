//! Process group membership built on the runtime's world communicator.
use log::debug;
use mpi::{
    environment::Universe,
    point_to_point::Status,
    topology::SystemCommunicator,
    traits::{Communicator, CommunicatorCollectives, Destination, Equivalence, Root, Source},
};
use crate::{Error, Rank, Result, Tag};

/// Handle representing this process's membership in the group.
///
/// Created by [`ProcessGroup::join`]; rank, size and node assignment are
/// fixed for the life of the handle. Dropping it leaves the group and
/// finalizes the runtime.
pub struct ProcessGroup {
    universe: Universe,
}

impl ProcessGroup {
    /// Join the process group set up by the external launcher.
    pub fn join() -> Result<ProcessGroup> {
        let universe = mpi::initialize().ok_or(Error::InitFailure)?;
        let group = ProcessGroup { universe };
        debug!(
            "joined process group: rank {} of {}",
            group.rank(),
            group.size()
        );
        Ok(group)
    }

    fn world(&self) -> SystemCommunicator {
        self.universe.world()
    }

    /// Return the rank of this process within the group.
    pub fn rank(&self) -> Rank {
        self.world().rank()
    }

    /// Return the number of members in the group.
    pub fn size(&self) -> Rank {
        self.world().size()
    }

    /// Return the name of the node this process runs on.
    pub fn node_name(&self) -> Result<String> {
        mpi::environment::processor_name().map_err(|_| Error::NodeNameQuery)
    }

    /// Send a fixed-size value to `target`, blocking until the runtime has
    /// accepted the message.
    pub fn send<T>(&self, value: &T, target: Rank, tag: Tag)
    where
        T: Equivalence,
    {
        self.world().process_at_rank(target).send_with_tag(value, tag);
        debug!("sent transfer to rank {} (tag {})", target, tag);
    }

    /// Receive a fixed-size value from `source`, blocking until the matching
    /// message arrives.
    pub fn recv<T>(&self, source: Rank, tag: Tag) -> T
    where
        T: Equivalence,
    {
        let (value, status): (T, Status) =
            self.world().process_at_rank(source).receive_with_tag(tag);
        debug!(
            "received transfer from rank {} (tag {})",
            status.source_rank(),
            status.tag()
        );
        value
    }

    /// Block until every member of the group has entered the barrier.
    pub fn barrier(&self) {
        self.world().barrier();
    }

    /// Replace `value` on every rank with the root's value.
    pub fn broadcast<T>(&self, value: &mut T, root: Rank)
    where
        T: Equivalence,
    {
        self.world().process_at_rank(root).broadcast_into(value);
    }

    /// Collect one value per rank at the root, ordered by rank.
    ///
    /// Returns `Some(values)` on the root and `None` everywhere else.
    pub fn gather<T>(&self, value: &T, root: Rank) -> Option<Vec<T>>
    where
        T: Equivalence + Default + Clone,
    {
        let world = self.world();
        let root_process = world.process_at_rank(root);
        if self.rank() == root {
            let mut values = vec![T::default(); self.size() as usize];
            root_process.gather_into_root(value, &mut values[..]);
            Some(values)
        } else {
            root_process.gather_into(value);
            None
        }
    }
}

impl Drop for ProcessGroup {
    fn drop(&mut self) {
        // The runtime is finalized when the universe field drops.
        debug!("rank {} leaving the process group", self.rank());
    }
}
