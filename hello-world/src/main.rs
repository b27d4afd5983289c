//! Process-group hello world.
//!
//! Every rank announces itself, rank 0 sends a fixed value to rank 1, and
//! all ranks synchronize at a barrier before leaving the group.
//!
//! Run with: mpirun -np 4 hello-world
use procgroup::ProcessGroup;

fn main() {
    env_logger::init();

    let group = ProcessGroup::join().expect("failed to join the process group");
    hello_world::announce(&group).expect("failed to query the node name");

    hello_world::run_transfer(&group);

    // Every statement above is ordered before anything after this point,
    // on every rank.
    group.barrier();
}
