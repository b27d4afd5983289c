//! Extended demo adding collective data movement.
//!
//! Runs the same announce/transfer/barrier sequence as the hello-world
//! binary, then broadcasts a number from the root and gathers one value per
//! rank back to it.
//!
//! Run with: mpirun -np 4 collectives
use hello_world::{gather_contribution, BROADCAST_NUMBER, ROOT_RANK};
use procgroup::ProcessGroup;

fn main() {
    env_logger::init();

    let group = ProcessGroup::join().expect("failed to join the process group");
    let rank = group.rank();
    hello_world::announce(&group).expect("failed to query the node name");

    hello_world::run_transfer(&group);
    group.barrier();

    let mut number = if rank == ROOT_RANK { BROADCAST_NUMBER } else { 0 };
    group.broadcast(&mut number, ROOT_RANK);
    println!("Process {} received broadcast: {}", rank, number);

    let contribution = gather_contribution(rank);
    if let Some(values) = group.gather(&contribution, ROOT_RANK) {
        println!("Process {} gathered data: {:?}", rank, values);
    }

    // Order all demo output before the completion message.
    group.barrier();
    if rank == ROOT_RANK {
        println!("Process group demo completed successfully");
    }
}
