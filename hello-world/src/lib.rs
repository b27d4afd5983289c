//! Shared pieces of the coordination demo binaries.
use log::debug;
use procgroup::{ProcessGroup, Rank, Result, Tag};

pub mod transfer;
use transfer::Role;

/// Value carried by the rank 0 -> rank 1 transfer.
pub const MESSAGE_VALUE: i32 = 42;
/// Channel identifier of that transfer.
pub const MESSAGE_TAG: Tag = 0;
/// Rank that originates broadcasts and collects gathers.
pub const ROOT_RANK: Rank = 0;
/// Number broadcast from the root in the collectives demo.
pub const BROADCAST_NUMBER: i32 = 123;

/// Value `rank` contributes to the gather demo.
pub fn gather_contribution(rank: Rank) -> i32 {
    rank * 10
}

/// Print this rank's identity line.
pub fn announce(group: &ProcessGroup) -> Result<()> {
    let node_name = group.node_name()?;
    println!(
        "Hello from process {} out of {} on {}",
        group.rank(),
        group.size(),
        node_name
    );
    Ok(())
}

/// Run this rank's part of the directed transfer and report it.
pub fn run_transfer(group: &ProcessGroup) {
    let rank = group.rank();
    match transfer::role(rank, group.size()) {
        Role::Send { to } => {
            group.send(&MESSAGE_VALUE, to, MESSAGE_TAG);
            println!(
                "Process {} sent message: {} to process {}",
                rank, MESSAGE_VALUE, to
            );
        }
        Role::Receive { from } => {
            let value: i32 = group.recv(from, MESSAGE_TAG);
            println!(
                "Process {} received message: {} from process {}",
                rank, value, from
            );
        }
        Role::Idle => debug!("rank {} sits out the transfer", rank),
    }
}
