//! Selection of each rank's part in the directed transfer.
use procgroup::Rank;

/// Part a rank plays in the demo transfer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Role {
    /// Send the fixed value to the peer rank
    Send { to: Rank },
    /// Receive the value from the peer rank
    Receive { from: Rank },
    /// Take no part in the transfer
    Idle,
}

/// Pick the role of `rank` in a group of `size` members.
///
/// Groups with a single member skip the transfer entirely.
pub fn role(rank: Rank, size: Rank) -> Role {
    if size < 2 {
        return Role::Idle;
    }
    match rank {
        0 => Role::Send { to: 1 },
        1 => Role::Receive { from: 0 },
        _ => Role::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_member_group_skips_the_transfer() {
        assert_eq!(role(0, 1), Role::Idle);
    }

    #[test]
    fn rank_zero_sends_to_rank_one() {
        assert_eq!(role(0, 2), Role::Send { to: 1 });
        assert_eq!(role(0, 16), Role::Send { to: 1 });
    }

    #[test]
    fn rank_one_receives_from_rank_zero() {
        assert_eq!(role(1, 2), Role::Receive { from: 0 });
        assert_eq!(role(1, 16), Role::Receive { from: 0 });
    }

    #[test]
    fn higher_ranks_sit_out() {
        for rank in 2..8 {
            assert_eq!(role(rank, 8), Role::Idle);
        }
    }
}
