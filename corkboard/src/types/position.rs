//! The position reconciler: dense zero-based ranks for a sibling set.
//!
//! Every ordered sibling set (boards, favourite boards, tasks within a
//! section) stores an integer `position`. Reordering is never an
//! incremental patch: the caller supplies the full desired ordering and
//! the reconciler re-enumerates it, so the positions written are exactly
//! `{0, 1, ..., n-1}`. Re-sending the same list reproduces the same
//! assignment, which is what makes a failed multi-write reconciliation
//! recoverable by re-issuing it.

/// Which end of the supplied list receives rank 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankDirection {
    /// `position = index`: the list's first element gets 0.
    ///
    /// Used for task lists inside a section.
    Forward,
    /// The list is reversed before indexing: the first element gets the
    /// highest position. Pairs with the descending sort on board reads,
    /// so the list's logical first element still displays first.
    Reverse,
}

/// Assign dense ranks to `items`, in write order.
///
/// Returns `(item, position)` pairs in the order the per-record writes
/// should be issued: list order for [`RankDirection::Forward`], reversed
/// list order for [`RankDirection::Reverse`]. An empty list yields no
/// writes.
pub fn dense_ranks<T: Clone>(items: &[T], direction: RankDirection) -> Vec<(T, i64)> {
    match direction {
        RankDirection::Forward => items
            .iter()
            .enumerate()
            .map(|(index, item)| (item.clone(), index as i64))
            .collect(),
        RankDirection::Reverse => items
            .iter()
            .rev()
            .enumerate()
            .map(|(index, item)| (item.clone(), index as i64))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_ranks() {
        let ranks = dense_ranks(&["a", "b", "c"], RankDirection::Forward);
        assert_eq!(ranks, vec![("a", 0), ("b", 1), ("c", 2)]);
    }

    #[test]
    fn test_reverse_ranks() {
        // First element of the list ends up with the highest position.
        let ranks = dense_ranks(&["c", "b", "a"], RankDirection::Reverse);
        assert_eq!(ranks, vec![("a", 0), ("b", 1), ("c", 2)]);
    }

    #[test]
    fn test_empty_list_reconciles_to_no_writes() {
        let ranks = dense_ranks::<&str>(&[], RankDirection::Forward);
        assert!(ranks.is_empty());
    }

    #[test]
    fn test_single_element() {
        assert_eq!(dense_ranks(&["x"], RankDirection::Reverse), vec![("x", 0)]);
    }

    #[test]
    fn test_ranks_are_dense() {
        let items: Vec<u32> = (0..17).collect();
        for direction in [RankDirection::Forward, RankDirection::Reverse] {
            let mut positions: Vec<i64> =
                dense_ranks(&items, direction).into_iter().map(|(_, p)| p).collect();
            positions.sort_unstable();
            assert_eq!(positions, (0..17).collect::<Vec<i64>>());
        }
    }

    #[test]
    fn test_idempotent() {
        let items = ["p", "q", "r", "s"];
        let first = dense_ranks(&items, RankDirection::Reverse);
        let second = dense_ranks(&items, RankDirection::Reverse);
        assert_eq!(first, second);
    }
}
