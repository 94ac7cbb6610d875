//! Key-based join of two collapsed record sets into three partitions.

use indexmap::IndexMap;

use crate::types::WorkstationKey;

/// Outcome of [`join_by_key`]: every input key lands in exactly one
/// partition, so the three maps are pairwise disjoint and together
/// cover the union of both key sets.
#[derive(Debug, Clone)]
pub struct JoinPartitions<L, R> {
    /// Keys present on both sides, with both records.
    pub both: IndexMap<WorkstationKey, (L, R)>,
    /// Keys present only on the left side.
    pub left_only: IndexMap<WorkstationKey, L>,
    /// Keys present only on the right side.
    pub right_only: IndexMap<WorkstationKey, R>,
}

impl<L, R> JoinPartitions<L, R> {
    /// Total number of distinct keys across the three partitions.
    pub fn total_keys(&self) -> usize {
        self.both.len() + self.left_only.len() + self.right_only.len()
    }
}

/// Joins two keyed record sets in linear time.
///
/// `both` and `left_only` follow the left map's key order; `right_only`
/// follows the right map's key order.
pub fn join_by_key<L, R>(
    left: IndexMap<WorkstationKey, L>,
    right: IndexMap<WorkstationKey, R>,
) -> JoinPartitions<L, R> {
    let mut shared: IndexMap<WorkstationKey, R> = IndexMap::new();
    let mut right_only: IndexMap<WorkstationKey, R> = IndexMap::new();
    for (key, value) in right {
        if left.contains_key(&key) {
            shared.insert(key, value);
        } else {
            right_only.insert(key, value);
        }
    }

    let mut both: IndexMap<WorkstationKey, (L, R)> = IndexMap::new();
    let mut left_only: IndexMap<WorkstationKey, L> = IndexMap::new();
    for (key, value) in left {
        match shared.swap_remove(&key) {
            Some(counterpart) => {
                both.insert(key, (value, counterpart));
            }
            None => {
                left_only.insert(key, value);
            }
        }
    }

    JoinPartitions {
        both,
        left_only,
        right_only,
    }
}
