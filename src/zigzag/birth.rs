//! The birth ordering `<b` over live arrow indices.

use std::collections::HashMap;

use crate::matrix::Key;

/// Maintains the total order `<b` on currently tracked birth indices.
///
/// `<b` is distinct from the numeric order on keys: when an arrow is
/// forward, its index becomes maximal in `<b`; when an arrow is backward,
/// its index becomes minimal. Positions are assigned from a monotonically
/// increasing `next_max` counter and a decreasing `next_min` counter, so an
/// assigned position is never renumbered and insertion is O(1).
#[derive(Debug, Default)]
pub struct BirthOrdering {
    positions: HashMap<Key, i64>,
    next_max: i64,
    next_min: i64,
}

impl BirthOrdering {
    pub fn new() -> Self {
        Self {
            positions: HashMap::new(),
            next_max: 0,
            next_min: -1,
        }
    }

    /// Registers `key` as maximal in `<b` (the arrow `key-1 -> key` is
    /// forward).
    pub fn add_birth_forward(&mut self, key: Key) {
        self.positions.insert(key, self.next_max);
        self.next_max += 1;
    }

    /// Registers `key` as minimal in `<b` (the arrow `key-1 <- key` is
    /// backward).
    pub fn add_birth_backward(&mut self, key: Key) {
        self.positions.insert(key, self.next_min);
        self.next_min -= 1;
    }

    /// Drops the tracking of a birth index once the class born there has
    /// died. Only dead births may be dropped: a birth can be reassigned to
    /// a chain other than the one created at that arrow, so the index of a
    /// removed cell is not necessarily free.
    pub fn remove_birth(&mut self, key: Key) {
        self.positions.remove(&key);
    }

    /// Number of tracked births: one per live independent cycle.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position of a tracked key in `<b`. Positions compare like `<b`.
    pub fn position(&self, key: Key) -> i64 {
        *self
            .positions
            .get(&key)
            .expect("birth index is not tracked")
    }

    /// True iff `k1 <b k2`.
    pub fn birth_order(&self, k1: Key, k2: Key) -> bool {
        self.position(k1) < self.position(k2)
    }

    /// True iff `k1 >b k2`.
    pub fn reverse_birth_order(&self, k1: Key, k2: Key) -> bool {
        self.position(k1) > self.position(k2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_is_maximal_backward_is_minimal() {
        // quiver: 0 -> 1 -> 2 <- 3 <- 4 -> 5
        let mut ord = BirthOrdering::new();
        ord.add_birth_forward(0);
        ord.add_birth_forward(1);
        ord.add_birth_forward(2);
        ord.add_birth_backward(3);
        ord.add_birth_backward(4);
        ord.add_birth_forward(5);

        assert!(ord.birth_order(0, 1));
        assert!(ord.birth_order(1, 2));
        // backward arrows are minimal at the time they occur
        assert!(ord.birth_order(3, 0));
        assert!(ord.birth_order(4, 3));
        // a later forward arrow dominates everything
        assert!(ord.birth_order(2, 5));
        assert!(ord.birth_order(4, 5));
        assert!(ord.reverse_birth_order(5, 0));
    }

    #[test]
    fn positions_survive_unrelated_removals() {
        let mut ord = BirthOrdering::new();
        ord.add_birth_forward(0);
        ord.add_birth_forward(1);
        ord.add_birth_forward(2);
        ord.remove_birth(1);
        assert!(ord.birth_order(0, 2));
        assert_eq!(ord.len(), 2);
    }
}
