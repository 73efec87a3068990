//! Event model of a zigzag filtration.

use crate::matrix::Key;

/// One arrow of a zigzag filtration.
#[derive(Debug, Clone, PartialEq)]
pub enum ZigzagEvent {
    /// Forward arrow: a cell enters the complex.
    Insert {
        /// Key assigned to the cell, strictly increasing over insertions.
        key: Key,
        /// Keys of the boundary faces, all already present.
        boundary: Vec<Key>,
        /// Homological dimension of the cell.
        dimension: usize,
        /// Filtration value carried by this arrow.
        filtration: f64,
    },
    /// Backward arrow: a previously inserted cell leaves the complex.
    Remove {
        /// The key assigned at insertion time.
        key: Key,
        /// Homological dimension of the cell.
        dimension: usize,
        /// Filtration value carried by this arrow.
        filtration: f64,
    },
}

impl ZigzagEvent {
    /// The key of the cell this arrow inserts or removes.
    pub fn key(&self) -> Key {
        match *self {
            ZigzagEvent::Insert { key, .. } | ZigzagEvent::Remove { key, .. } => key,
        }
    }

    /// The filtration value carried by this arrow.
    pub fn filtration(&self) -> f64 {
        match *self {
            ZigzagEvent::Insert { filtration, .. } | ZigzagEvent::Remove { filtration, .. } => {
                filtration
            }
        }
    }

    pub fn is_insertion(&self) -> bool {
        matches!(self, ZigzagEvent::Insert { .. })
    }
}

/// Contract of the complex collaborator: a lazy forward sequence of arrows
/// plus the maximum homological dimension tracked by the filtration.
///
/// Keys are assigned in insertion order and stay stable until the matching
/// deletion; no interval is reported at `dim_max()`, the top tracked
/// dimension.
pub trait ZigzagComplex {
    /// Maximum dimension of any cell in the filtration.
    fn dim_max(&self) -> usize;

    /// The arrows of the filtration, in order.
    fn events(&self) -> Box<dyn Iterator<Item = ZigzagEvent> + '_>;
}
