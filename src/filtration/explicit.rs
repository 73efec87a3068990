//! Explicit event-list zigzag filtration.

use std::collections::HashSet;

use crate::matrix::Key;

use super::event::{ZigzagComplex, ZigzagEvent};

/// A zigzag filtration given as an explicit list of events.
///
/// Keys are assigned automatically: every arrow advances the index by one,
/// and an insertion takes the current index as its key, so keys coincide
/// with arrow indices. The builder checks the collaborator contract as the
/// sequence is assembled: boundary faces must be live at insertion time,
/// removals must target a live cell.
#[derive(Debug, Default)]
pub struct ExplicitZigzag {
    events: Vec<ZigzagEvent>,
    live: HashSet<Key>,
    dim_max: usize,
}

impl ExplicitZigzag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an insertion and returns the key assigned to the cell.
    ///
    /// Panics if a boundary face is not live: the resulting stream would
    /// violate the engine's preconditions anyway.
    pub fn insert(&mut self, boundary: &[Key], dimension: usize, filtration: f64) -> Key {
        for face in boundary {
            assert!(
                self.live.contains(face),
                "boundary face {face} is not live at insertion time"
            );
        }
        let key = self.events.len() as Key;
        self.live.insert(key);
        if dimension > self.dim_max {
            self.dim_max = dimension;
        }
        self.events.push(ZigzagEvent::Insert {
            key,
            boundary: boundary.to_vec(),
            dimension,
            filtration,
        });
        key
    }

    /// Appends a removal of a previously inserted cell.
    ///
    /// Panics if the cell is not live.
    pub fn remove(&mut self, key: Key, dimension: usize, filtration: f64) {
        assert!(self.live.remove(&key), "cell {key} is not live at removal");
        self.events.push(ZigzagEvent::Remove {
            key,
            dimension,
            filtration,
        });
    }

    /// Number of arrows in the filtration.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl ZigzagComplex for ExplicitZigzag {
    fn dim_max(&self) -> usize {
        self.dim_max
    }

    fn events(&self) -> Box<dyn Iterator<Item = ZigzagEvent> + '_> {
        Box::new(self.events.iter().cloned())
    }
}
