//! A single column of the homology matrix.

use std::collections::BTreeSet;

/// Simplex key: counts insertions along the filtration, unique and strictly
/// increasing across insertions, stable until the matching deletion. Signed,
/// because zigzag filtrations over long event streams can exceed 32 bits and
/// the engine uses negative values internally before the first arrow.
pub type Key = i64;

/// Stable slot index of a chain in the [`ChainCollection`] arena.
///
/// [`ChainCollection`]: super::ChainCollection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChainId(pub(crate) usize);

impl ChainId {
    /// The raw slot index, for diagnostics.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Class of a chain in the F ⊔ G ⊔ H partition of the homology basis.
///
/// F chains are unpaired and carry a birth index; G and H chains pair 1:1
/// with each other. The pairing is held by slot index rather than by
/// pointer, so chains can be inspected and asserted on freely in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainClass {
    /// Independent cycle, born at the given arrow index.
    F { birth: Key },
    /// Boundary cycle, paired with the H chain it bounds.
    G { partner: ChainId },
    /// Chain with nontrivial boundary, paired with its boundary in G.
    H { partner: ChainId },
}

/// One column of the evolving reduced boundary matrix: a GF(2) sparse vector
/// of simplex keys plus its lowest index and class.
#[derive(Debug, Clone)]
pub struct Chain {
    /// Support of the column. GF(2), so membership is the coefficient.
    pub(crate) column: BTreeSet<Key>,
    /// Lowest index of the chain. Equals the support maximum for every chain
    /// at rest; transiently diverges only for the chain being percolated out
    /// during a backward arrow.
    pub(crate) lowest: Key,
    pub(crate) class: ChainClass,
}

impl Chain {
    /// The support of the column, in increasing key order.
    pub fn column(&self) -> &BTreeSet<Key> {
        &self.column
    }

    /// The lowest index of the chain.
    pub fn lowest(&self) -> Key {
        self.lowest
    }

    pub fn class(&self) -> ChainClass {
        self.class
    }

    /// Birth index if the chain is in F.
    pub fn birth(&self) -> Option<Key> {
        match self.class {
            ChainClass::F { birth } => Some(birth),
            _ => None,
        }
    }

    /// Paired chain if the chain is in G or H.
    pub fn partner(&self) -> Option<ChainId> {
        match self.class {
            ChainClass::F { .. } => None,
            ChainClass::G { partner } | ChainClass::H { partner } => Some(partner),
        }
    }

    pub fn is_f(&self) -> bool {
        matches!(self.class, ChainClass::F { .. })
    }

    pub fn is_g(&self) -> bool {
        matches!(self.class, ChainClass::G { .. })
    }

    pub fn is_h(&self) -> bool {
        matches!(self.class, ChainClass::H { .. })
    }
}

/// GF(2) toggle: flip the coefficient of `key` in `column`. Returns true if
/// the key was inserted, false if it cancelled out.
pub(crate) fn toggle(column: &mut BTreeSet<Key>, key: Key) -> bool {
    if column.remove(&key) {
        false
    } else {
        column.insert(key);
        true
    }
}
