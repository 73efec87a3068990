//! The living set of chains, with lowest-index and row-membership indexes.

use std::collections::{BTreeSet, HashMap};

use super::chain::{toggle, Chain, ChainClass, ChainId, Key};

/// Arena of live chains plus the two derived lookups the engine needs:
///
/// - `low_to_chain`: the unique chain whose lowest index is a given key;
/// - `rows`: for each key, every chain whose column contains that key.
///
/// Chains are addressed by [`ChainId`], a slot index stable across resizes;
/// freed slots are recycled. The row index holds non-owning slot indices, so
/// a chain must be unlinked from every row before its slot is freed — this
/// is enforced by [`ChainCollection::remove_chain`] being the only way to
/// destroy a chain.
#[derive(Debug, Default)]
pub struct ChainCollection {
    slots: Vec<Option<Chain>>,
    free: Vec<usize>,
    low_to_chain: HashMap<Key, ChainId>,
    rows: HashMap<Key, BTreeSet<ChainId>>,
}

impl ChainCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live chains.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live chains, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (ChainId, &Chain)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|c| (ChainId(i), c)))
    }

    /// The chain occupying a slot, if live.
    pub fn get(&self, id: ChainId) -> Option<&Chain> {
        self.slots.get(id.0).and_then(|s| s.as_ref())
    }

    /// The unique chain whose lowest index is `key`, if any.
    pub fn chain_with_lowest(&self, key: Key) -> Option<ChainId> {
        self.low_to_chain.get(&key).copied()
    }

    /// Chains whose column contains `key` (the row of `key`), in arbitrary
    /// order.
    pub fn row(&self, key: Key) -> impl Iterator<Item = ChainId> + '_ {
        self.rows
            .get(&key)
            .into_iter()
            .flat_map(|row| row.iter().copied())
    }

    pub(crate) fn chain(&self, id: ChainId) -> &Chain {
        self.slots[id.0].as_ref().expect("stale chain id")
    }

    pub(crate) fn chain_mut(&mut self, id: ChainId) -> &mut Chain {
        self.slots[id.0].as_mut().expect("stale chain id")
    }

    pub(crate) fn set_class(&mut self, id: ChainId, class: ChainClass) {
        self.chain_mut(id).class = class;
    }

    /// Inserts a new chain. `lowest` must be the support maximum of `column`
    /// and must not collide with the lowest index of any live chain.
    pub(crate) fn insert_chain(
        &mut self,
        column: BTreeSet<Key>,
        lowest: Key,
        class: ChainClass,
    ) -> ChainId {
        debug_assert_eq!(column.iter().next_back().copied(), Some(lowest));
        debug_assert!(!self.low_to_chain.contains_key(&lowest));

        let id = match self.free.pop() {
            Some(slot) => ChainId(slot),
            None => {
                self.slots.push(None);
                ChainId(self.slots.len() - 1)
            }
        };
        for &key in &column {
            self.rows.entry(key).or_default().insert(id);
        }
        self.low_to_chain.insert(lowest, id);
        self.slots[id.0] = Some(Chain {
            column,
            lowest,
            class,
        });
        id
    }

    /// GF(2) column addition `target <- target + source`, maintaining row
    /// membership. Lowest indices are positional bookkeeping and are left
    /// untouched; callers swap them explicitly when a transposition demands
    /// it.
    pub(crate) fn add_column(&mut self, target: ChainId, source: ChainId) {
        debug_assert_ne!(target, source);
        let keys: Vec<Key> = self.chain(source).column.iter().copied().collect();
        for key in keys {
            let inserted = toggle(&mut self.chain_mut(target).column, key);
            let row = self.rows.entry(key).or_default();
            if inserted {
                row.insert(target);
            } else {
                row.remove(&target);
                if row.is_empty() {
                    self.rows.remove(&key);
                }
            }
        }
    }

    /// Exchanges the lowest indices (and lookup entries) of two chains
    /// without moving column content.
    pub(crate) fn swap_lowest(&mut self, a: ChainId, b: ChainId) {
        let low_a = self.chain(a).lowest;
        let low_b = self.chain(b).lowest;
        self.chain_mut(a).lowest = low_b;
        self.chain_mut(b).lowest = low_a;
        self.low_to_chain.insert(low_a, b);
        self.low_to_chain.insert(low_b, a);
    }

    /// Destroys a chain: unlinks it from every row it appears in, drops its
    /// lowest-index entry, and frees its slot.
    pub(crate) fn remove_chain(&mut self, id: ChainId) -> Chain {
        let chain = self.slots[id.0].take().expect("stale chain id");
        for &key in &chain.column {
            if let Some(row) = self.rows.get_mut(&key) {
                row.remove(&id);
                if row.is_empty() {
                    self.rows.remove(&key);
                }
            }
        }
        self.low_to_chain.remove(&chain.lowest);
        self.free.push(id.0);
        chain
    }
}
