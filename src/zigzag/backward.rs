//! Backward arrows: percolation by arrow transpositions.

use log::{debug, trace};

use crate::error::ZigzagError;
use crate::matrix::{ChainClass, ChainId, Key};
use crate::observer::{EngineObserver, TranspositionCase};

use super::engine::ZigzagPersistence;

impl<O: EngineObserver> ZigzagPersistence<O> {
    /// Processes a backward arrow: the cell with the given key leaves the
    /// complex.
    ///
    /// The cell must be live and maximal (no live coface). Every chain whose
    /// support contains the key is disturbed; the doomed chain is percolated
    /// past them, in increasing lowest-index order, through local arrow
    /// transpositions. The chain left carrying the key is then deleted: if
    /// it is independent its interval closes, if it bounds a cycle that
    /// cycle becomes independent again, born now.
    pub fn remove_cell(
        &mut self,
        key: Key,
        dimension: usize,
        filtration: f64,
    ) -> Result<(), ZigzagError> {
        if self.chains.is_empty() {
            return Err(ZigzagError::EmptyComplexRemoval);
        }
        let doomed = self
            .chains
            .chain_with_lowest(key)
            .ok_or(ZigzagError::UnknownKey { key })?;

        self.num_arrow += 1;
        self.recorder.record_filtration(self.num_arrow, filtration);
        debug!(
            "arrow {}: remove cell {key} of dimension {dimension}",
            self.num_arrow
        );

        let mut disturbed: Vec<ChainId> = self.chains.row(key).collect();
        disturbed.sort_by_key(|&id| self.chains.chain(id).lowest());
        debug_assert_eq!(disturbed.first().copied(), Some(doomed));

        let mut curr = doomed;
        for &other in &disturbed[1..] {
            curr = self.transpose(curr, other);
        }
        self.observer.backward_arrow(disturbed.len() - 1);

        match self.chains.chain(curr).class() {
            ChainClass::F { birth } => {
                if dimension < self.dim_max {
                    self.recorder.record(dimension, birth, self.num_arrow);
                }
                self.births.remove_birth(birth);
            }
            ChainClass::H { partner } => {
                // the arrow index becomes a birth only here, minimal in <b
                self.births.add_birth_backward(self.num_arrow);
                self.chains
                    .set_class(partner, ChainClass::F { birth: self.num_arrow });
            }
            ChainClass::G { .. } => {
                debug_assert!(false, "a boundary cycle cannot carry a maximal cell");
            }
        }
        self.chains.remove_chain(curr);
        Ok(())
    }

    /// One arrow transposition: pushes `curr`, the chain carrying the doomed
    /// key, past `other`, the next disturbed chain. Returns the chain
    /// carrying the key afterwards.
    ///
    /// Both operands contain the key, so every column addition below cancels
    /// it out of exactly one of them. A swap exchanges only the lowest-index
    /// bookkeeping: the new carrier inherits the doomed key as its lowest
    /// index while its support maximum stays put, the one transient
    /// exception to the support-maximum invariant.
    fn transpose(&mut self, curr: ChainId, other: ChainId) -> ChainId {
        let case = match (
            self.chains.chain(curr).class(),
            self.chains.chain(other).class(),
        ) {
            (ChainClass::F { birth: b_s }, ChainClass::F { birth: b_t }) => {
                if self.births.birth_order(b_s, b_t) {
                    TranspositionCase::FxFKeep
                } else {
                    TranspositionCase::FxFSwap
                }
            }
            (ChainClass::F { .. }, ChainClass::H { .. }) => TranspositionCase::FxH,
            (ChainClass::H { .. }, ChainClass::F { .. }) => TranspositionCase::HxF,
            (ChainClass::H { partner: g_s }, ChainClass::H { partner: g_t }) => {
                // compare deaths: the lowest indices of the paired G chains
                let death_s = self.chains.chain(g_s).lowest();
                let death_t = self.chains.chain(g_t).lowest();
                if death_s < death_t {
                    TranspositionCase::HxHKeep
                } else {
                    TranspositionCase::HxHSwap
                }
            }
            (ChainClass::G { .. }, _) | (_, ChainClass::G { .. }) => {
                unreachable!("boundary cycles cannot contain a maximal cell")
            }
        };
        trace!("transposition {case:?}");
        self.observer.transposition(case);

        match case {
            // the carrier keeps the smaller birth; the sum, holding the
            // larger one, stays at the other chain's lowest index
            TranspositionCase::FxFKeep | TranspositionCase::FxH => {
                self.add_columns(other, curr);
                curr
            }
            TranspositionCase::FxFSwap | TranspositionCase::HxF => {
                self.add_columns(curr, other);
                self.chains.swap_lowest(curr, other);
                other
            }
            // boundaries sum alongside the chains, so both pairings persist
            TranspositionCase::HxHKeep => {
                let g_s = self.partner_of(curr);
                let g_t = self.partner_of(other);
                self.add_columns(g_t, g_s);
                self.add_columns(other, curr);
                curr
            }
            TranspositionCase::HxHSwap => {
                let g_s = self.partner_of(curr);
                let g_t = self.partner_of(other);
                self.add_columns(g_s, g_t);
                self.add_columns(curr, other);
                self.chains.swap_lowest(curr, other);
                other
            }
        }
    }

    fn partner_of(&self, id: ChainId) -> ChainId {
        match self.chains.chain(id).class() {
            ChainClass::G { partner } | ChainClass::H { partner } => partner,
            ChainClass::F { .. } => unreachable!("independent cycles are unpaired"),
        }
    }
}
