//! Forward arrows: boundary reduction and the reflection diamonds.

use std::collections::BTreeSet;

use log::{debug, trace};

use crate::error::ZigzagError;
use crate::matrix::{toggle, ChainClass, ChainId, Key};
use crate::observer::EngineObserver;

use super::engine::ZigzagPersistence;

/// Outcome of reducing the boundary of a new cell against the live basis.
pub(super) enum ReductionOutcome {
    /// The boundary is a sum of boundary cycles: homology grows by one
    /// independent cycle. `used_h` holds the H chains paired with the G
    /// chains the reduction consumed.
    Injective { used_h: Vec<ChainId> },
    /// Independent cycles participate in the boundary: homology shrinks.
    /// `used_f` is in decreasing lowest-index order.
    Surjective {
        used_f: Vec<ChainId>,
        used_h: Vec<ChainId>,
    },
}

impl<O: EngineObserver> ZigzagPersistence<O> {
    /// Processes a forward arrow: a cell with the given key and boundary
    /// enters the complex.
    ///
    /// `key` must exceed every previously seen arrow index; `boundary` lists
    /// the keys of the cell's faces, all currently present, with GF(2)
    /// multiplicity (a repeated key cancels out).
    pub fn insert_cell(
        &mut self,
        key: Key,
        boundary: &[Key],
        dimension: usize,
        filtration: f64,
    ) -> Result<(), ZigzagError> {
        if key <= self.num_arrow {
            return Err(ZigzagError::NonMonotoneKey {
                key,
                last: self.num_arrow,
            });
        }
        let outcome = self.reduce_boundary(boundary)?;

        self.num_arrow = key;
        self.recorder.record_filtration(key, filtration);
        self.observer.forward_arrow();
        debug!(
            "arrow {key}: insert {dimension}-cell with {} faces",
            boundary.len()
        );

        match outcome {
            ReductionOutcome::Injective { used_h } => self.injective_diamond(key, &used_h),
            ReductionOutcome::Surjective { used_f, used_h } => {
                self.surjective_diamond(key, dimension, used_f, &used_h)
            }
        }
        Ok(())
    }

    /// Expresses the boundary of the new cell in the current basis.
    ///
    /// Repeatedly cancels the maximal key of the working cycle against the
    /// unique chain with that lowest index. The working set stays a cycle
    /// throughout, and a cycle's support maximum is always the lowest index
    /// of a cycle chain, so only F and G chains are ever encountered.
    fn reduce_boundary(&self, boundary: &[Key]) -> Result<ReductionOutcome, ZigzagError> {
        let mut working: BTreeSet<Key> = BTreeSet::new();
        for &face in boundary {
            if self.chains.chain_with_lowest(face).is_none() {
                return Err(ZigzagError::MissingFace { key: face });
            }
            toggle(&mut working, face);
        }

        let mut used_f = Vec::new();
        let mut used_h = Vec::new();
        while let Some(&low) = working.iter().next_back() {
            let id = self
                .chains
                .chain_with_lowest(low)
                .ok_or(ZigzagError::MissingFace { key: low })?;
            let chain = self.chains.chain(id);
            match chain.class() {
                ChainClass::F { .. } => used_f.push(id),
                ChainClass::G { partner } => used_h.push(partner),
                ChainClass::H { .. } => {
                    unreachable!("a cycle's support maximum is the lowest index of a cycle chain")
                }
            }
            for &k in chain.column() {
                toggle(&mut working, k);
            }
        }

        if used_f.is_empty() {
            Ok(ReductionOutcome::Injective { used_h })
        } else {
            Ok(ReductionOutcome::Surjective { used_f, used_h })
        }
    }

    /// The boundary was already a boundary: the new cell closes an
    /// independent cycle, born now.
    fn injective_diamond(&mut self, key: Key, used_h: &[ChainId]) {
        // only injective arrows give birth; a surjective arrow's new chain
        // is an H chain and carries none
        self.births.add_birth_forward(key);
        let column = self.cell_chain(key, used_h);
        self.chains
            .insert_chain(column, key, ChainClass::F { birth: key });
        trace!("injective diamond at {key}");
    }

    /// The boundary involves independent cycles: one of them becomes a
    /// boundary, and the class with the maximal birth under `<b` dies.
    fn surjective_diamond(
        &mut self,
        key: Key,
        dimension: usize,
        used_f: Vec<ChainId>,
        used_h: &[ChainId],
    ) {
        let births: Vec<Key> = used_f
            .iter()
            .map(|&id| match self.chains.chain(id).class() {
                ChainClass::F { birth } => birth,
                _ => unreachable!("surjective diamond over a non-independent chain"),
            })
            .collect();
        // read all positions up front: the stolen entry leaves the order map
        // before the reassignment walk, and the stolen birth need not be fp's
        let positions: Vec<i64> = births.iter().map(|&b| self.births.position(b)).collect();

        // the chain with the maximal lowest index absorbs the others and
        // will bound the new cell's chain
        let fp = used_f[0];
        for &other in &used_f[1..] {
            self.add_columns(fp, other);
        }

        let mut available: BTreeSet<(i64, Key)> = positions
            .iter()
            .copied()
            .zip(births.iter().copied())
            .collect();
        let (_, stolen) = available
            .pop_last()
            .expect("surjective diamond without an F chain");
        self.recorder.record(dimension - 1, stolen, key);
        self.births.remove_birth(stolen);
        trace!("surjective diamond at {key}: the class born at {stolen} dies");

        // Reassign births to the survivors, walking from the smallest lowest
        // index upward. A chain whose own birth is still available keeps its
        // column; a chain whose birth was consumed becomes the cumulative sum
        // up to the previously modified chain (the sums telescope) and takes
        // the maximal birth still available.
        let mut last_modified = used_f.len() - 1;
        for i in (1..used_f.len()).rev() {
            if available.remove(&(positions[i], births[i])) {
                continue;
            }
            for j in i + 1..=last_modified {
                self.add_columns(used_f[i], used_f[j]);
            }
            last_modified = i;
            let (_, birth) = available.pop_last().expect("birth pool exhausted");
            self.chains.set_class(used_f[i], ChainClass::F { birth });
        }

        let column = self.cell_chain(key, used_h);
        let h_id = self
            .chains
            .insert_chain(column, key, ChainClass::H { partner: fp });
        self.chains.set_class(fp, ChainClass::G { partner: h_id });
    }

    /// The new cell's own chain: the cell plus the H chains consumed by the
    /// reduction. Its boundary is the reduced remainder of the cell's
    /// boundary (empty in the injective case, `fp` in the surjective one).
    fn cell_chain(&self, key: Key, used_h: &[ChainId]) -> BTreeSet<Key> {
        let mut column = BTreeSet::new();
        column.insert(key);
        for &h in used_h {
            for &k in self.chains.chain(h).column() {
                toggle(&mut column, k);
            }
        }
        column
    }
}
