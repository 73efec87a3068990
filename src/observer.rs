//! Engine observers: injectable counters for the reduction engine.
//!
//! The transposition and reduction loops are the hot paths of zigzag
//! persistence, and their cost profile (how many column additions a backward
//! arrow triggers, which transposition cases dominate) is worth measuring on
//! real inputs. Observation is injected through [`EngineObserver`] so the
//! default build pays nothing: the engine is generic over the observer and
//! [`NoopObserver`] compiles to empty calls.

use std::collections::HashMap;

/// The six transposition cases of the backward-arrow case table, named by
/// the classes of the moving chain `c_s` and its neighbor `c_t`. `Keep`
/// means `c_s` keeps its lowest index, `Swap` means the two chains exchange
/// lowest indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranspositionCase {
    FxH,
    FxFKeep,
    FxFSwap,
    HxF,
    HxHKeep,
    HxHSwap,
}

/// Hooks called by the engine while processing arrows. All methods default
/// to no-ops; implement only what you need.
pub trait EngineObserver {
    /// A forward arrow (cell insertion) was processed.
    fn forward_arrow(&mut self) {}

    /// A backward arrow (cell removal) was processed, after performing the
    /// given number of arrow transpositions.
    fn backward_arrow(&mut self, _transpositions: usize) {}

    /// One GF(2) column addition, with the sizes of both operands.
    fn column_addition(&mut self, _target_len: usize, _source_len: usize) {}

    /// One transposition of the case table was applied.
    fn transposition(&mut self, _case: TranspositionCase) {}
}

/// Observer that does nothing. The default for the engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl EngineObserver for NoopObserver {}

/// Observer that tallies engine activity.
#[derive(Debug, Default, Clone)]
pub struct CountingObserver {
    /// Number of forward arrows processed.
    pub forward_arrows: u64,
    /// Number of backward arrows processed.
    pub backward_arrows: u64,
    /// Number of GF(2) column additions.
    pub column_additions: u64,
    /// Total cells touched by column additions (sum of operand sizes).
    pub column_cells: u64,
    /// Transpositions performed, per case.
    pub transpositions: HashMap<TranspositionCase, u64>,
    /// Largest number of transpositions triggered by a single removal.
    pub max_transpositions_per_removal: usize,
}

impl CountingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total transpositions across all cases.
    pub fn total_transpositions(&self) -> u64 {
        self.transpositions.values().sum()
    }

    /// Average operand length per column addition.
    pub fn mean_column_length(&self) -> f64 {
        if self.column_additions == 0 {
            return 0.0;
        }
        self.column_cells as f64 / self.column_additions as f64
    }
}

impl EngineObserver for CountingObserver {
    fn forward_arrow(&mut self) {
        self.forward_arrows += 1;
    }

    fn backward_arrow(&mut self, transpositions: usize) {
        self.backward_arrows += 1;
        if transpositions > self.max_transpositions_per_removal {
            self.max_transpositions_per_removal = transpositions;
        }
    }

    fn column_addition(&mut self, target_len: usize, source_len: usize) {
        self.column_additions += 1;
        self.column_cells += (target_len + source_len) as u64;
    }

    fn transposition(&mut self, case: TranspositionCase) {
        *self.transpositions.entry(case).or_insert(0) += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_observer_tallies() {
        let mut obs = CountingObserver::new();
        obs.forward_arrow();
        obs.forward_arrow();
        obs.backward_arrow(3);
        obs.backward_arrow(1);
        obs.column_addition(4, 2);
        obs.transposition(TranspositionCase::FxFKeep);
        obs.transposition(TranspositionCase::FxFKeep);
        obs.transposition(TranspositionCase::HxF);

        assert_eq!(obs.forward_arrows, 2);
        assert_eq!(obs.backward_arrows, 2);
        assert_eq!(obs.max_transpositions_per_removal, 3);
        assert_eq!(obs.total_transpositions(), 3);
        assert_eq!(obs.transpositions[&TranspositionCase::FxFKeep], 2);
        assert!((obs.mean_column_length() - 6.0).abs() < 1e-12);
    }
}
