//! Engine state, event dispatch and diagram extraction.

use std::io::{self, Write};

use log::debug;

use crate::diagram::{DiagramRecorder, IndexInterval, Interval};
use crate::error::ZigzagError;
use crate::filtration::{ZigzagComplex, ZigzagEvent};
use crate::matrix::{ChainCollection, ChainId, Key};
use crate::observer::{EngineObserver, NoopObserver};

use super::birth::BirthOrdering;

/// Zigzag persistent homology of a zigzag filtered complex.
///
/// The engine starts against the empty complex and is fed arrows either
/// through [`ZigzagPersistence::compute`] (whole filtration at once) or
/// through [`insert_cell`]/[`remove_cell`] (streaming). Intervals are
/// recorded over abstract arrow indices and resolved to filtration values
/// when the diagram is extracted.
///
/// [`insert_cell`]: ZigzagPersistence::insert_cell
/// [`remove_cell`]: ZigzagPersistence::remove_cell
#[derive(Debug)]
pub struct ZigzagPersistence<O: EngineObserver = NoopObserver> {
    pub(super) chains: ChainCollection,
    pub(super) births: BirthOrdering,
    pub(super) recorder: DiagramRecorder,
    pub(super) observer: O,
    /// Index of the last processed arrow; -1 before the first arrow.
    pub(super) num_arrow: Key,
    /// Maximum tracked dimension; no interval is reported at this dimension.
    pub(super) dim_max: usize,
}

impl ZigzagPersistence<NoopObserver> {
    /// An engine over the empty complex, tracking dimensions `< dim_max`.
    pub fn new(dim_max: usize) -> Self {
        Self::with_observer(dim_max, NoopObserver)
    }

    /// Computes the zigzag persistence of a whole filtration.
    pub fn compute<C: ZigzagComplex>(complex: &C) -> Result<Self, ZigzagError> {
        let mut zz = Self::new(complex.dim_max());
        zz.process(complex.events())?;
        Ok(zz)
    }
}

impl<O: EngineObserver> ZigzagPersistence<O> {
    /// Like [`ZigzagPersistence::new`], with an injected observer.
    pub fn with_observer(dim_max: usize, observer: O) -> Self {
        Self {
            chains: ChainCollection::new(),
            births: BirthOrdering::new(),
            recorder: DiagramRecorder::new(),
            observer,
            num_arrow: -1,
            dim_max,
        }
    }

    /// Processes a sequence of arrows in order.
    pub fn process<I>(&mut self, events: I) -> Result<(), ZigzagError>
    where
        I: IntoIterator<Item = ZigzagEvent>,
    {
        for event in events {
            match event {
                ZigzagEvent::Insert {
                    key,
                    boundary,
                    dimension,
                    filtration,
                } => self.insert_cell(key, &boundary, dimension, filtration)?,
                ZigzagEvent::Remove {
                    key,
                    dimension,
                    filtration,
                } => self.remove_cell(key, dimension, filtration)?,
            }
        }
        if !self.chains.is_empty() {
            debug!("{} chains remain live after the last arrow", self.chains.len());
        }
        Ok(())
    }

    /// Maximum tracked dimension.
    pub fn dim_max(&self) -> usize {
        self.dim_max
    }

    /// Index of the last processed arrow, -1 before the first.
    pub fn current_index(&self) -> Key {
        self.num_arrow
    }

    /// Read-only view of the live homology matrix.
    pub fn matrix(&self) -> &ChainCollection {
        &self.chains
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// The abstract index persistence diagram, in recording order.
    pub fn index_diagram(&self) -> &[IndexInterval] {
        self.recorder.index_intervals()
    }

    /// The resolved persistence diagram; intervals of length
    /// `<= shortest_interval` (degenerate ones in particular) are dropped.
    pub fn diagram(&self, shortest_interval: f64) -> Vec<Interval> {
        self.recorder.diagram(shortest_interval)
    }

    /// Writes the resolved diagram as text, sorted by decreasing length.
    pub fn write_diagram<W: Write>(&self, os: W, shortest_interval: f64) -> io::Result<()> {
        self.recorder.write_diagram(os, shortest_interval)
    }

    /// GF(2) column addition `target <- target + source`, reported to the
    /// observer.
    pub(super) fn add_columns(&mut self, target: ChainId, source: ChainId) {
        self.observer.column_addition(
            self.chains.chain(target).column().len(),
            self.chains.chain(source).column().len(),
        );
        self.chains.add_column(target, source);
    }
}
