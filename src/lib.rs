//! # zigzag-persistence
//!
//! Zigzag persistent homology over GF(2), computed by the reflection and
//! transposition algorithm.
//!
//! ## What it computes
//!
//! A zigzag filtration is a sequence of cell complexes connected by
//! insertions and deletions of single cells, rather than the monotone nested
//! sequence of ordinary persistence. Its homology decomposes into a barcode:
//! a multiset of intervals, each recording the lifespan of an independent
//! homology class across the sequence. This crate maintains that
//! decomposition online, one arrow at a time.
//!
//! ## Algorithm
//!
//! The engine keeps a compatible homology basis as a sparse GF(2) matrix
//! whose columns are partitioned into three classes:
//!
//! - **F**: independent cycles, each carrying a birth index;
//! - **G**: boundary cycles, paired one-to-one with the chains bounding them;
//! - **H**: chains with nontrivial boundary, paired with their G boundaries.
//!
//! A forward arrow reduces the new cell's boundary against the basis and
//! applies an *injective* reflection diamond (a new cycle is born) or a
//! *surjective* one (a cycle becomes a boundary and the class with the
//! maximal birth dies). A backward arrow percolates the doomed cell to an
//! extremal position of the filtration through local arrow transpositions,
//! then deletes its chain.
//!
//! ## Usage
//!
//! ```
//! use zigzag_persistence::{ExplicitZigzag, ZigzagPersistence};
//!
//! let mut cpx = ExplicitZigzag::new();
//! let v0 = cpx.insert(&[], 0, 0.0);
//! let v1 = cpx.insert(&[], 0, 0.0);
//! let e = cpx.insert(&[v0, v1], 1, 1.0);
//! cpx.remove(e, 1, 2.0);
//!
//! let zz = ZigzagPersistence::compute(&cpx).unwrap();
//! for bar in zz.diagram(0.0) {
//!     println!("dim {}: [{}, {}]", bar.dim, bar.birth, bar.death);
//! }
//! ```
//!
//! Filtrations can also be streamed directly through
//! [`ZigzagPersistence::insert_cell`] and [`ZigzagPersistence::remove_cell`]
//! without materializing an event list.
//!
//! ## References
//!
//! - Carlsson & de Silva, "Zigzag persistence", Found. Comput. Math. (2010)
//! - Maria & Oudot, "Zigzag persistence via reflections and transpositions",
//!   SODA (2015)

pub mod diagram;
pub mod error;
pub mod filtration;
pub mod matrix;
pub mod observer;
pub mod zigzag;

pub use diagram::{IndexInterval, Interval};
pub use error::ZigzagError;
pub use filtration::{ExplicitZigzag, ZigzagComplex, ZigzagEvent};
pub use matrix::{Chain, ChainClass, ChainCollection, ChainId, Key};
pub use observer::{CountingObserver, EngineObserver, NoopObserver, TranspositionCase};
pub use zigzag::{BirthOrdering, ZigzagPersistence};
