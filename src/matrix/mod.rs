//! Sparse GF(2) homology matrix: chains and their collection.
//!
//! The engine maintains the reduced boundary matrix of the zigzag filtration
//! as a set of *chains*. A chain is one column of the matrix: a GF(2) sparse
//! vector over simplex keys, together with its lowest index (the maximum key
//! in its support) and its class in the F/G/H partition of the compatible
//! homology basis:
//!
//! - **F**: an independent cycle, carrying a birth index;
//! - **G**: a boundary cycle, paired with the H chain it bounds;
//! - **H**: a chain with nontrivial boundary, paired with its G boundary.
//!
//! [`ChainCollection`] owns all chains in a slab arena and maintains two
//! derived indexes: the lowest-index lookup (at most one chain per lowest
//! index at any time) and row membership (for each key, the set of chains
//! whose support contains it — exactly the chains disturbed when that key is
//! removed).

mod chain;
mod collection;

pub use chain::{Chain, ChainClass, ChainId, Key};
pub use collection::ChainCollection;

pub(crate) use chain::toggle;
