//! Contract-violation errors.
//!
//! The zigzag engine is a deterministic single pass over the event stream:
//! any inconsistency in the stream (a boundary face that was never inserted,
//! a removal of an unknown cell, keys out of order) invalidates the whole
//! in-progress computation. These conditions are reported as errors and are
//! not recoverable; the only tunable behavior of the engine is the
//! reporting-time length filter applied when extracting the diagram.

use thiserror::Error;

use crate::matrix::Key;

/// A violation of the complex-collaborator contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ZigzagError {
    /// Insertion keys must be strictly increasing across the filtration.
    #[error("insertion key {key} does not follow the last arrow index {last}")]
    NonMonotoneKey { key: Key, last: Key },

    /// A boundary face references a cell with no live chain.
    #[error("boundary face {key} is not present in the complex")]
    MissingFace { key: Key },

    /// Removal of a key with no live chain: either the cell was never
    /// inserted, or it was already removed.
    #[error("no live chain has lowest index {key}")]
    UnknownKey { key: Key },

    /// Removal event received while the complex is empty.
    #[error("removal from an empty complex")]
    EmptyComplexRemoval,
}
