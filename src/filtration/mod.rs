//! Zigzag filtration events and the complex-collaborator contract.
//!
//! The engine does not build complexes: it consumes a lazy forward sequence
//! of events supplied by a collaborator (a simplicial complex driving an
//! oscillating-Rips sweep, an explicit event list, ...). Each event carries
//! an arrow direction, a filtration value (monotone per contiguous run, not
//! globally monotone), and for insertions a pre-assigned strictly-increasing
//! key plus the boundary of the new cell as keys of already-present faces.

mod event;
mod explicit;

pub use event::{ZigzagComplex, ZigzagEvent};
pub use explicit::ExplicitZigzag;
