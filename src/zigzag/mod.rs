//! The zigzag persistence engine.
//!
//! Implements the reflection and transposition algorithm for zigzag
//! persistent homology (Maria & Oudot). The engine consumes the arrows of a
//! zigzag filtration one by one and maintains a compatible homology basis as
//! a partition F ⊔ G ⊔ H of the live chains:
//!
//! - a **forward arrow** reduces the boundary of the new cell against the
//!   basis and applies an injective or surjective reflection diamond;
//! - a **backward arrow** percolates the doomed cell to an extremal position
//!   of the filtration through local arrow transpositions, then deletes its
//!   chain, closing an interval or promoting the paired boundary cycle.
//!
//! The computation is strictly single-threaded and stateful: every arrow's
//! outcome depends on the full accumulated state of all prior arrows.
//! Coefficients are in Z/2Z.

mod backward;
mod birth;
mod engine;
mod forward;

pub use birth::BirthOrdering;
pub use engine::ZigzagPersistence;
