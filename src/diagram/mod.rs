//! Persistence diagram: abstract intervals and their resolution.
//!
//! The engine records intervals over abstract arrow indices as features die
//! (or are pinched by a surjective diamond). Arrow indices are resolved to
//! real filtration values through a breakpoint table that is appended
//! whenever the filtration value of the event stream changes. Resolution,
//! filtering and ordering of the reported diagram live here.

mod interval;
mod recorder;

pub use interval::{IndexInterval, Interval};
pub use recorder::DiagramRecorder;
