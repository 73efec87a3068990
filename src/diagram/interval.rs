//! Persistence interval types.

use std::cmp::Ordering;

use crate::matrix::Key;

/// A half-open interval `[birth, death)` over abstract arrow indices.
///
/// The feature exists in every complex of the filtration reached by an
/// arrow index in `birth..death`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexInterval {
    /// Homological dimension of the feature.
    pub dim: usize,
    /// Arrow index at which the feature appears.
    pub birth: Key,
    /// Arrow index at which the feature is gone (exclusive).
    pub death: Key,
}

/// An interval resolved to filtration values, with `birth <= death`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub dim: usize,
    pub birth: f64,
    pub death: f64,
}

impl Interval {
    /// Absolute length of the interval. Zero when both endpoints coincide,
    /// also when both are infinite.
    pub fn length(&self) -> f64 {
        if self.birth == self.death {
            return 0.0;
        }
        (self.birth - self.death).abs()
    }
}

/// Diagram order: decreasing length, then increasing dimension, then
/// lexicographic on (birth, death).
pub(crate) fn cmp_by_length(p: &Interval, q: &Interval) -> Ordering {
    q.length()
        .total_cmp(&p.length())
        .then(p.dim.cmp(&q.dim))
        .then(p.birth.total_cmp(&q.birth))
        .then(p.death.total_cmp(&q.death))
}
