//! Interval recording and index-to-filtration resolution.

use std::io::{self, Write};

use crate::matrix::Key;

use super::interval::{cmp_by_length, IndexInterval, Interval};

/// Breakpoint table mapping arrow indices to filtration values.
///
/// Consecutive entries `(i, f)`, `(j, f')` mean every arrow with index in
/// `i..j` carries filtration value `f`. Entries are appended only when the
/// value changes, so the table stays sorted by index.
#[derive(Debug, Default)]
struct FiltrationValues {
    breakpoints: Vec<(Key, f64)>,
}

impl FiltrationValues {
    /// Records that the arrow at `index` carries `value`, if it differs
    /// from the current value.
    fn record(&mut self, index: Key, value: f64) {
        match self.breakpoints.last() {
            Some(&(_, last)) if last == value => {}
            _ => self.breakpoints.push((index, value)),
        }
    }

    /// Value at the largest breakpoint index `<= index`.
    fn value_at(&self, index: Key) -> f64 {
        let pos = self.breakpoints.partition_point(|&(i, _)| i <= index);
        debug_assert!(pos > 0, "index {index} precedes the first breakpoint");
        self.breakpoints[pos.saturating_sub(1)].1
    }
}

/// Collects abstract intervals during the computation and resolves them to
/// filtration values on extraction.
#[derive(Debug, Default)]
pub struct DiagramRecorder {
    intervals: Vec<IndexInterval>,
    values: FiltrationValues,
}

impl DiagramRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the half-open index interval `[birth, death)` in dimension
    /// `dim`.
    pub(crate) fn record(&mut self, dim: usize, birth: Key, death: Key) {
        self.intervals.push(IndexInterval { dim, birth, death });
    }

    /// Records the filtration value carried by the arrow at `index`.
    pub(crate) fn record_filtration(&mut self, index: Key, value: f64) {
        self.values.record(index, value);
    }

    /// The abstract index intervals, in recording order.
    pub fn index_intervals(&self) -> &[IndexInterval] {
        &self.intervals
    }

    /// Resolves an index interval: birth takes the value of the largest
    /// breakpoint `<= birth`, death the value of the largest breakpoint
    /// `<= death - 1` (half-open semantics: the feature last exists at
    /// arrow `death - 1`).
    fn resolve(&self, iv: &IndexInterval) -> Interval {
        let birth = self.values.value_at(iv.birth);
        let death = self.values.value_at(iv.death - 1);
        if birth <= death {
            Interval {
                dim: iv.dim,
                birth,
                death,
            }
        } else {
            Interval {
                dim: iv.dim,
                birth: death,
                death: birth,
            }
        }
    }

    /// The resolved persistence diagram.
    ///
    /// Degenerate intervals (equal resolved endpoints) and intervals of
    /// length `<= shortest_interval` are dropped; the rest are sorted by
    /// decreasing length, ties broken by dimension then lexicographically
    /// by (birth, death).
    pub fn diagram(&self, shortest_interval: f64) -> Vec<Interval> {
        let mut bars: Vec<Interval> = self
            .intervals
            .iter()
            .map(|iv| self.resolve(iv))
            .filter(|bar| bar.length() > shortest_interval)
            .collect();
        bars.sort_by(cmp_by_length);
        bars
    }

    /// Writes the diagram as text: a header line, then one line per
    /// interval in the form `<dim> <birth> <death> - [<length>]`.
    pub fn write_diagram<W: Write>(&self, mut os: W, shortest_interval: f64) -> io::Result<()> {
        writeln!(os, "# dim  birth  death  [length]")?;
        for bar in self.diagram(shortest_interval) {
            writeln!(
                os,
                "{} {} {} - [{}]",
                bar.dim,
                bar.birth,
                bar.death,
                bar.length()
            )?;
        }
        Ok(())
    }
}
