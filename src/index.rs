use varisat::Var;

use crate::label::LabelId;
use crate::location::Location;

/// Dense bijection between `(cell, label)` pairs and solver variables.
///
/// Variable indices are assigned row-major over cells, then by ascending
/// label within a cell: `index = (row * side + col) * labels + (label - 1)`.
/// Indices cover exactly `0..side² * labels` with no gaps, which the SAT
/// engine expects for compact numbering. The mapping depends only on the
/// grid dimensions, so an encoder and decoder built from the same grid
/// always agree without sharing state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct VarIndex {
    side: usize,
    labels: usize,
}

impl VarIndex {
    pub(crate) fn new(side: usize, labels: usize) -> Self {
        Self { side, labels }
    }

    /// Total number of variables, `side² * labels`.
    pub(crate) fn len(&self) -> usize {
        self.side * self.side * self.labels
    }

    /// The variable asserting "`location` carries `label`".
    pub(crate) fn var(&self, location: Location, label: LabelId) -> Var {
        debug_assert!(location.0 < self.side && location.1 < self.side);
        debug_assert!((1..=self.labels).contains(&label));

        Var::from_index((location.0 * self.side + location.1) * self.labels + (label - 1))
    }

    /// Invert [`var`](Self::var).
    pub(crate) fn lookup(&self, var: Var) -> (Location, LabelId) {
        debug_assert!(var.index() < self.len());

        let cell = var.index() / self.labels;
        (Location(cell / self.side, cell % self.side), var.index() % self.labels + 1)
    }
}
