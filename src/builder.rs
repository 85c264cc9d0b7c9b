//! Programmatic construction of puzzle [`Grid`]s.

use ndarray::Array2;
use thiserror::Error;

use crate::cell::Cell;
use crate::grid::Grid;
use crate::label::LabelId;
use crate::location::Location;

/// Reasons a builder may become invalid while building.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum BuildError {
    /// A terminus was placed outside the bounds given to the builder.
    #[error("terminus placed outside the grid")]
    TerminusOutOfBounds,
    /// A terminus was given the reserved label 0.
    #[error("label 0 is reserved; labels start at 1")]
    ZeroLabel,
}

/// A builder for square puzzle grids.
///
/// Termini are placed one at a time; the label set becomes `1..=L` where
/// `L` is the highest label placed. Builders mutate themselves while
/// building but can be [`Clone`]d to save their state at some point.
#[derive(Clone)]
pub struct GridBuilder {
    side: usize,
    cells: Array2<Cell>,
    num_labels: usize,
    invalid_reasons: Vec<BuildError>,
}

impl GridBuilder {
    /// Construct a builder for an entirely free `side` by `side` grid.
    pub fn with_side(side: usize) -> Self {
        Self {
            side,
            cells: Array2::from_shape_simple_fn((side, side), Cell::default),
            num_labels: 0,
            invalid_reasons: Vec::new(),
        }
    }

    /// Place a terminus carrying `label` at `location`, replacing whatever
    /// was there.
    ///
    /// May cause the builder to enter an invalid state if `location` is out
    /// of bounds or `label` is 0. If the builder is already in an invalid
    /// state, this function does nothing.
    pub fn terminus(&mut self, location: Location, label: LabelId) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if label == 0 {
            self.invalid_reasons.push(BuildError::ZeroLabel);
            return self;
        }
        if location.0 >= self.side || location.1 >= self.side {
            self.invalid_reasons.push(BuildError::TerminusOutOfBounds);
            return self;
        }

        self.num_labels = self.num_labels.max(label);
        self.cells[location.as_index()] = Cell::Terminus { label };

        self
    }

    /// Convert the state of this builder into a [`Grid`].
    ///
    /// If the builder is invalid, the first [`BuildError`] encountered
    /// indicates why.
    pub fn build(&self) -> Result<Grid, BuildError> {
        match self.invalid_reasons.first() {
            Some(reason) => Err(*reason),
            None => Ok(Grid::new(self.cells.clone(), self.num_labels)),
        }
    }
}
