use std::fmt::{Display, Formatter, Write};

use itertools::Itertools;
use ndarray::Array2;
use strum::VariantArray;

use crate::cell::Cell;
use crate::label::LabelId;
use crate::location::Location;
use crate::solver::{GridSolver, SolveError};
use crate::step::Step;

/// A square Numberlink puzzle grid.
///
/// Every cell is either a terminus carrying one of the labels `1..=L` or
/// free. [`Grid`]s are built by a [`GridBuilder`](crate::GridBuilder) or
/// parsed from text by [`parse`](crate::parse::parse); solving one consumes
/// it and yields a copy with every free cell resolved to a label.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    cells: Array2<Cell>,
    side: usize,
    num_labels: usize,
}

impl Grid {
    pub(crate) fn new(cells: Array2<Cell>, num_labels: usize) -> Self {
        let side = cells.nrows();
        debug_assert_eq!(side, cells.ncols());

        Self { cells, side, num_labels }
    }

    /// The side length of this grid.
    pub fn side(&self) -> usize {
        self.side
    }

    /// The size of the label set, i.e. the highest label on any terminus.
    pub fn num_labels(&self) -> usize {
        self.num_labels
    }

    /// The label at `location`, or [`None`] if the cell is still free.
    pub fn label_at(&self, location: Location) -> Option<LabelId> {
        self.cells[location.as_index()].label()
    }

    pub(crate) fn cell(&self, location: Location) -> Cell {
        self.cells[location.as_index()]
    }

    /// All locations, row-major.
    pub(crate) fn locations(&self) -> impl Iterator<Item = Location> {
        (0..self.side).cartesian_product(0..self.side).map(Location::from)
    }

    /// The in-bounds orthogonal neighbors of `location`, in up, right,
    /// down, left order. Yields 2 (corner), 3 (edge), or 4 (interior)
    /// locations on any grid with side length at least 2.
    pub(crate) fn neighbors(&self, location: Location) -> impl Iterator<Item = Location> + '_ {
        Step::VARIANTS.iter()
            .map(move |step| step.attempt_from(location))
            .filter(|neighbor| neighbor.0 < self.side && neighbor.1 < self.side)
    }

    /// All termini with their labels, row-major.
    pub(crate) fn termini(&self) -> impl Iterator<Item = (Location, LabelId)> + '_ {
        self.locations().filter_map(|location| match self.cell(location) {
            Cell::Terminus { label } => Some((location, label)),
            _ => None,
        })
    }

    /// Solves this grid, deferring to a [`GridSolver`] and writing the
    /// decoded assignment into previously free cells.
    ///
    /// Returns `Ok(None)` when no solution exists; this is an ordinary
    /// outcome, not an error. [`Err`] is reserved for failures at the SAT
    /// engine boundary.
    pub fn solve(mut self) -> Result<Option<Self>, SolveError> {
        let assignment = match GridSolver::from(&self).solve()? {
            None => return Ok(None),
            Some(assignment) => assignment,
        };

        for (location, label) in assignment {
            let cell = &mut self.cells[location.as_index()];
            if *cell == Cell::Empty {
                *cell = Cell::Path { label };
            }
            // termini already carry their labels; the model agrees with
            // them by the unit clauses
        }

        Ok(Some(self))
    }
}

impl Display for Grid {
    /// Formats the grid the way puzzle files are written: `.` for a free
    /// cell, one character per cell while all labels fit in one digit,
    /// comma-delimited otherwise.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let delimited = self.num_labels > 9;

        for row in self.cells.rows() {
            for (col, cell) in row.iter().enumerate() {
                if delimited && col > 0 {
                    f.write_char(',')?;
                }
                match cell.label() {
                    Some(label) => write!(f, "{}", label)?,
                    None => f.write_char('.')?,
                }
            }
            f.write_char('\n')?;
        }

        Ok(())
    }
}
