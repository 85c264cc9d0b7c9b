use std::collections::HashMap;
use std::ops::RangeInclusive;

use itertools::Itertools;
use log::debug;
use thiserror::Error;
use varisat::{CnfFormula, Lit, Solver};

use crate::grid::Grid;
use crate::index::VarIndex;
use crate::label::LabelId;
use crate::location::Location;
use crate::logic::{at_least_of, at_most_of, exactly_one};

/// Reasons solving may fail outright.
///
/// An unsatisfiable formula is not a failure; it is reported as the absence
/// of a solution.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The SAT engine itself failed.
    #[error("SAT solver error: {0}")]
    Solver(#[from] varisat::solver::SolverError),
    /// A satisfying model left a cell with no positive label variable.
    /// The per-cell domain clauses make this unreachable for well-formed
    /// grids.
    #[error("no label decoded for the cell at {0:?}")]
    UnassignedCell(Location),
}

/// Reduces a [`Grid`] to CNF, runs the SAT engine, and decodes the model
/// into a label for every cell. Use [`Self::solve`] to attempt to find a
/// solution.
///
/// # Logical setup
/// One Boolean variable exists per (cell, label) pair, true when the cell
/// carries the label; see [`VarIndex`] for the numbering. Four clause
/// groups state the puzzle rules:
///
/// 1. Every cell carries exactly one label.
/// 2. Every terminus carries the label it was given.
/// 3. Every terminus has exactly one identically labeled neighbor, the
///    cell by which its path leaves.
/// 4. Every free cell carrying label A has exactly two identically labeled
///    neighbors, the cells by which the path enters and leaves. The bound
///    is an implication guarded on the cell actually carrying A, stated
///    for every label.
pub(crate) struct GridSolver<'a> {
    grid: &'a Grid,
    index: VarIndex,
    termini: Vec<(Location, LabelId)>,
}

impl<'a> From<&'a Grid> for GridSolver<'a> {
    fn from(grid: &'a Grid) -> Self {
        Self {
            index: VarIndex::new(grid.side(), grid.num_labels()),
            termini: grid.termini().collect_vec(),
            grid,
        }
    }
}

impl GridSolver<'_> {
    #[inline]
    fn valid_labels(&self) -> RangeInclusive<LabelId> {
        1..=self.grid.num_labels()
    }

    /// Clause group 1: every cell carries exactly one label.
    pub(crate) fn cell_domain(&self) -> Vec<Vec<Lit>> {
        self.grid.locations()
            .flat_map(|location| exactly_one(
                self.valid_labels()
                    .map(|label| self.index.var(location, label))
                    .collect_vec()
            ))
            .collect_vec()
    }

    /// Clause group 2: unit clauses pinning each terminus to its given
    /// label.
    pub(crate) fn terminus_fixing(&self) -> Vec<Vec<Lit>> {
        self.termini.iter()
            .map(|(location, label)| vec![self.index.var(*location, *label).positive()])
            .collect_vec()
    }

    /// Clause group 3: every terminus has exactly one identically labeled
    /// neighbor.
    pub(crate) fn terminus_adjacency(&self) -> Vec<Vec<Lit>> {
        self.termini.iter()
            .flat_map(|(location, label)| exactly_one(
                self.grid.neighbors(*location)
                    .map(|neighbor| self.index.var(neighbor, *label))
                    .collect_vec()
            ))
            .collect_vec()
    }

    /// Clause group 4: every free cell carrying a label has exactly two
    /// identically labeled neighbors.
    pub(crate) fn free_cell_adjacency(&self) -> Vec<Vec<Lit>> {
        let mut clauses = Vec::new();

        for location in self.grid.locations() {
            if self.grid.cell(location).is_terminus() {
                continue;
            }

            let neighbors = self.grid.neighbors(location).collect_vec();
            for label in self.valid_labels() {
                let guard = [self.index.var(location, label).negative()];
                let vars = neighbors.iter()
                    .map(|neighbor| self.index.var(*neighbor, label))
                    .collect_vec();

                clauses.extend(at_most_of(&vars, 2, &guard));
                clauses.extend(at_least_of(&vars, 2, &guard));
            }
        }

        clauses
    }

    /// Solve the grid, returning [`Ok`]`(Some(_))` with the label decoded
    /// for every cell, [`Ok`]`(None)` if the formula is unsatisfiable, or
    /// [`Err`] if the SAT engine fails or the model cannot be decoded.
    pub(crate) fn solve(&self) -> Result<Option<HashMap<Location, LabelId>>, SolveError> {
        let clauses = [
            self.cell_domain(),
            self.terminus_fixing(),
            self.terminus_adjacency(),
            self.free_cell_adjacency(),
        ];
        debug!(
            "encoded {} variables into {} clauses",
            self.index.len(),
            clauses.iter().map(Vec::len).sum::<usize>(),
        );

        let mut solver = Solver::new();
        clauses.into_iter().for_each(|group| solver.add_formula(&CnfFormula::from(group)));

        if !solver.solve()? {
            return Ok(None);
        }
        let model = solver.model().unwrap();

        let mut assignment = HashMap::with_capacity(self.grid.side() * self.grid.side());
        for lit in model.iter().filter(|lit| lit.is_positive()) {
            let (location, label) = self.index.lookup(lit.var());
            // clause group 1 guarantees one label per cell, so no location
            // is written twice
            assignment.insert(location, label);
        }

        for location in self.grid.locations() {
            if !assignment.contains_key(&location) {
                return Err(SolveError::UnassignedCell(location));
            }
        }

        Ok(Some(assignment))
    }
}
