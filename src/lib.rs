#![warn(missing_docs)]

//! # `chelate`
//!
//! A solver for square [Numberlink](https://en.wikipedia.org/wiki/Numberlink) puzzles:
//! grids where some cells carry an integer label and the goal is to connect
//! each pair of identically labeled termini with a non-crossing path while
//! filling every cell.
//! Begin by parsing a puzzle file with [`parse::parse`] or building a grid
//! with [`GridBuilder`], then call [`solve()`](Grid::solve), consuming the
//! grid and yielding a solved version of it, or [`None`] if the puzzle has
//! no solution.
//!
//! # Internals
//! This crate is driven by expressing the puzzle as a Boolean
//! satisfiability problem, extracting a model from the SAT engine, and
//! re-expressing the grid accordingly.
//!
//! One variable exists for each (cell, label) pair, true when the cell ends
//! up carrying the label. The clauses assert:
//! 1. Every cell carries exactly one label.
//! 2. Every terminus carries the label the puzzle gives it, and exactly one
//!    of its neighbors shares that label (the cell its path leaves by).
//! 3. Every free cell shares its label with exactly two of its neighbors
//!    (the cells its path enters and leaves by).
//!
//! The cardinality bounds are encoded combinatorially, without auxiliary
//! counting variables; cell neighborhoods never exceed four cells, so the
//! clause counts stay small.

pub use builder::{BuildError, GridBuilder};
pub use grid::Grid;
pub use label::LabelId;
pub use location::Location;
pub use solver::SolveError;

pub(crate) mod builder;
mod tests;
pub(crate) mod cell;
pub(crate) mod grid;
pub(crate) mod index;
pub(crate) mod label;
pub(crate) mod location;
pub(crate) mod logic;
pub mod parse;
pub mod render;
pub(crate) mod solver;
pub(crate) mod step;
