//! Reading puzzle files into [`Grid`]s.
//!
//! Two layouts are accepted: one character per cell per line, and
//! comma-delimited tokens per line for puzzles whose labels need more than
//! one digit. A `.` marks a free cell; every other token must be a positive
//! integer label.

use std::ffi::OsStr;
use std::path::Path;

use itertools::Itertools;
use thiserror::Error;

use crate::builder::GridBuilder;
use crate::grid::Grid;
use crate::label::LabelId;
use crate::location::Location;

/// How a puzzle file lays out its tokens.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    /// One character per cell, one row per line.
    Chars,
    /// Comma-delimited tokens, one row per line.
    Delimited,
}

impl Format {
    /// Choose a format from a file extension: `.csv` means
    /// [`Delimited`](Self::Delimited), anything else [`Chars`](Self::Chars).
    pub fn from_extension(path: &Path) -> Self {
        match path.extension().and_then(OsStr::to_str) {
            Some("csv") => Self::Delimited,
            _ => Self::Chars,
        }
    }
}

/// Reasons puzzle text cannot become a [`Grid`].
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseError {
    /// The input contained no rows.
    #[error("puzzle is empty")]
    Empty,
    /// A row's cell count disagrees with the row count.
    #[error("puzzle is not square: {rows} row(s), but row {row} has {cols} cell(s)")]
    NotSquare {
        /// Number of rows in the input.
        rows: usize,
        /// Zero-based index of the offending row.
        row: usize,
        /// Number of cells in the offending row.
        cols: usize,
    },
    /// A token was neither `.` nor a positive integer.
    #[error("invalid token {token:?} at row {row}, column {col}")]
    InvalidToken {
        /// The offending token.
        token: String,
        /// Zero-based row of the token.
        row: usize,
        /// Zero-based column of the token.
        col: usize,
    },
    /// A token was the reserved label 0.
    #[error("label 0 at row {row}, column {col}; labels start at 1")]
    ZeroLabel {
        /// Zero-based row of the token.
        row: usize,
        /// Zero-based column of the token.
        col: usize,
    },
}

/// Parse puzzle text into a [`Grid`], failing fast on malformed input
/// before any encoding happens.
pub fn parse(input: &str, format: Format) -> Result<Grid, ParseError> {
    let rows = input.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| match format {
            Format::Chars => line.trim_end().chars().map(String::from).collect_vec(),
            Format::Delimited => line.trim_end().split(',').map(|token| token.trim().to_owned()).collect_vec(),
        })
        .collect_vec();

    if rows.is_empty() {
        return Err(ParseError::Empty);
    }

    let side = rows.len();
    for (row, tokens) in rows.iter().enumerate() {
        if tokens.len() != side {
            return Err(ParseError::NotSquare { rows: side, row, cols: tokens.len() });
        }
    }

    let mut builder = GridBuilder::with_side(side);
    for (row, tokens) in rows.iter().enumerate() {
        for (col, token) in tokens.iter().enumerate() {
            if token == "." {
                continue;
            }

            match token.parse::<LabelId>() {
                Ok(0) => return Err(ParseError::ZeroLabel { row, col }),
                Ok(label) => builder.terminus(Location(row, col), label),
                Err(_) => return Err(ParseError::InvalidToken { token: token.clone(), row, col }),
            };
        }
    }

    // every location was bounds-checked above and label 0 rejected, so the
    // builder cannot have gone invalid
    Ok(builder.build().unwrap())
}
