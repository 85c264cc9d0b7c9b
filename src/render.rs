//! Colored terminal rendering of solved grids.
//!
//! Presentation only; nothing here feeds back into the encoding.

use std::fmt::Write;

use crate::grid::Grid;
use crate::label::LabelId;
use crate::location::Location;

/// ANSI background color escapes, indexed by label modulo the table size.
const BACKGROUNDS: [&str; 16] = [
    "\x1b[40m", "\x1b[41m", "\x1b[42m", "\x1b[43m",
    "\x1b[44m", "\x1b[45m", "\x1b[46m", "\x1b[47m",
    "\x1b[100m", "\x1b[101m", "\x1b[102m", "\x1b[103m",
    "\x1b[104m", "\x1b[105m", "\x1b[106m", "\x1b[107m",
];

const RESET: &str = "\x1b[0m";

fn background(label: LabelId) -> &'static str {
    BACKGROUNDS[label % BACKGROUNDS.len()]
}

/// Render `grid` as a block of colored cells, two columns per cell.
/// Unresolved cells stay uncolored.
pub fn colored(grid: &Grid) -> String {
    let mut out = String::new();

    for row in 0..grid.side() {
        for col in 0..grid.side() {
            match grid.label_at(Location(row, col)) {
                Some(label) => {
                    out.push_str(background(label));
                    out.push_str("  ");
                    out.push_str(RESET);
                }
                None => out.push_str("  "),
            }
        }
        out.push('\n');
    }

    out
}

/// A legend mapping each label in the grid's label set to its color.
pub fn color_key(grid: &Grid) -> String {
    let mut out = String::new();

    for label in 1..=grid.num_labels() {
        // writing to a String cannot fail
        write!(out, "{} {} {} ", background(label), label, RESET).unwrap();
    }

    out
}
