use strum::VariantArray;

use crate::location::Location;

/// A step to one of the four orthogonal neighbors of a cell.
///
/// Variant order fixes the enumeration order of neighbor listings, which
/// keeps generated clauses deterministic.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, VariantArray)]
pub(crate) enum Step {
    Up,
    Right,
    Down,
    Left,
}

impl Step {
    /// Attempt the step from `location` without bounds checking.
    /// Stepping up or left from row or column 0 wraps around and is
    /// discarded by the caller's bounds check.
    pub(crate) fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((-1, 0)),
            Self::Right => location.offset_by((0, 1)),
            Self::Down => location.offset_by((1, 0)),
            Self::Left => location.offset_by((0, -1)),
        }
    }
}
