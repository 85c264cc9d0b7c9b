use crate::label::LabelId;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) enum Cell {
    /// A pre-labeled endpoint; two termini sharing a label are the ends of
    /// one path.
    Terminus { label: LabelId },
    /// A cell the solver placed on the path for `label`.
    Path { label: LabelId },
    #[default]
    Empty,
}

impl Cell {
    pub(crate) fn label(&self) -> Option<LabelId> {
        match self {
            Self::Terminus { label } | Self::Path { label } => Some(*label),
            Self::Empty => None,
        }
    }

    pub(crate) fn is_terminus(&self) -> bool {
        matches!(self, Self::Terminus { .. })
    }
}
