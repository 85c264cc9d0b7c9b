/// Identifier of one puzzle path.
///
/// Valid labels are `1..=L` where `L` is the highest label placed on the
/// grid; 0 never labels a cell.
pub type LabelId = usize;
