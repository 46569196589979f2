use crate::core::actions::generate_styled_frame::ports::cell_map::CellMap;
use crate::core::data::styled_frame::StyledCell;

/// Shows the raw iteration count of every cell, interior points included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumberCellMap;

impl CellMap for NumberCellMap {
    fn map(&self, count: u32) -> StyledCell {
        StyledCell::Count(count)
    }

    fn display_name(&self) -> &str {
        "Iteration counts"
    }
}
