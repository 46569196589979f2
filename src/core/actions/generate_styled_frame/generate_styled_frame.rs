use crate::core::actions::generate_styled_frame::ports::cell_map::CellMap;
use crate::core::data::grid::{Grid, GridError};
use crate::core::data::styled_frame::{StyledCell, StyledFrame};

/// Maps every iteration count of a grid to the cell it should be drawn as.
pub fn generate_styled_frame<CMap: CellMap + ?Sized>(
    grid: &Grid,
    mapper: &CMap,
) -> Result<StyledFrame, GridError> {
    let cells: Vec<StyledCell> = grid.cells().iter().map(|&count| mapper.map(count)).collect();

    StyledFrame::from_cells(grid.resolution(), cells)
}
