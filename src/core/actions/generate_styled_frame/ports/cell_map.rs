use crate::core::data::styled_frame::StyledCell;

pub trait CellMap {
    fn map(&self, count: u32) -> StyledCell;

    fn display_name(&self) -> &str;
}
