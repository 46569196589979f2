use crate::core::actions::generate_styled_frame::ports::cell_map::CellMap;
use crate::core::data::grid::Grid;
use crate::core::render::cell_maps::channel::{Channel, ChannelCellMap};
use crate::core::render::cell_maps::number::NumberCellMap;
use crate::core::render::cell_maps::palette::PaletteCellMap;
use crate::core::render::render_mode::RenderMode;

/// Builds the cell map for a mode. Channel modes normalise against this grid's largest count.
#[must_use]
pub fn cell_map_factory(mode: RenderMode, color_shift: i64, grid: &Grid) -> Box<dyn CellMap> {
    let channel = |channel| -> Box<dyn CellMap> {
        Box::new(ChannelCellMap::new(channel, grid.max_escape_count()))
    };

    match mode {
        RenderMode::Color => Box::new(PaletteCellMap::new(color_shift)),
        RenderMode::Number => Box::new(NumberCellMap),
        RenderMode::Red => channel(Channel::Red),
        RenderMode::Green => channel(Channel::Green),
        RenderMode::Blue => channel(Channel::Blue),
        RenderMode::Gray => channel(Channel::Gray),
    }
}
