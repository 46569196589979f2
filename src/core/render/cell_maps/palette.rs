use crate::core::actions::generate_styled_frame::ports::cell_map::CellMap;
use crate::core::data::colour::Colour;
use crate::core::data::styled_frame::StyledCell;

pub const PALETTE_SIZE: usize = 40;

/// A closed colour wheel: red through yellow, green, cyan, blue, magenta and back.
pub const PALETTE: [Colour; PALETTE_SIZE] = [
    Colour::new(255, 69, 56),
    Colour::new(255, 99, 56),
    Colour::new(255, 129, 56),
    Colour::new(255, 159, 56),
    Colour::new(255, 188, 56),
    Colour::new(255, 218, 56),
    Colour::new(255, 248, 56),
    Colour::new(232, 255, 56),
    Colour::new(202, 255, 56),
    Colour::new(172, 255, 56),
    Colour::new(143, 255, 56),
    Colour::new(113, 255, 56),
    Colour::new(83, 255, 56),
    Colour::new(56, 255, 59),
    Colour::new(56, 255, 89),
    Colour::new(56, 255, 119),
    Colour::new(56, 255, 149),
    Colour::new(56, 255, 178),
    Colour::new(56, 255, 208),
    Colour::new(56, 255, 238),
    Colour::new(56, 242, 255),
    Colour::new(56, 212, 255),
    Colour::new(56, 182, 255),
    Colour::new(56, 152, 255),
    Colour::new(56, 123, 255),
    Colour::new(56, 93, 255),
    Colour::new(56, 63, 255),
    Colour::new(79, 56, 255),
    Colour::new(109, 56, 255),
    Colour::new(139, 56, 255),
    Colour::new(168, 56, 255),
    Colour::new(198, 56, 255),
    Colour::new(228, 56, 255),
    Colour::new(255, 56, 252),
    Colour::new(255, 56, 222),
    Colour::new(255, 56, 192),
    Colour::new(255, 56, 162),
    Colour::new(255, 56, 133),
    Colour::new(255, 56, 103),
    Colour::new(255, 56, 73),
];

#[must_use]
pub fn palette_colour(count: u32, color_shift: i64) -> Colour {
    let size = PALETTE_SIZE as i64;
    let index = (i64::from(count) % size + color_shift.rem_euclid(size)) % size;

    PALETTE[index as usize]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteCellMap {
    color_shift: i64,
}

impl PaletteCellMap {
    #[must_use]
    pub fn new(color_shift: i64) -> Self {
        Self { color_shift }
    }
}

impl CellMap for PaletteCellMap {
    fn map(&self, count: u32) -> StyledCell {
        if count == 0 {
            return StyledCell::Blank;
        }

        StyledCell::Glyph(palette_colour(count, self.color_shift))
    }

    fn display_name(&self) -> &str {
        "Colour palette"
    }
}
