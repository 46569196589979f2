use crate::core::render::glyph::Glyph;
use crate::core::render::render_mode::ModeSelection;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderConfig {
    pub mode: ModeSelection,
    pub glyph: Glyph,
    /// Rotates the palette; only `color_shift mod 40` matters.
    pub color_shift: i64,
    pub clear_before_render: bool,
}
