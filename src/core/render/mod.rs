pub mod cell_maps;
pub mod encode_frame;
pub mod errors;
pub mod frame_renderer;
pub mod glyph;
pub mod render_config;
pub mod render_mode;
pub mod rendered_frame;
