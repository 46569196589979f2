pub mod colour;
pub mod complex;
pub mod complex_rect;
pub mod grid;
pub mod grid_point;
pub mod resolution;
pub mod styled_frame;
