pub mod generate_fractal;
pub mod generate_styled_frame;
pub mod sample_grid;
