pub mod algorithm;
pub mod escape_time;
pub mod fractal_mode;
