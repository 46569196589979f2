pub mod grid_to_complex_coords;
